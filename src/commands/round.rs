use crate::{
    commands::{
        arguments::{RoundFormatChoice, TrimmedString},
        autocomplete_tournament, reply_private, user_err, CommandResult, Context,
    },
    models::{CategoryId, TournamentId},
};

/// Manage the rounds of a WCA category.
#[poise::command(
    slash_command,
    subcommands("add", "remove", "format"),
    required_permissions = "ADMINISTRATOR",
    default_member_permissions = "ADMINISTRATOR"
)]
pub async fn round(_ctx: Context<'_>) -> CommandResult {
    Err(user_err("Please pick one of the `/round` subcommands"))
}

/// Add the next round to a WCA category.
#[poise::command(slash_command)]
async fn add(
    ctx: Context<'_>,

    #[description = "Tournament id."]
    #[autocomplete = "autocomplete_tournament"]
    tournament: TrimmedString,

    #[description = "Category id."] category: TrimmedString,

    #[description = "Defaults to average of 5."] format: Option<RoundFormatChoice>,
) -> CommandResult {
    let round = ctx
        .data()
        .tournament_service
        .add_round(
            &TournamentId(tournament.into()),
            &CategoryId(category.into()),
            format.map(Into::into).unwrap_or_default(),
        )
        .await?;

    reply_private(
        ctx,
        format!("# Round {} ({}) added", round.number, round.format),
    )
    .await
}

/// Remove a round and its results.
#[poise::command(slash_command)]
async fn remove(
    ctx: Context<'_>,

    #[description = "Tournament id."]
    #[autocomplete = "autocomplete_tournament"]
    tournament: TrimmedString,

    #[description = "Category id."] category: TrimmedString,

    #[description = "Round number."]
    #[min = 1]
    number: u32,
) -> CommandResult {
    let round = ctx
        .data()
        .tournament_service
        .remove_round(
            &TournamentId(tournament.into()),
            &CategoryId(category.into()),
            number,
        )
        .await?;

    reply_private(
        ctx,
        format!(
            "# Round {} removed\n{} results were discarded.",
            round.number,
            round.results.len()
        ),
    )
    .await
}

/// Change the format of a round. Stored results are recomputed.
#[poise::command(slash_command)]
async fn format(
    ctx: Context<'_>,

    #[description = "Tournament id."]
    #[autocomplete = "autocomplete_tournament"]
    tournament: TrimmedString,

    #[description = "Category id."] category: TrimmedString,

    #[description = "Round number."]
    #[min = 1]
    number: u32,

    #[description = "The new format."] format: RoundFormatChoice,
) -> CommandResult {
    let round = ctx
        .data()
        .tournament_service
        .set_round_format(
            &TournamentId(tournament.into()),
            &CategoryId(category.into()),
            number,
            format.into(),
        )
        .await?;

    reply_private(
        ctx,
        format!(
            "# Round {} is now {}\n{} results were recomputed.",
            round.number,
            round.format,
            round.results.len()
        ),
    )
    .await
}
