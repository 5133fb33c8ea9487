use crate::{
    commands::{
        arguments::{CategoryFormatChoice, RoundFormatChoice, TrimmedString},
        autocomplete_tournament, reply_private, user_err, CommandResult, Context,
    },
    models::{CategoryFormat, CategoryId, TournamentId},
};

/// Manage the categories of a tournament.
#[poise::command(
    slash_command,
    subcommands("add", "remove", "format"),
    required_permissions = "ADMINISTRATOR",
    default_member_permissions = "ADMINISTRATOR"
)]
pub async fn category(_ctx: Context<'_>) -> CommandResult {
    Err(user_err("Please pick one of the `/category` subcommands"))
}

/// Add a category. WCA categories start with round 1.
#[poise::command(slash_command)]
async fn add(
    ctx: Context<'_>,

    #[description = "Tournament id."]
    #[autocomplete = "autocomplete_tournament"]
    tournament: TrimmedString,

    #[description = "Category name, e.g. `3x3` or `Pyraminx`."] name: TrimmedString,

    #[description = "How the category is scored."] format: CategoryFormatChoice,

    #[description = "Format of round 1 in WCA categories. Defaults to average of 5."]
    first_round: Option<RoundFormatChoice>,
) -> CommandResult {
    let category = ctx
        .data()
        .tournament_service
        .add_category(
            &TournamentId(tournament.into()),
            name.as_ref(),
            format.into(),
            first_round.map(Into::into),
        )
        .await?;

    let rounds = match category.format {
        CategoryFormat::Wca => format!(
            "It starts with round 1 ({}), add more with `/round add`.",
            category.rounds.first().map(|r| r.format).unwrap_or_default()
        ),
        CategoryFormat::RedBull => "Open head-to-head duels with `/match open`.".to_string(),
    };

    reply_private(
        ctx,
        format!(
            "# Category added\n**{}** (id: `{}`, {})\n{rounds}",
            category.name, category.id, category.format
        ),
    )
    .await
}

/// Remove a category with all of its rounds and results.
#[poise::command(slash_command)]
async fn remove(
    ctx: Context<'_>,

    #[description = "Tournament id."]
    #[autocomplete = "autocomplete_tournament"]
    tournament: TrimmedString,

    #[description = "Category id."] category: TrimmedString,
) -> CommandResult {
    let category = ctx
        .data()
        .tournament_service
        .remove_category(
            &TournamentId(tournament.into()),
            &CategoryId(category.into()),
        )
        .await?;

    reply_private(
        ctx,
        format!(
            "# Category `{}` removed\nIts {} rounds are gone and nobody is entered in it anymore.",
            category.id,
            category.rounds.len()
        ),
    )
    .await
}

/// Switch a category between WCA and Red Bull scoring.
#[poise::command(slash_command)]
async fn format(
    ctx: Context<'_>,

    #[description = "Tournament id."]
    #[autocomplete = "autocomplete_tournament"]
    tournament: TrimmedString,

    #[description = "Category id."] category: TrimmedString,

    #[description = "The new format."] format: CategoryFormatChoice,
) -> CommandResult {
    let category = ctx
        .data()
        .tournament_service
        .set_category_format(
            &TournamentId(tournament.into()),
            &CategoryId(category.into()),
            format.into(),
        )
        .await?;

    reply_private(
        ctx,
        format!(
            "# Category `{}` now uses the {} format",
            category.id, category.format
        ),
    )
    .await
}
