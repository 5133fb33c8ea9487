use time::OffsetDateTime;

use crate::{
    commands::{
        arguments::{HumanDate, StatusChoice, TrimmedString},
        autocomplete_tournament, reply_private, user_err, CommandResult, Context,
    },
    models::{TournamentChanges, TournamentId},
};

use super::summary_line;

/// Edit the name, description, location or date of a tournament.
#[poise::command(slash_command, rename = "edit", required_permissions = "ADMINISTRATOR")]
pub async fn edit(
    ctx: Context<'_>,

    #[description = "Tournament id."]
    #[autocomplete = "autocomplete_tournament"]
    tournament: TrimmedString,

    #[description = "New name. The id stays the same."] name: Option<TrimmedString>,

    #[description = "New description."] description: Option<TrimmedString>,

    #[description = "New location."] location: Option<TrimmedString>,

    #[description = "New date, e.g. `2025-03-14` or `tomorrow`."] date: Option<HumanDate>,
) -> CommandResult {
    let today = OffsetDateTime::now_utc().date();

    let changes = TournamentChanges {
        name: name.map(Into::into),
        description: description.map(Into::into),
        location: location.map(Into::into),
        status: None,
        date: date.map(|date| date.materialize(today)),
    };

    if changes.is_empty() {
        return Err(user_err("Nothing to change, please provide at least one field"));
    }

    let tournament = ctx
        .data()
        .tournament_service
        .update_tournament(&TournamentId(tournament.into()), changes)
        .await?;

    reply_private(
        ctx,
        format!("# Tournament updated\n{}", summary_line(&tournament)),
    )
    .await
}

/// Mark a tournament as upcoming, active or finalized.
#[poise::command(slash_command, rename = "status", required_permissions = "ADMINISTRATOR")]
pub async fn status(
    ctx: Context<'_>,

    #[description = "Tournament id."]
    #[autocomplete = "autocomplete_tournament"]
    tournament: TrimmedString,

    #[description = "The new status."] status: StatusChoice,
) -> CommandResult {
    let tournament = ctx
        .data()
        .tournament_service
        .update_tournament(
            &TournamentId(tournament.into()),
            TournamentChanges {
                status: Some(status.into()),
                ..Default::default()
            },
        )
        .await?;

    reply_private(
        ctx,
        format!(
            "# **{}** is now {}\n{}",
            tournament.name,
            tournament.status,
            summary_line(&tournament)
        ),
    )
    .await
}
