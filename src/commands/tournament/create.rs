use indoc::formatdoc;
use time::OffsetDateTime;

use crate::{
    commands::{
        arguments::{HumanDate, StatusChoice, TrimmedString},
        reply_private, CommandResult, Context,
    },
    models::NewTournament,
    utils::formatting::format_date,
};

/// Create a tournament.
#[poise::command(slash_command, rename = "create", required_permissions = "ADMINISTRATOR")]
pub async fn create(
    ctx: Context<'_>,

    #[description = "The tournament name shown to competitors."] name: TrimmedString,

    #[description = "Short description. Defaults to \"Rubik's cube tournament\"."]
    description: Option<TrimmedString>,

    #[description = "Where the tournament takes place. Defaults to \"Tlaxcala, México\"."]
    location: Option<TrimmedString>,

    #[description = "The day of the tournament, e.g. `2025-03-14` or `tomorrow`. Defaults to today."]
    date: Option<HumanDate>,

    #[description = "Defaults to upcoming."] status: Option<StatusChoice>,
) -> CommandResult {
    let today = OffsetDateTime::now_utc().date();

    let tournament = ctx
        .data()
        .tournament_service
        .create_tournament(NewTournament {
            name: name.into(),
            description: description.map(Into::into),
            location: location.map(Into::into),
            status: status.map(Into::into),
            date: date.map(|date| date.materialize(today)),
        })
        .await?;

    reply_private(
        ctx,
        formatdoc! {"
            # Tournament created!
            **{name}** (id: `{id}`) takes place on {date} in {location}.
            Use the id in other commands, starting with `/category add`.",
            name = tournament.name,
            id = tournament.id,
            date = format_date(tournament.date),
            location = tournament.location,
        },
    )
    .await
}
