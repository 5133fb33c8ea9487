use poise::{
    serenity_prelude::{Colour, CreateEmbed},
    CreateReply,
};

use crate::{
    commands::{arguments::TrimmedString, autocomplete_tournament, CommandResult, Context},
    models::{CategoryFormat, TournamentId, TournamentStatus},
    utils::formatting::{format_date, format_local_date},
};

fn status_colour(status: TournamentStatus) -> Colour {
    match status {
        TournamentStatus::Active => Colour::DARK_GREEN,
        TournamentStatus::Finalized => Colour::LIGHT_GREY,
        TournamentStatus::Upcoming => Colour::GOLD,
    }
}

/// Show a tournament with its categories and competitors.
#[poise::command(slash_command, rename = "show")]
pub async fn show(
    ctx: Context<'_>,

    #[description = "Tournament id."]
    #[autocomplete = "autocomplete_tournament"]
    tournament: TrimmedString,
) -> CommandResult {
    let tournament = ctx
        .data()
        .tournament_service
        .get_tournament(&TournamentId(tournament.into()))
        .await?;

    let categories = tournament
        .categories
        .iter()
        .fold(String::new(), |acc, category| {
            let entrants = tournament.competitors_in(&category.id).count();
            let detail = match category.format {
                CategoryFormat::Wca => format!("{} rounds", category.rounds.len()),
                CategoryFormat::RedBull => "head-to-head".to_string(),
            };

            acc + &format!(
                " - **{}** (id: `{}`, {}) - {detail}, {entrants} entrants\n",
                category.name, category.id, category.format
            )
        });

    let embed = CreateEmbed::new()
        .title(&tournament.name)
        .description(&tournament.description)
        .colour(status_colour(tournament.status))
        .field("Id", format!("`{}`", tournament.id), true)
        .field("Status", tournament.status.to_string(), true)
        .field(
            "Date",
            format!(
                "{} ({})",
                format_date(tournament.date),
                format_local_date(tournament.date)
            ),
            true,
        )
        .field("Location", &tournament.location, true)
        .field(
            "Competitors",
            tournament.competitors.len().to_string(),
            true,
        )
        .field(
            "Categories",
            if categories.is_empty() {
                "None yet".to_string()
            } else {
                categories
            },
            false,
        );

    ctx.send(CreateReply::default().embed(embed)).await?;

    Ok(())
}
