use poise::CreateReply;

use crate::{
    commands::{
        arguments::{AttemptTimes, TrimmedString},
        autocomplete_tournament, reply_private, user_err, CommandResult, Context,
    },
    models::{CategoryId, CompetitorId, TournamentId},
    services::Standings,
    utils::formatting::{format_average, format_time, format_times},
};

/// Record round results and publish standings.
#[poise::command(slash_command, subcommands("record", "standings"))]
pub async fn result(_ctx: Context<'_>) -> CommandResult {
    Err(user_err("Please pick one of the `/result` subcommands"))
}

fn render_standings(standings: &Standings) -> String {
    let mut table = format!(
        "{:>3} {:<20} {:>8} {:>8}  {}\n",
        "#", "Competitor", "Average", "Best", "Attempts"
    );

    for row in &standings.rows {
        let rank = row
            .rank
            .map(|rank| rank.to_string())
            .unwrap_or_else(|| "-".to_string());

        table += &format!(
            "{rank:>3} {:<20} {:>8} {:>8}  {}\n",
            row.competitor,
            format_average(row.result.average),
            format_time(row.result.best),
            format_times(&row.result.times),
        );
    }

    format!(
        "# {} - {}, round {} ({})\n```\n{table}```",
        standings.tournament, standings.category, standings.round, standings.format
    )
}

/// Record the attempts of a competitor in a WCA round. Replaces earlier attempts.
#[poise::command(slash_command, required_permissions = "ADMINISTRATOR")]
async fn record(
    ctx: Context<'_>,

    #[description = "Tournament id."]
    #[autocomplete = "autocomplete_tournament"]
    tournament: TrimmedString,

    #[description = "Category id."] category: TrimmedString,

    #[description = "Round number."]
    #[min = 1]
    round: u32,

    #[description = "Competitor id."] competitor: TrimmedString,

    #[description = "Attempts in seconds or m:ss.xx, e.g. `12.34 11.02 DNF 1:03.50 10.90`."]
    times: AttemptTimes,
) -> CommandResult {
    let competitor = CompetitorId(competitor.into());

    let result = ctx
        .data()
        .tournament_service
        .record_result(
            &TournamentId(tournament.into()),
            &CategoryId(category.into()),
            round,
            &competitor,
            times.into(),
        )
        .await?;

    reply_private(
        ctx,
        format!(
            "# Result recorded for `{competitor}`\nAttempts: {}\nBest: **{}**, average: **{}**",
            format_times(&result.times),
            format_time(result.best),
            format_average(result.average),
        ),
    )
    .await
}

/// Show the ranked results of a round.
#[poise::command(slash_command)]
async fn standings(
    ctx: Context<'_>,

    #[description = "Tournament id."]
    #[autocomplete = "autocomplete_tournament"]
    tournament: TrimmedString,

    #[description = "Category id."] category: TrimmedString,

    #[description = "Round number. Defaults to 1."]
    #[min = 1]
    round: Option<u32>,
) -> CommandResult {
    let standings = ctx
        .data()
        .tournament_service
        .standings(
            &TournamentId(tournament.into()),
            &CategoryId(category.into()),
            round.unwrap_or(1),
        )
        .await?;

    ctx.send(CreateReply::default().content(render_standings(&standings)))
        .await?;

    Ok(())
}
