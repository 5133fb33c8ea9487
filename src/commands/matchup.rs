use poise::CreateReply;

use crate::{
    commands::{
        arguments::{AttemptTime, SideChoice, TrimmedString},
        autocomplete_tournament, reply_private, user_err, CommandResult, Context,
    },
    models::{CategoryId, CompetitorId, TournamentId},
    scoring::{Match, MatchId, ATTEMPTS_PER_MATCH, WINS_NEEDED},
    utils::formatting::format_time,
};

/// Run head-to-head duels in Red Bull categories.
#[poise::command(
    slash_command,
    rename = "match",
    subcommands("open", "record", "show", "list", "remove")
)]
pub async fn matchup(_ctx: Context<'_>) -> CommandResult {
    Err(user_err("Please pick one of the `/match` subcommands"))
}

fn render_match(duel: &Match) -> String {
    let width = duel.first.name.chars().count().max(duel.second.name.chars().count()).max(8);

    let mut table = format!(
        "{:<8} {:>width$} {:>width$}\n",
        "", duel.first.name, duel.second.name
    );
    for attempt in 0..ATTEMPTS_PER_MATCH {
        table += &format!(
            "{:<8} {:>width$} {:>width$}\n",
            format!("#{}", attempt + 1),
            format_time(duel.first.times[attempt]),
            format_time(duel.second.times[attempt]),
        );
    }
    table += &format!(
        "{:<8} {:>width$} {:>width$}\n",
        "Wins", duel.first.wins, duel.second.wins
    );

    let outcome = match duel.winner_slot() {
        Some(winner) => format!("**{}** wins the match!", winner.name),
        None => format!("First to {WINS_NEEDED} wins takes the match."),
    };

    format!(
        "# Match {}: {} vs {}\n`{}` / `{}`, round {}\n```\n{table}```\n{outcome}",
        duel.id,
        duel.first.name,
        duel.second.name,
        duel.tournament_id,
        duel.category_id,
        duel.round
    )
}

/// Open a duel between two entrants of a Red Bull category.
#[poise::command(slash_command, required_permissions = "ADMINISTRATOR")]
async fn open(
    ctx: Context<'_>,

    #[description = "Tournament id."]
    #[autocomplete = "autocomplete_tournament"]
    tournament: TrimmedString,

    #[description = "Category id."] category: TrimmedString,

    #[description = "Competitor id of the first side."] first: TrimmedString,

    #[description = "Competitor id of the second side."] second: TrimmedString,

    #[description = "Bracket round. Defaults to 1."]
    #[min = 1]
    round: Option<u32>,
) -> CommandResult {
    let tournament = TournamentId(tournament.into());
    let category = CategoryId(category.into());

    let (first, second) = ctx
        .data()
        .tournament_service
        .head_to_head_slots(
            &tournament,
            &category,
            &CompetitorId(first.into()),
            &CompetitorId(second.into()),
        )
        .await?;

    let duel = ctx
        .data()
        .match_board
        .open_match(tournament, category, round.unwrap_or(1), first, second)
        .await
        .map_err(|err| user_err(err.to_string()))?;

    ctx.send(CreateReply::default().content(render_match(&duel)))
        .await?;

    Ok(())
}

/// Record or correct one attempt of a duel. Use `DNF` to clear it.
#[poise::command(slash_command, required_permissions = "ADMINISTRATOR")]
async fn record(
    ctx: Context<'_>,

    #[description = "Match number."] id: u32,

    #[description = "Which competitor solved."] side: SideChoice,

    #[description = "Attempt number."]
    #[min = 1]
    #[max = 3]
    attempt: u8,

    #[description = "Time in seconds or m:ss.xx."] time: AttemptTime,
) -> CommandResult {
    let attempt_index = usize::from(attempt)
        .checked_sub(1)
        .ok_or(user_err("Attempts are numbered from 1"))?;

    let was_decided = ctx
        .data()
        .match_board
        .get(MatchId(id))
        .await
        .map_err(|err| user_err(err.to_string()))?
        .winner
        .is_some();

    let duel = ctx
        .data()
        .match_board
        .record_attempt(MatchId(id), side.into(), attempt_index, time.into())
        .await
        .map_err(|err| user_err(err.to_string()))?;

    let content = render_match(&duel);

    if duel.winner.is_some() && !was_decided {
        ctx.send(CreateReply::default().content(content)).await?;
        Ok(())
    } else {
        reply_private(ctx, content).await
    }
}

/// Show the current state of a duel.
#[poise::command(slash_command)]
async fn show(ctx: Context<'_>, #[description = "Match number."] id: u32) -> CommandResult {
    let duel = ctx
        .data()
        .match_board
        .get(MatchId(id))
        .await
        .map_err(|err| user_err(err.to_string()))?;

    reply_private(ctx, render_match(&duel)).await
}

/// List the duels opened since the bot started.
#[poise::command(slash_command)]
async fn list(
    ctx: Context<'_>,

    #[description = "Only show matches of this tournament."]
    #[autocomplete = "autocomplete_tournament"]
    tournament: Option<TrimmedString>,

    #[description = "Only show matches of this category."] category: Option<TrimmedString>,
) -> CommandResult {
    let tournament = tournament.map(|t| TournamentId(t.into()));
    let category = category.map(|c| CategoryId(c.into()));

    let matches = ctx
        .data()
        .match_board
        .list(tournament.as_ref(), category.as_ref())
        .await;

    if matches.is_empty() {
        return reply_private(ctx, "# There are no matches yet").await;
    }

    let list = matches.iter().fold(String::new(), |acc, duel| {
        let state = match duel.winner_slot() {
            Some(winner) => format!("won by **{}**", winner.name),
            None => format!("{}-{}", duel.first.wins, duel.second.wins),
        };

        acc + &format!(
            " - Match {}: {} vs {} (`{}`, round {}) - {state}\n",
            duel.id, duel.first.name, duel.second.name, duel.category_id, duel.round
        )
    });

    reply_private(ctx, format!("# Matches:\n{list}")).await
}

/// Take a duel off the board, finished or not.
#[poise::command(slash_command, required_permissions = "ADMINISTRATOR")]
async fn remove(ctx: Context<'_>, #[description = "Match number."] id: u32) -> CommandResult {
    let duel = ctx
        .data()
        .match_board
        .remove(MatchId(id))
        .await
        .map_err(|err| user_err(err.to_string()))?;

    reply_private(
        ctx,
        format!(
            "# Match {} removed
{} vs {} in `{}`",
            duel.id, duel.first.name, duel.second.name, duel.category_id
        ),
    )
    .await
}
