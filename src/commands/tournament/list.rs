use crate::commands::{reply_private, CommandResult, Context};

use super::summary_line;

/// List all tournaments.
#[poise::command(slash_command, rename = "list")]
pub async fn list(ctx: Context<'_>) -> CommandResult {
    let tournaments = ctx.data().tournament_service.list_tournaments().await?;

    if tournaments.is_empty() {
        return reply_private(ctx, "# There are no tournaments yet").await;
    }

    let list = tournaments
        .iter()
        .fold(String::new(), |acc, tournament| acc + &summary_line(tournament));

    reply_private(ctx, format!("# Tournaments:\n{list}")).await
}
