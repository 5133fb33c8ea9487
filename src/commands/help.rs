use indoc::indoc;
use poise::samples::HelpConfiguration;

use crate::commands::{CommandResult, Context};

const WORKFLOW: &str = indoc! {"
    Typical flow: `/tournament create`, then `/category add`, `/competitor add` and
    `/result record` for every competitor. `/result standings` publishes a round.
    Red Bull categories are played with `/match open` and `/match record`."};

/// Get help for the tournament commands.
#[poise::command(slash_command, ephemeral)]
pub async fn help(
    ctx: Context<'_>,

    #[description = "The command to provide help about."]
    #[autocomplete = "poise::builtins::autocomplete_command"]
    command: Option<String>,
) -> CommandResult {
    let config = HelpConfiguration {
        extra_text_at_bottom: WORKFLOW,
        ..Default::default()
    };

    poise::builtins::help(ctx, command.as_deref(), config).await?;

    Ok(())
}
