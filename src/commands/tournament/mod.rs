mod create;
mod edit;
mod list;
mod show;

use crate::{
    models::Tournament,
    utils::formatting::{format_date, format_local_date},
};

use super::{user_err, CommandResult, Context};

/// Create, browse and edit tournaments.
#[poise::command(
    slash_command,
    subcommands("create::create", "list::list", "show::show", "edit::edit", "edit::status")
)]
pub async fn tournament(_ctx: Context<'_>) -> CommandResult {
    Err(user_err("Please pick one of the `/tournament` subcommands"))
}

fn summary_line(tournament: &Tournament) -> String {
    format!(
        " - **{}** (id: `{}`) - {}, {} ({}), {}\n",
        tournament.name,
        tournament.id,
        tournament.status,
        format_date(tournament.date),
        format_local_date(tournament.date),
        tournament.location,
    )
}
