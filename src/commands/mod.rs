mod arguments;
mod category;
mod competitor;
mod help;
mod matchup;
mod result;
mod round;
mod tournament;

use poise::CreateReply;

use crate::{services::ServiceError, BotState};

pub use category::category;
pub use competitor::competitor;
pub use help::help;
pub use matchup::matchup;
pub use result::result;
pub use round::round;
pub use tournament::tournament;

type CommandResult = Result<(), CommandError>;
type Context<'a> = poise::Context<'a, BotState, CommandError>;

#[derive(thiserror::Error, Debug)]
pub enum CommandError {
    #[error("{message}")]
    User { message: String },
    #[error("{message}")]
    InvalidArgument { message: String },
    #[error("{message}")]
    Internal { message: String },
    #[error(transparent)]
    Serenity(#[from] serenity::Error),
}

impl From<ServiceError> for CommandError {
    fn from(error: ServiceError) -> Self {
        if error.is_user_error() {
            user_err(error.to_string())
        } else {
            internal_err(error.to_string())
        }
    }
}

fn user_err(message: impl Into<String>) -> CommandError {
    CommandError::User {
        message: message.into(),
    }
}

fn internal_err(message: impl Into<String>) -> CommandError {
    CommandError::Internal {
        message: message.into(),
    }
}

/// Replies only to the organizer who ran the command.
async fn reply_private(ctx: Context<'_>, content: impl Into<String>) -> CommandResult {
    ctx.send(CreateReply::default().content(content).ephemeral(true))
        .await?;
    Ok(())
}

/// Suggests tournament ids while an organizer types one.
async fn autocomplete_tournament(ctx: Context<'_>, partial: &str) -> Vec<String> {
    let partial = partial.to_lowercase();

    match ctx.data().tournament_service.list_tournaments().await {
        Ok(tournaments) => tournaments
            .into_iter()
            .map(|t| t.id.0)
            .filter(|id| id.to_lowercase().contains(&partial))
            .take(25)
            .collect(),
        Err(err) => {
            tracing::warn!("Could not autocomplete tournaments: {err}");
            Vec::new()
        }
    }
}
