use poise::{CreateReply, FrameworkError};
use tracing::{error, warn};

use crate::{commands::CommandError, BotState};

type Context<'a> = poise::Context<'a, BotState, CommandError>;

pub async fn handle_error(error: FrameworkError<'_, BotState, CommandError>) {
    use FrameworkError::*;

    match error {
        Setup { error, .. } => {
            error!("Error in bot setup: {}", error);
        }

        EventHandler { error, event, .. } => {
            error!(
                "Error in event {} handler: {}",
                event.snake_case_name(),
                error
            );
        }

        Command { error, ctx, .. } => match error {
            CommandError::User { message } => {
                warn!(
                    "`/{}` rejected: {}",
                    ctx.command().qualified_name,
                    message
                );
                reply_with_error(ctx, &message).await;
            }

            CommandError::InvalidArgument { message } => {
                reply_with_error(ctx, &message).await;
            }

            CommandError::Internal { message } => {
                error!(
                    "Internal error in `/{}`: {}",
                    ctx.command().qualified_name,
                    message
                );
                reply_with_internal_error(ctx, &message).await;
            }

            CommandError::Serenity(error) => {
                error!("Serenity error: {}", error);
                reply_with_internal_error(ctx, &error.to_string()).await;
            }
        },

        ArgumentParse {
            error, input, ctx, ..
        } => {
            let usage = ctx
                .command()
                .help_text
                .as_deref()
                .unwrap_or("Please check `/help` for the expected arguments.");

            let response = match (error.downcast_ref::<CommandError>(), input) {
                (Some(CommandError::InvalidArgument { message }), _) => {
                    format!("**{}**", message)
                }
                (_, Some(input)) => format!(
                    "**Sorry, cannot parse `{}` as an argument: {}**\n{}",
                    input, error, usage
                ),
                (_, None) => format!("**{}**\n{}", error, usage),
            };

            reply_with_error(ctx, &response).await;
        }

        CommandStructureMismatch {
            description, ctx, ..
        } => {
            error!(
                "Failed to deserialize interaction arguments for `/{}`: {}",
                ctx.command.qualified_name, description
            );
        }

        MissingBotPermissions { ctx, .. } => {
            reply_with_error(
                ctx,
                "Sorry, the bot lacks permissions necessary to execute this command.",
            )
            .await;
        }

        MissingUserPermissions { ctx, .. } => {
            reply_with_error(
                ctx,
                "Sorry, only tournament organizers (server administrators) can run this command.",
            )
            .await;
        }

        CommandCheckFailed { error, ctx, .. } => {
            let message = if let Some(error) = error {
                format!(
                    "Sorry, can't run this command due to a failed command check: {}",
                    error
                )
            } else {
                "Sorry, can't run this command due to a failed command check.".to_string()
            };

            reply_with_error(ctx, &message).await;
        }

        UnknownInteraction { interaction, .. } => {
            warn!("Received an unknown interaction: {:?}", interaction.data.name);
        }

        error => {
            if let Err(err) = poise::builtins::on_error(error).await {
                error!("Could not handle a framework error: {}", err);
            }
        }
    }
}

async fn reply_with_error(ctx: Context<'_>, error_message: &str) {
    if let Err(send_error) = ctx
        .send(
            CreateReply::default()
                .content(error_message)
                .ephemeral(true),
        )
        .await
    {
        error!(
            "Failed to send an error message to the organizer: {}\nThe message was: {}",
            send_error, error_message
        );
    }
}

async fn reply_with_internal_error(ctx: Context<'_>, error_message: &str) {
    reply_with_error(
        ctx,
        &format!(
            "Sorry, there was an internal error while executing your command: {}",
            error_message
        ),
    )
    .await;
}
