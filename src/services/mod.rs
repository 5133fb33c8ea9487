mod match_board;
mod tournament_service;

use thiserror::Error;

use crate::{
    models::{CategoryFormat, CategoryId, CompetitorId, TournamentId},
    scoring::MatchError,
};

pub use match_board::MatchBoard;
pub use tournament_service::{StandingRow, Standings, TournamentService};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Tournament `{0}` does not exist")]
    TournamentNotFound(TournamentId),
    #[error("Category `{0}` does not exist in this tournament")]
    CategoryNotFound(CategoryId),
    #[error("Round {0} does not exist in this category")]
    RoundNotFound(u32),
    #[error("Competitor `{0}` does not exist in this tournament")]
    CompetitorNotFound(CompetitorId),
    #[error("{competitor} is not entered in `{category}`")]
    NotEntered {
        competitor: String,
        category: CategoryId,
    },
    #[error("Category `{category}` uses the {format} format")]
    WrongCategoryFormat {
        category: CategoryId,
        format: CategoryFormat,
    },
    #[error("Round {0} is the last round number available")]
    RoundNumbersExhausted(u32),
    #[error("Names can't be empty")]
    EmptyName,
    #[error(transparent)]
    Match(#[from] MatchError),
    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

impl ServiceError {
    /// Errors caused by what the organizer asked for, as opposed to broken storage.
    pub fn is_user_error(&self) -> bool {
        !matches!(self, ServiceError::Storage(_))
    }
}
