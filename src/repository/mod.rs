mod document_repository;
#[cfg(test)]
mod memory_store;
mod sqlite_store;

use async_trait::async_trait;

use crate::models::{Tournament, TournamentId};

pub use document_repository::DocumentRepository;
#[cfg(test)]
pub use memory_store::MemoryStore;
pub use sqlite_store::SqliteStore;

/// The raw persisted document: every tournament, read and written as a whole.
#[async_trait]
pub trait TournamentStore: Send + Sync {
    async fn load(&self) -> Result<Vec<Tournament>, anyhow::Error>;

    async fn save(&self, tournaments: &[Tournament]) -> Result<(), anyhow::Error>;
}

#[async_trait]
pub trait TournamentRepository: Send + Sync {
    async fn list_tournaments(&self) -> Result<Vec<Tournament>, anyhow::Error>;

    async fn get_tournament(&self, id: &TournamentId) -> Result<Option<Tournament>, anyhow::Error>;

    /// Inserts the tournament or replaces the stored one with the same id.
    async fn save_tournament(&self, tournament: &Tournament) -> Result<(), anyhow::Error>;
}
