use async_trait::async_trait;
use tracing::debug;

use crate::models::{Tournament, TournamentId};

use super::{TournamentRepository, TournamentStore};

/// Tournament lookups on top of a whole-document store. Every save rewrites
/// the full document.
pub struct DocumentRepository<S> {
    store: S,
}

impl<S: TournamentStore> DocumentRepository<S> {
    pub fn new(store: S) -> DocumentRepository<S> {
        DocumentRepository { store }
    }

    /// The stored document with every result recomputed. Legacy documents
    /// carry no `best` and attempt lists of any length.
    async fn load(&self) -> Result<Vec<Tournament>, anyhow::Error> {
        let mut tournaments = self.store.load().await?;

        for tournament in &mut tournaments {
            tournament.recompute_results();
        }

        Ok(tournaments)
    }
}

#[async_trait]
impl<S: TournamentStore> TournamentRepository for DocumentRepository<S> {
    async fn list_tournaments(&self) -> Result<Vec<Tournament>, anyhow::Error> {
        self.load().await
    }

    async fn get_tournament(&self, id: &TournamentId) -> Result<Option<Tournament>, anyhow::Error> {
        let tournaments = self.load().await?;
        Ok(tournaments.into_iter().find(|t| &t.id == id))
    }

    async fn save_tournament(&self, tournament: &Tournament) -> Result<(), anyhow::Error> {
        let mut tournaments = self.load().await?;

        match tournaments.iter_mut().find(|t| t.id == tournament.id) {
            Some(stored) => *stored = tournament.clone(),
            None => {
                debug!("Adding tournament {} to the document", tournament.id);
                tournaments.push(tournament.clone());
            }
        }

        self.store.save(&tournaments).await
    }
}
