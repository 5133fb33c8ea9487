use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::models::Tournament;

use super::TournamentStore;

/// Keeps the serialized document in memory, the same way it would sit in a
/// key-value store.
#[derive(Default)]
pub struct MemoryStore {
    document: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn with_document(document: impl Into<String>) -> MemoryStore {
        MemoryStore {
            document: Mutex::new(Some(document.into())),
        }
    }
}

#[async_trait]
impl TournamentStore for MemoryStore {
    async fn load(&self) -> Result<Vec<Tournament>, anyhow::Error> {
        match self.document.lock().await.as_deref() {
            Some(document) => Ok(serde_json::from_str(document)?),
            None => Ok(Vec::new()),
        }
    }

    async fn save(&self, tournaments: &[Tournament]) -> Result<(), anyhow::Error> {
        let document = serde_json::to_string(tournaments)?;
        *self.document.lock().await = Some(document);
        Ok(())
    }
}
