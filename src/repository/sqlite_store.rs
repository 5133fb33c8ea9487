use async_trait::async_trait;
use sqlx::{query, query_scalar, Pool, Sqlite};
use tracing::{debug, error};

use crate::models::Tournament;

use super::TournamentStore;

/// Key of the tournament document in the `storage` table.
pub const STORAGE_KEY: &str = "tournaments";

/// Key-value table holding the whole tournament document as one JSON string.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: Pool<Sqlite>,
}

impl SqliteStore {
    pub fn new(pool: Pool<Sqlite>) -> SqliteStore {
        SqliteStore { pool }
    }
}

#[async_trait]
impl TournamentStore for SqliteStore {
    #[tracing::instrument(skip(self))]
    async fn load(&self) -> Result<Vec<Tournament>, anyhow::Error> {
        let document: Option<String> = query_scalar(r#"SELECT value FROM storage WHERE key = $1"#)
            .bind(STORAGE_KEY)
            .fetch_optional(&self.pool)
            .await?;

        let Some(document) = document else {
            debug!("No tournament document stored yet");
            return Ok(Vec::new());
        };

        serde_json::from_str(&document).map_err(|err| {
            error!("Stored tournament document is malformed: {err}");
            err.into()
        })
    }

    #[tracing::instrument(skip(self, tournaments), fields(tournaments = tournaments.len()))]
    async fn save(&self, tournaments: &[Tournament]) -> Result<(), anyhow::Error> {
        let document = serde_json::to_string(tournaments)?;

        let mut transaction = self.pool.begin().await?;

        query(
            r#"
                INSERT INTO storage (key, value)
                VALUES ($1, $2)
                ON CONFLICT (key) DO UPDATE SET value = excluded.value
            "#,
        )
        .bind(STORAGE_KEY)
        .bind(&document)
        .execute(&mut *transaction)
        .await?;

        transaction.commit().await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use sqlx::sqlite::SqlitePoolOptions;
    use time::macros::date;

    use super::*;
    use crate::models::{
        Category, CategoryFormat, CategoryId, Competitor, CompetitorId, NewTournament,
        RoundFormat, TournamentId,
    };

    async fn store() -> SqliteStore {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::migrate!("./migrations").run(&pool).await.unwrap();

        SqliteStore::new(pool)
    }

    fn tournament() -> Tournament {
        let mut tournament = Tournament::create(
            TournamentId::from("SpringOpen"),
            NewTournament {
                name: "Spring Open".to_owned(),
                ..Default::default()
            },
            date!(2025 - 03 - 14),
        );

        let mut category = Category::new(
            CategoryId::from("3x3"),
            "3x3".to_owned(),
            CategoryFormat::Wca,
            RoundFormat::Ao5,
        );
        category.rounds[0].upsert_result(
            CompetitorId::from("1"),
            vec![12.0, 11.0, 13.0, 10.0, 14.0],
        );
        tournament.categories.push(category);

        let mut competitor = Competitor::new(CompetitorId::from("1"), "Ana".to_owned());
        competitor.enter(CategoryId::from("3x3"));
        tournament.competitors.push(competitor);

        tournament
    }

    #[test_log::test(tokio::test)]
    async fn nothing_stored() {
        let store = store().await;
        assert!(store.load().await.unwrap().is_empty());
    }

    #[test_log::test(tokio::test)]
    async fn document_round_trip() {
        let store = store().await;

        store.save(&[tournament()]).await.unwrap();
        assert_eq!(store.load().await.unwrap(), vec![tournament()]);

        store.save(&[]).await.unwrap();
        assert!(store.load().await.unwrap().is_empty());
    }

    #[test_log::test(tokio::test)]
    async fn malformed_document_is_an_error() {
        let store = store().await;

        query("INSERT INTO storage (key, value) VALUES ($1, $2)")
            .bind(STORAGE_KEY)
            .bind("{not json")
            .execute(&store.pool)
            .await
            .unwrap();

        assert!(store.load().await.is_err());
    }
}
