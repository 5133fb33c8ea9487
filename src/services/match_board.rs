use tokio::sync::Mutex;
use tracing::info;

use crate::{
    models::{CategoryId, TournamentId},
    scoring::{Match, MatchError, MatchId, MatchSlot, Side},
};

struct BoardState {
    next_id: u32,
    matches: Vec<Match>,
}

/// Head-to-head matches of the current session. They are not persisted.
pub struct MatchBoard {
    state: Mutex<BoardState>,
}

impl Default for MatchBoard {
    fn default() -> Self {
        MatchBoard {
            state: Mutex::new(BoardState {
                next_id: 1,
                matches: Vec::new(),
            }),
        }
    }
}

impl MatchBoard {
    #[tracing::instrument(skip(self))]
    pub async fn open_match(
        &self,
        tournament_id: TournamentId,
        category_id: CategoryId,
        round: u32,
        first: MatchSlot,
        second: MatchSlot,
    ) -> Result<Match, MatchError> {
        let mut state = self.state.lock().await;

        let id = MatchId(state.next_id);
        let duel = Match::new(id, tournament_id, category_id, round, first, second)?;

        state.next_id += 1;
        state.matches.push(duel.clone());

        info!(
            "Opened match {id}: {} vs {}",
            duel.first.name, duel.second.name
        );

        Ok(duel)
    }

    #[tracing::instrument(skip(self))]
    pub async fn record_attempt(
        &self,
        id: MatchId,
        side: Side,
        attempt_index: usize,
        time: f64,
    ) -> Result<Match, MatchError> {
        let mut state = self.state.lock().await;

        let duel = state
            .matches
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(MatchError::NotFound(id))?;

        let had_winner = duel.winner.is_some();
        duel.record_attempt(side, attempt_index, time)?;

        if let (false, Some(winner)) = (had_winner, duel.winner_slot()) {
            info!("Match {id} won by {}", winner.name);
        }

        Ok(duel.clone())
    }

    pub async fn get(&self, id: MatchId) -> Result<Match, MatchError> {
        let state = self.state.lock().await;

        state
            .matches
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .ok_or(MatchError::NotFound(id))
    }

    /// Takes a match off the board. Its number is never handed out again.
    #[tracing::instrument(skip(self))]
    pub async fn remove(&self, id: MatchId) -> Result<Match, MatchError> {
        let mut state = self.state.lock().await;

        let index = state
            .matches
            .iter()
            .position(|m| m.id == id)
            .ok_or(MatchError::NotFound(id))?;
        let duel = state.matches.remove(index);

        info!(
            "Removed match {id}: {} vs {}",
            duel.first.name, duel.second.name
        );

        Ok(duel)
    }

    /// Matches in opening order, optionally narrowed to a tournament or a category.
    pub async fn list(
        &self,
        tournament_id: Option<&TournamentId>,
        category_id: Option<&CategoryId>,
    ) -> Vec<Match> {
        let state = self.state.lock().await;

        state
            .matches
            .iter()
            .filter(|m| tournament_id.map_or(true, |id| &m.tournament_id == id))
            .filter(|m| category_id.map_or(true, |id| &m.category_id == id))
            .cloned()
            .collect()
    }
}
