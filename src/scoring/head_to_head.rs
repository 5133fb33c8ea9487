//! Red Bull style duels: two competitors, three attempts, first to two wins.

use std::fmt::Display;

use thiserror::Error;

use crate::models::{CategoryId, CompetitorId, TournamentId};

pub const ATTEMPTS_PER_MATCH: usize = 3;
pub const WINS_NEEDED: u8 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MatchId(pub u32);

impl Display for MatchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    First,
    Second,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatchError {
    #[error("Match {0} does not exist")]
    NotFound(MatchId),
    #[error("There is no attempt #{} in a match", .0 + 1)]
    AttemptOutOfRange(usize),
    #[error("A competitor can't face themselves")]
    SameCompetitor,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MatchSlot {
    pub competitor_id: CompetitorId,
    pub name: String,
    /// `0` marks an attempt that has not been recorded yet.
    pub times: [f64; ATTEMPTS_PER_MATCH],
    pub wins: u8,
}

impl MatchSlot {
    pub fn new(competitor_id: CompetitorId, name: String) -> MatchSlot {
        MatchSlot {
            competitor_id,
            name,
            times: [0.0; ATTEMPTS_PER_MATCH],
            wins: 0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Match {
    pub id: MatchId,
    pub tournament_id: TournamentId,
    pub category_id: CategoryId,
    pub round: u32,
    pub first: MatchSlot,
    pub second: MatchSlot,
    pub winner: Option<Side>,
}

impl Match {
    pub fn new(
        id: MatchId,
        tournament_id: TournamentId,
        category_id: CategoryId,
        round: u32,
        first: MatchSlot,
        second: MatchSlot,
    ) -> Result<Match, MatchError> {
        if first.competitor_id == second.competitor_id {
            return Err(MatchError::SameCompetitor);
        }

        Ok(Match {
            id,
            tournament_id,
            category_id,
            round,
            first,
            second,
            winner: None,
        })
    }

    pub fn slot(&self, side: Side) -> &MatchSlot {
        match side {
            Side::First => &self.first,
            Side::Second => &self.second,
        }
    }

    fn slot_mut(&mut self, side: Side) -> &mut MatchSlot {
        match side {
            Side::First => &mut self.first,
            Side::Second => &mut self.second,
        }
    }

    pub fn winner_slot(&self) -> Option<&MatchSlot> {
        self.winner.map(|side| self.slot(side))
    }

    /// Stores a time for one side and re-derives wins and winner from scratch,
    /// so editing attempts in any order gives the same outcome.
    pub fn record_attempt(
        &mut self,
        side: Side,
        attempt_index: usize,
        time: f64,
    ) -> Result<(), MatchError> {
        if attempt_index >= ATTEMPTS_PER_MATCH {
            return Err(MatchError::AttemptOutOfRange(attempt_index));
        }

        let time = if time.is_finite() && time > 0.0 { time } else { 0.0 };
        self.slot_mut(side).times[attempt_index] = time;

        self.recount();
        Ok(())
    }

    fn recount(&mut self) {
        let mut first_wins = 0;
        let mut second_wins = 0;

        for (first, second) in self.first.times.iter().zip(self.second.times.iter()) {
            if *first <= 0.0 || *second <= 0.0 {
                continue;
            }

            if first < second {
                first_wins += 1;
            } else if second < first {
                second_wins += 1;
            }
        }

        self.first.wins = first_wins;
        self.second.wins = second_wins;

        self.winner = if first_wins >= WINS_NEEDED {
            Some(Side::First)
        } else if second_wins >= WINS_NEEDED {
            Some(Side::Second)
        } else {
            None
        };
    }
}
