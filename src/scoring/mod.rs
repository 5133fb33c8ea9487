//! Result aggregation: per-round statistics, ranking and head-to-head duels.
//!
//! Everything in here is pure and operates on data that has already been
//! loaded, so none of it can fail.

mod average;
mod head_to_head;
mod ranking;

pub use average::upsert_result;
pub use head_to_head::{Match, MatchError, MatchId, MatchSlot, Side, ATTEMPTS_PER_MATCH, WINS_NEEDED};
pub use ranking::rank_round;
