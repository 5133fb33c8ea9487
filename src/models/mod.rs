mod category;
mod competitor;
mod round;
mod tournament;

pub mod types;

pub use category::{Category, CategoryFormat, CategoryId};
pub use competitor::{Competitor, CompetitorId};
pub use round::{Round, RoundFormat, RoundResult};
pub use tournament::{NewTournament, Tournament, TournamentChanges, TournamentId, TournamentStatus};
