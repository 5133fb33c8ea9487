use std::fmt::Display;

use serde::{Deserialize, Serialize};
use strum::EnumString;
use time::Date;

use super::{Category, CategoryId, Competitor, CompetitorId};

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

pub const DEFAULT_DESCRIPTION: &str = "Rubik's cube tournament";
pub const DEFAULT_LOCATION: &str = "Tlaxcala, México";

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(transparent)]
pub struct TournamentId(pub String);

impl Display for TournamentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TournamentId {
    fn from(value: &str) -> Self {
        TournamentId(value.to_owned())
    }
}

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize, strum::Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum TournamentStatus {
    #[serde(alias = "activo")]
    Active,
    #[serde(alias = "finalizado")]
    Finalized,
    #[default]
    #[serde(alias = "proximamente", alias = "Proximamente")]
    Upcoming,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub status: TournamentStatus,
    #[serde(with = "iso_date")]
    pub date: Date,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub competitors: Vec<Competitor>,
}

/// Input of the tournament creation flow. Missing fields get the defaults
/// the organizers are used to.
#[derive(Debug, Default)]
pub struct NewTournament {
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub status: Option<TournamentStatus>,
    pub date: Option<Date>,
}

/// Partial edit of the tournament header. `None` leaves a field unchanged.
#[derive(Debug, Default)]
pub struct TournamentChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub status: Option<TournamentStatus>,
    pub date: Option<Date>,
}

impl TournamentChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.location.is_none()
            && self.status.is_none()
            && self.date.is_none()
    }
}

impl Tournament {
    pub fn create(id: TournamentId, new_tournament: NewTournament, today: Date) -> Tournament {
        Tournament {
            id,
            name: new_tournament.name,
            description: new_tournament
                .description
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_owned()),
            location: new_tournament
                .location
                .unwrap_or_else(|| DEFAULT_LOCATION.to_owned()),
            status: new_tournament.status.unwrap_or_default(),
            date: new_tournament.date.unwrap_or(today),
            categories: Vec::new(),
            competitors: Vec::new(),
        }
    }

    pub fn apply(&mut self, changes: TournamentChanges) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(description) = changes.description {
            self.description = description;
        }
        if let Some(location) = changes.location {
            self.location = location;
        }
        if let Some(status) = changes.status {
            self.status = status;
        }
        if let Some(date) = changes.date {
            self.date = date;
        }
    }

    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == id)
    }

    pub fn category_mut(&mut self, id: &CategoryId) -> Option<&mut Category> {
        self.categories.iter_mut().find(|c| &c.id == id)
    }

    pub fn competitor(&self, id: &CompetitorId) -> Option<&Competitor> {
        self.competitors.iter().find(|c| &c.id == id)
    }

    pub fn competitor_mut(&mut self, id: &CompetitorId) -> Option<&mut Competitor> {
        self.competitors.iter_mut().find(|c| &c.id == id)
    }

    pub fn competitor_name(&self, id: &CompetitorId) -> Option<&str> {
        self.competitor(id).map(|c| c.name.as_str())
    }

    pub fn competitors_in<'a>(
        &'a self,
        category: &'a CategoryId,
    ) -> impl Iterator<Item = &'a Competitor> + 'a {
        self.competitors.iter().filter(move |c| c.is_entered(category))
    }

    /// Drops the category together with every competitor's membership in it.
    pub fn remove_category(&mut self, id: &CategoryId) -> Option<Category> {
        let index = self.categories.iter().position(|c| &c.id == id)?;

        for competitor in &mut self.competitors {
            competitor.leave(id);
        }

        Some(self.categories.remove(index))
    }

    /// Drops the competitor and all of their results.
    pub fn remove_competitor(&mut self, id: &CompetitorId) -> Option<Competitor> {
        let index = self.competitors.iter().position(|c| &c.id == id)?;

        for round in self.categories.iter_mut().flat_map(|c| c.rounds.iter_mut()) {
            round.results.retain(|r| &r.competitor_id != id);
        }

        Some(self.competitors.remove(index))
    }

    /// Recomputes every stored result, so documents written before the
    /// current scoring rules read the same as freshly recorded ones.
    pub fn recompute_results(&mut self) {
        for round in self.categories.iter_mut().flat_map(|c| c.rounds.iter_mut()) {
            round.recompute_results();
        }
    }

    /// Next free sequential competitor id.
    pub fn next_competitor_id(&self) -> CompetitorId {
        let last = self
            .competitors
            .iter()
            .filter_map(|c| c.id.0.parse::<u64>().ok())
            .max()
            .unwrap_or(0);

        CompetitorId((last + 1).to_string())
    }
}
