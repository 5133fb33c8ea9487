use std::fmt::Display;

use serde::{Deserialize, Serialize};
use strum::EnumString;

use super::{Round, RoundFormat};

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(transparent)]
pub struct CategoryId(pub String);

impl Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CategoryId {
    fn from(value: &str) -> Self {
        CategoryId(value.to_owned())
    }
}

/// Scoring format of a category. Persisted lowercase, displayed capitalized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize, strum::Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum CategoryFormat {
    #[serde(rename = "wca", alias = "WCA")]
    #[strum(to_string = "WCA")]
    Wca,
    #[serde(rename = "redbull", alias = "RedBull")]
    #[strum(to_string = "RedBull", serialize = "red-bull")]
    RedBull,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub format: CategoryFormat,
    #[serde(default)]
    pub rounds: Vec<Round>,
}

impl Category {
    /// WCA categories open with round 1 right away, head-to-head ones start empty.
    pub fn new(
        id: CategoryId,
        name: String,
        format: CategoryFormat,
        first_round_format: RoundFormat,
    ) -> Category {
        let rounds = match format {
            CategoryFormat::Wca => vec![Round::new(1, first_round_format)],
            CategoryFormat::RedBull => Vec::new(),
        };

        Category {
            id,
            name,
            format,
            rounds,
        }
    }

    pub fn round(&self, number: u32) -> Option<&Round> {
        self.rounds.iter().find(|r| r.number == number)
    }

    pub fn round_mut(&mut self, number: u32) -> Option<&mut Round> {
        self.rounds.iter_mut().find(|r| r.number == number)
    }

    /// `None` once the last round already holds the highest possible number.
    pub fn next_round_number(&self) -> Option<u32> {
        match self.rounds.last() {
            Some(last) => last.number.checked_add(1),
            None => Some(1),
        }
    }

    pub fn add_round(&mut self, format: RoundFormat) -> Option<&Round> {
        let number = self.next_round_number()?;
        self.rounds.push(Round::new(number, format));
        self.rounds.last()
    }

    pub fn remove_round(&mut self, number: u32) -> Option<Round> {
        let index = self.rounds.iter().position(|r| r.number == number)?;
        Some(self.rounds.remove(index))
    }

    /// Switching to WCA makes sure there is at least one round to record into.
    /// Head-to-head categories keep no rounds, so switching to Red Bull drops them.
    pub fn set_format(&mut self, format: CategoryFormat) {
        self.format = format;

        match format {
            CategoryFormat::Wca if self.rounds.is_empty() => {
                self.rounds.push(Round::new(1, RoundFormat::default()));
            }
            CategoryFormat::Wca => {}
            CategoryFormat::RedBull => self.rounds.clear(),
        }
    }
}
