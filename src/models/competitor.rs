use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::CategoryId;

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(transparent)]
pub struct CompetitorId(pub String);

impl Display for CompetitorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CompetitorId {
    fn from(value: &str) -> Self {
        CompetitorId(value.to_owned())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Competitor {
    pub id: CompetitorId,
    pub name: String,
    #[serde(default)]
    pub categories: Vec<CategoryId>,
}

impl Competitor {
    pub fn new(id: CompetitorId, name: String) -> Competitor {
        Competitor {
            id,
            name,
            categories: Vec::new(),
        }
    }

    pub fn is_entered(&self, category: &CategoryId) -> bool {
        self.categories.contains(category)
    }

    /// Returns `false` if the competitor was already entered.
    pub fn enter(&mut self, category: CategoryId) -> bool {
        if self.is_entered(&category) {
            return false;
        }

        self.categories.push(category);
        true
    }

    /// Returns `false` if the competitor was not entered.
    pub fn leave(&mut self, category: &CategoryId) -> bool {
        let before = self.categories.len();
        self.categories.retain(|c| c != category);
        self.categories.len() != before
    }
}
