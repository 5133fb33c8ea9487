use serde::{Deserialize, Serialize};
use strum::EnumString;

use super::{
    types::{fixed_two_decimals, lenient_float, lenient_times},
    CompetitorId,
};
use crate::scoring;

/// Attempt-count format of a WCA round.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize, strum::Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum RoundFormat {
    Ao3,
    #[default]
    Ao5,
}

impl RoundFormat {
    pub fn attempt_count(&self) -> usize {
        match self {
            RoundFormat::Ao3 => 3,
            RoundFormat::Ao5 => 5,
        }
    }

    /// Valid attempts needed before the round average is defined.
    pub fn minimum_valid(&self) -> usize {
        self.attempt_count()
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Round {
    #[serde(rename = "num")]
    pub number: u32,
    #[serde(default)]
    pub format: RoundFormat,
    #[serde(default)]
    pub results: Vec<RoundResult>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct RoundResult {
    #[serde(rename = "idCompetitor")]
    pub competitor_id: CompetitorId,
    #[serde(default, with = "lenient_times")]
    pub times: Vec<f64>,
    #[serde(default, deserialize_with = "lenient_float::deserialize")]
    pub best: f64,
    #[serde(rename = "media", default, with = "fixed_two_decimals")]
    pub average: f64,
}

impl Round {
    pub fn new(number: u32, format: RoundFormat) -> Round {
        Round {
            number,
            format,
            results: Vec::new(),
        }
    }

    pub fn upsert_result(&mut self, competitor_id: CompetitorId, times: Vec<f64>) -> &RoundResult {
        scoring::upsert_result(self, competitor_id, times)
    }

    /// Changes the attempt count and brings every stored result in line with it.
    pub fn set_format(&mut self, format: RoundFormat) {
        self.format = format;
        self.recompute_results();
    }

    /// Re-derives every result from its times: the attempt list is fitted to
    /// the format, then best and average are computed again.
    pub fn recompute_results(&mut self) {
        let results = std::mem::take(&mut self.results);
        for result in results {
            scoring::upsert_result(self, result.competitor_id, result.times);
        }
    }
}
