use std::str::FromStr;

use lazy_regex::regex_captures;

use crate::{commands::CommandError, scoring::ATTEMPTS_PER_MATCH};

const EXAMPLE: &str = "12.34 11.02 DNF 1:03.50 10.90";
const MAX_ATTEMPTS: usize = 5;

fn invalid_argument(message: String) -> CommandError {
    super::invalid_argument(format!(
        "{message}\nAttempts example: `{EXAMPLE}`. `DNF`, `DNS` and `-` mark a missing attempt."
    ))
}

/// Seconds for one attempt token. Anything that isn't a positive time,
/// `DNF` and `DNS` included, is an attempt without a valid time.
fn parse_attempt(token: &str) -> f64 {
    let seconds = if let Some((_, minutes, seconds)) =
        regex_captures!(r"^(\d+):(\d{1,2}(?:\.\d+)?)$", token)
    {
        match (minutes.parse::<f64>(), seconds.parse::<f64>()) {
            (Ok(minutes), Ok(seconds)) => minutes * 60.0 + seconds,
            _ => 0.0,
        }
    } else {
        token.parse::<f64>().unwrap_or(0.0)
    };

    if seconds.is_finite() && seconds > 0.0 {
        seconds
    } else {
        0.0
    }
}

fn tokens(s: &str) -> impl Iterator<Item = &str> {
    s.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
}

/// The attempts of a round, in the order they were solved.
#[derive(Clone, PartialEq, Debug)]
pub struct AttemptTimes(Vec<f64>);

impl From<AttemptTimes> for Vec<f64> {
    fn from(value: AttemptTimes) -> Self {
        value.0
    }
}

impl FromStr for AttemptTimes {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let times: Vec<f64> = tokens(s).map(parse_attempt).collect();

        if times.is_empty() {
            return Err(invalid_argument("No attempts given.".to_string()));
        }
        if times.len() > MAX_ATTEMPTS {
            return Err(invalid_argument(format!(
                "A round has at most {MAX_ATTEMPTS} attempts, got {}.",
                times.len()
            )));
        }

        Ok(AttemptTimes(times))
    }
}

/// A single head-to-head attempt. `0` clears the attempt.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct AttemptTime(f64);

impl From<AttemptTime> for f64 {
    fn from(value: AttemptTime) -> Self {
        value.0
    }
}

impl FromStr for AttemptTime {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = tokens(s);

        match (tokens.next(), tokens.next()) {
            (Some(token), None) => Ok(AttemptTime(parse_attempt(token))),
            (None, _) => Err(invalid_argument("No attempt given.".to_string())),
            (Some(_), Some(_)) => Err(invalid_argument(format!(
                "Only one time per attempt, a match has {ATTEMPTS_PER_MATCH} attempts per side."
            ))),
        }
    }
}
