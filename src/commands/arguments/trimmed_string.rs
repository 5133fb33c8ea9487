use std::{fmt::Display, str::FromStr};

use crate::commands::CommandError;

/// A non-empty string without leading or trailing whitespace.
pub struct TrimmedString(String);

impl FromStr for TrimmedString {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if s.is_empty() {
            Err(super::invalid_argument(
                "The value can't be blank.".to_string(),
            ))
        } else {
            Ok(TrimmedString(s.to_owned()))
        }
    }
}

impl From<TrimmedString> for String {
    fn from(value: TrimmedString) -> Self {
        value.0
    }
}

impl Display for TrimmedString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TrimmedString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
