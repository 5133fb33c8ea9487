use std::str::FromStr;

use lazy_regex::regex_captures;
use time::{Date, Month};

use crate::commands::CommandError;

const EXAMPLES: &str = "`2025-03-14`, `today`, `tomorrow`";

fn invalid_argument(message: String) -> CommandError {
    super::invalid_argument(format!("{message}\nDate examples: {EXAMPLES}."))
}

/// A calendar day, either spelled out or relative to the day the command runs.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum HumanDate {
    Today,
    Tomorrow,
    On(Date),
}

impl HumanDate {
    pub fn materialize(self, today: Date) -> Date {
        match self {
            HumanDate::Today => today,
            HumanDate::Tomorrow => today.next_day().unwrap_or(today),
            HumanDate::On(date) => date,
        }
    }
}

impl FromStr for HumanDate {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if s.eq_ignore_ascii_case("today") {
            return Ok(HumanDate::Today);
        }
        if s.eq_ignore_ascii_case("tomorrow") {
            return Ok(HumanDate::Tomorrow);
        }

        let Some((_, year, month, day)) = regex_captures!(r"^(\d{4})-(\d{1,2})-(\d{1,2})$", s)
        else {
            return Err(invalid_argument(format!("Invalid date: `{}`.", s.escape_default())));
        };

        let year = year
            .parse()
            .map_err(|_| invalid_argument(format!("Invalid year: `{year}`.")))?;
        let month: u8 = month
            .parse()
            .map_err(|_| invalid_argument(format!("Invalid month: `{month}`.")))?;
        let day = day
            .parse()
            .map_err(|_| invalid_argument(format!("Invalid day: `{day}`.")))?;

        let date = Date::from_calendar_date(
            year,
            Month::try_from(month)
                .map_err(|_| invalid_argument(format!("Invalid month: `{month}`.")))?,
            day,
        )
        .map_err(|_| invalid_argument(format!("Invalid date: `{s}`.")))?;

        Ok(HumanDate::On(date))
    }
}
