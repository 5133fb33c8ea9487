use time::macros::format_description;
use time::{format_description::FormatItem, Date, Time};

const DATE_FORMAT: &[FormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// Attempt time with two decimals, or `-` for an attempt that was not recorded.
pub fn format_time(time: f64) -> String {
    if time > 0.0 {
        format!("{time:.2}")
    } else {
        "-".to_string()
    }
}

/// Round average with two decimals, or `DNF` when the round has no average.
pub fn format_average(average: f64) -> String {
    if average > 0.0 {
        format!("{average:.2}")
    } else {
        "DNF".to_string()
    }
}

pub fn format_times(times: &[f64]) -> String {
    times
        .iter()
        .map(|t| format_time(*t))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn format_date(date: Date) -> String {
    date.format(DATE_FORMAT)
        .expect("Hard-coded format should be correct")
}

/// Discord long-date timestamp, e.g. `20 April 2021` rendered in the reader's locale.
pub fn format_local_date(date: Date) -> String {
    let unix_timestamp = date.with_time(Time::MIDNIGHT).assume_utc().unix_timestamp();
    format!("<t:{unix_timestamp}:D>")
}
