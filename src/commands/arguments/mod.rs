use super::CommandError;

mod attempt_times;
mod choices;
mod human_date;
mod trimmed_string;

pub use attempt_times::{AttemptTime, AttemptTimes};
pub use choices::{CategoryFormatChoice, RoundFormatChoice, SideChoice, StatusChoice};
pub use human_date::HumanDate;
pub use trimmed_string::TrimmedString;

pub fn invalid_argument(message: String) -> CommandError {
    CommandError::InvalidArgument { message }
}
