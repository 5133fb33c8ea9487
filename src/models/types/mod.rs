mod persisted;

pub use persisted::{fixed_two_decimals, lenient_float, lenient_times};
