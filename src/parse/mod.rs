//! Schedule text parsing.
//!
//! Converts human-readable time/day descriptions into normalized interval
//! records. Two textual forms exist:
//!
//! - **Schedule strings** (`"MW 10:00 AM - 11:30 AM"`): a day-token run
//!   followed by a 12-hour time range. Parsed by [`parse_time_slot`], which
//!   returns `None` for anything malformed — an unparseable schedule is not
//!   an error, it just makes the section permanently unselectable.
//! - **Clock strings** (`"08:00"`): unambiguous 24-hour `HH:MM`, used for
//!   constraint bounds. Parsed by [`ClockTime`]'s `FromStr`, where malformed
//!   input is a hard error surfaced at the configuration boundary.

mod day;
mod time;

pub use day::{Day, DaySet};
pub use time::{parse_time_slot, ClockTime, ParseClockError, TimeSlot};
