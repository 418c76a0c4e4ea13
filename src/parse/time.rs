//! Clock times and schedule-string parsing.

use super::day::{scan_day_run, DaySet};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

static TIME_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d{1,2}):(\d{2})\s*([AP]M)\s*-\s*(\d{1,2}):(\d{2})\s*([AP]M)")
        .expect("valid time-range pattern")
});

/// Error produced when a 24-hour `HH:MM` clock string is malformed.
///
/// Clock strings come from configuration, so this is a caller contract
/// violation surfaced at the config boundary — never inside the search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid clock time `{0}`: expected 24-hour HH:MM")]
pub struct ParseClockError(pub String);

/// A time of day as minutes from midnight, in `0..1440`.
///
/// Used for the unambiguous 24-hour `HH:MM` form of constraint bounds.
///
/// # Examples
///
/// ```
/// use timetabler::parse::ClockTime;
///
/// let t: ClockTime = "13:30".parse().unwrap();
/// assert_eq!(t.minutes(), 13 * 60 + 30);
/// assert!("24:00".parse::<ClockTime>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(u16);

impl ClockTime {
    /// Noon, the fixed threshold for "late" sections.
    pub const NOON: ClockTime = ClockTime(12 * 60);

    /// Minutes from midnight.
    pub fn minutes(self) -> u16 {
        self.0
    }
}

impl FromStr for ClockTime {
    type Err = ParseClockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseClockError(s.to_string());
        let (h, m) = s.split_once(':').ok_or_else(err)?;
        let hours: u16 = h.trim().parse().map_err(|_| err())?;
        let minutes: u16 = m.trim().parse().map_err(|_| err())?;
        if hours > 23 || minutes > 59 {
            return Err(err());
        }
        Ok(ClockTime(hours * 60 + minutes))
    }
}

impl TryFrom<String> for ClockTime {
    type Error = ParseClockError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ClockTime> for String {
    fn from(t: ClockTime) -> String {
        t.to_string()
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

/// A normalized meeting interval: a day set plus a half-open minute range.
///
/// `start_minute < end_minute` always holds for any slot produced by
/// [`parse_time_slot`]. Immutable once produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TimeSlot {
    /// Days on which the meeting occurs.
    pub days: DaySet,
    /// Start, as minutes from midnight.
    pub start_minute: u16,
    /// End, as minutes from midnight. Exclusive: a slot ending at the
    /// minute another starts does not overlap it.
    pub end_minute: u16,
}

/// Parses a schedule string like `"MW 10:00 AM - 11:30 AM"`.
///
/// The grammar is a day-token run, whitespace, then a 12-hour time range
/// `H{1,2}:MM [AM|PM] - H{1,2}:MM [AM|PM]` (case-insensitive). Returns
/// `None` — never panics — for empty input, fewer than two whitespace
/// fields, an invalid day run, a missing time range, or a zero-length or
/// inverted range.
///
/// # Examples
///
/// ```
/// use timetabler::parse::parse_time_slot;
///
/// let slot = parse_time_slot("MW 10:00 AM - 11:30 AM").unwrap();
/// assert_eq!(slot.start_minute, 600);
/// assert_eq!(slot.end_minute, 690);
///
/// assert!(parse_time_slot("Invalid String").is_none());
/// ```
pub fn parse_time_slot(text: &str) -> Option<TimeSlot> {
    let mut fields = text.split_whitespace();
    let day_field = fields.next()?;
    let time_part: Vec<&str> = fields.collect();
    if time_part.is_empty() {
        return None;
    }

    let days = scan_day_run(day_field)?;

    let time_part = time_part.join(" ");
    let caps = TIME_RANGE.captures(&time_part)?;
    let start_minute = twelve_hour_to_minutes(&caps[1], &caps[2], &caps[3])?;
    let end_minute = twelve_hour_to_minutes(&caps[4], &caps[5], &caps[6])?;

    if start_minute >= end_minute {
        return None;
    }

    Some(TimeSlot {
        days,
        start_minute,
        end_minute,
    })
}

/// 12-hour clock conversion: `12:MM AM` maps to hour 0, `12:MM PM` keeps
/// hour 12, and any other PM hour gains 12 hours.
fn twelve_hour_to_minutes(hour: &str, minute: &str, meridiem: &str) -> Option<u16> {
    let mut hours: u16 = hour.parse().ok()?;
    let minutes: u16 = minute.parse().ok()?;
    let pm = meridiem.eq_ignore_ascii_case("PM");
    if pm && hours != 12 {
        hours += 12;
    } else if !pm && hours == 12 {
        hours = 0;
    }
    Some(hours * 60 + minutes)
}
