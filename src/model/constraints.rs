//! Per-run search constraints.

use crate::parse::ClockTime;
use serde::{Deserialize, Serialize};

/// Scalar constraints for one search invocation.
///
/// Supplied once per run and immutable for its duration. Time bounds use
/// the 24-hour [`ClockTime`] form; malformed clock strings fail at the
/// deserialization boundary, never inside the search.
///
/// # Examples
///
/// ```
/// use timetabler::model::Constraints;
///
/// let constraints = Constraints::default()
///     .with_allow_full(true)
///     .with_max_schedules(10);
/// assert_eq!(constraints.earliest_start.minutes(), 8 * 60);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Constraints {
    /// Earliest allowed section start.
    pub earliest_start: ClockTime,
    /// Latest allowed section end.
    pub latest_end: ClockTime,
    /// Whether full sections may be selected at all.
    pub allow_full: bool,
    /// Whether low-enrollment (at-risk) sections may be selected.
    pub allow_at_risk: bool,
    /// Maximum number of timetables to return. Zero returns nothing.
    pub max_schedules: usize,
    /// Maximum number of full sections allowed in one timetable.
    pub max_full_per_schedule: usize,
}

impl Default for Constraints {
    fn default() -> Self {
        Constraints {
            earliest_start: "08:00".parse().expect("valid default clock time"),
            latest_end: "18:00".parse().expect("valid default clock time"),
            allow_full: false,
            allow_at_risk: true,
            max_schedules: 50,
            max_full_per_schedule: 0,
        }
    }
}

impl Constraints {
    pub fn with_earliest_start(mut self, t: ClockTime) -> Self {
        self.earliest_start = t;
        self
    }

    pub fn with_latest_end(mut self, t: ClockTime) -> Self {
        self.latest_end = t;
        self
    }

    pub fn with_allow_full(mut self, allow: bool) -> Self {
        self.allow_full = allow;
        self
    }

    pub fn with_allow_at_risk(mut self, allow: bool) -> Self {
        self.allow_at_risk = allow;
        self
    }

    pub fn with_max_schedules(mut self, max: usize) -> Self {
        self.max_schedules = max;
        self
    }

    pub fn with_max_full_per_schedule(mut self, max: usize) -> Self {
        self.max_full_per_schedule = max;
        self
    }
}
