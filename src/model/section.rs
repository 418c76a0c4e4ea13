//! Candidate section offerings and enrollment classification.

use crate::parse::{parse_time_slot, TimeSlot};
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static ENROLLMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)/(\d+)").expect("valid enrollment pattern"));

/// One concrete offering candidate for a course.
///
/// Sections are immutable values: the search engine only clones them into
/// candidate combinations, never mutates one. The meeting slot is computed
/// from `schedule` once, at construction; a section whose schedule text
/// does not parse carries `slot == None` and can never be selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Section group identifier.
    pub group: u32,
    /// Raw schedule text, e.g. `"MW 10:00 AM - 11:30 AM"`.
    pub schedule: String,
    /// Raw enrollment text, e.g. `"25/30"`.
    pub enrolled: String,
    /// Free-form status label from the dataset.
    pub status: String,
    /// Parsed meeting slot, or `None` when `schedule` is unparseable.
    pub slot: Option<TimeSlot>,
}

impl Section {
    /// Creates a section, parsing its schedule text eagerly.
    pub fn new(
        group: u32,
        schedule: impl Into<String>,
        enrolled: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        let schedule = schedule.into();
        let slot = parse_time_slot(&schedule);
        Section {
            group,
            schedule,
            enrolled: enrolled.into(),
            status: status.into(),
            slot,
        }
    }

    /// Extracts `current/total` from the enrollment text.
    fn enrollment_counts(&self) -> Option<(u32, u32)> {
        let caps = ENROLLMENT.captures(&self.enrolled)?;
        let current = caps[1].parse().ok()?;
        let total = caps[2].parse().ok()?;
        Some((current, total))
    }

    /// Whether the section is at or over capacity.
    ///
    /// `false` when the enrollment text carries no `current/total` pattern.
    pub fn is_full(&self) -> bool {
        match self.enrollment_counts() {
            Some((current, total)) => current >= total,
            None => false,
        }
    }

    /// Whether the section is at risk of cancellation due to low enrollment.
    ///
    /// At risk when enrollment is zero, or under 6 out of 20-or-more seats,
    /// or under 2 out of 10-or-more seats. Fixed policy thresholds.
    pub fn is_at_risk(&self) -> bool {
        match self.enrollment_counts() {
            Some((current, total)) => {
                current == 0 || (total >= 20 && current < 6) || (total >= 10 && current < 2)
            }
            None => false,
        }
    }
}
