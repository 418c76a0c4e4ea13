//! Accepted schedule combinations and their summary metadata.

use super::{Constraints, Section};
use crate::parse::{ClockTime, TimeSlot};
use serde::Serialize;

/// Derived summary metadata for one accepted timetable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimetableMeta {
    /// Number of selected sections that are full.
    pub full_count: usize,
    /// Whether the latest meeting ends no later than the preferred
    /// `latest_end` bound.
    pub ends_by_preferred: bool,
    /// Whether any selected section starts at or after noon.
    pub has_late_section: bool,
    /// The latest end minute across all selections (0 when none parse).
    pub latest_end_minute: u16,
}

/// One complete, conflict-free, per-course section assignment.
///
/// Produced only at an accepted leaf of the search tree and never mutated
/// afterwards. Selections preserve the caller-supplied course order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Timetable {
    /// The chosen section for each course, in course order.
    pub selections: Vec<Section>,
    /// Parsed slots of the selections, in the same order.
    pub slots: Vec<TimeSlot>,
    /// Derived summary metadata.
    pub meta: TimetableMeta,
}

impl Timetable {
    /// Assembles a timetable record from a complete selection.
    pub(crate) fn assemble(selections: Vec<Section>, constraints: &Constraints) -> Self {
        let slots: Vec<TimeSlot> = selections.iter().filter_map(|s| s.slot).collect();

        let full_count = selections.iter().filter(|s| s.is_full()).count();
        let latest_end_minute = slots.iter().map(|s| s.end_minute).max().unwrap_or(0);
        let ends_by_preferred = latest_end_minute <= constraints.latest_end.minutes();
        let has_late_section = slots
            .iter()
            .any(|s| s.start_minute >= ClockTime::NOON.minutes());

        Timetable {
            selections,
            slots,
            meta: TimetableMeta {
                full_count,
                ends_by_preferred,
                has_late_section,
                latest_end_minute,
            },
        }
    }
}
