//! Optional decision trace for a search run.

use serde::Serialize;
use std::fmt;

/// Why a branch or section was discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PruneReason {
    /// Rejected by the pre-filter pass (time window or full/at-risk policy).
    Viability,
    /// Overlaps a section already selected for an earlier course.
    Conflict,
    /// Completed combination carries more full sections than the cap.
    FullLimit,
}

impl PruneReason {
    fn label(self) -> &'static str {
        match self {
            PruneReason::Viability => "VIABILITY",
            PruneReason::Conflict => "CONFLICT",
            PruneReason::FullLimit => "FULL_LIMIT",
        }
    }
}

/// One event observed during the search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum TraceEvent {
    /// A candidate section is about to be tested at a course depth.
    Try {
        course: usize,
        group: u32,
        schedule: String,
    },
    /// A section or branch was discarded.
    Prune { reason: PruneReason, detail: String },
    /// A valid timetable was recorded (1-based index).
    Valid { index: usize },
    /// A frame exhausted its candidates and returned to its parent.
    Backtrack { depth: usize },
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceEvent::Try {
                course,
                group,
                schedule,
            } => write!(f, "[TRY] course {course}: group {group} - {schedule}"),
            TraceEvent::Prune { reason, detail } => {
                write!(f, "[PRUNE] {}: {detail}", reason.label())
            }
            TraceEvent::Valid { index } => write!(f, "[VALID] schedule {index} found"),
            TraceEvent::Backtrack { depth } => write!(f, "[BACKTRACK] depth {depth}"),
        }
    }
}

/// Collects [`TraceEvent`]s during a run without altering outcomes.
///
/// A disabled log records nothing and skips event construction entirely,
/// so tracing costs nothing when off.
#[derive(Debug, Default)]
pub struct TraceLog {
    enabled: bool,
    events: Vec<TraceEvent>,
}

impl TraceLog {
    /// A log that records events.
    pub fn enabled() -> Self {
        TraceLog {
            enabled: true,
            events: Vec::new(),
        }
    }

    /// A log that drops everything.
    pub fn disabled() -> Self {
        TraceLog::default()
    }

    /// Whether this log records events.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Records an event; the closure runs only when enabled.
    pub(crate) fn record(&mut self, event: impl FnOnce() -> TraceEvent) {
        if self.enabled {
            self.events.push(event());
        }
    }

    /// The recorded events, in order.
    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    /// Renders the trace as one line per event.
    pub fn render(&self) -> String {
        self.events
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Clears all recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}
