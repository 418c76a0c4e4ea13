//! Backtracking search over per-course candidate lists.
//!
//! Given one candidate list per course and a
//! [`Constraints`](crate::model::Constraints) record, [`SearchRunner`]
//! enumerates day/time-feasible
//! combinations honoring the full-section cap and the result-count cap.
//! Courses are assigned depth-first in caller-supplied order; the order is
//! the search order and is never reordered or heuristically reprioritized.
//!
//! Instrumentation observes the run without altering outcomes:
//! [`SearchStats`] counts explored nodes and pruning causes, and an
//! optional [`TraceLog`] records the decision sequence for inspection.

mod engine;
mod stats;
mod trace;

pub use engine::{SearchOutcome, SearchRunner};
pub use stats::SearchStats;
pub use trace::{PruneReason, TraceEvent, TraceLog};
