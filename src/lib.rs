//! Course timetabling engine.
//!
//! Assigns each of N independent courses exactly one section (a concrete
//! time-slotted offering) such that no two chosen sections overlap in time
//! on a shared day, subject to user constraints (earliest/latest allowed
//! time, full/at-risk section policy, a cap on full sections per result,
//! and a cap on the number of results).
//!
//! # Components
//!
//! - **[`parse`]**: Day tokens, 24-hour clock times, and the schedule-string
//!   parser that turns `"MW 10:00 AM - 11:30 AM"` into a normalized
//!   [`TimeSlot`](parse::TimeSlot).
//! - **[`model`]**: Immutable value records — [`Section`](model::Section),
//!   [`Constraints`](model::Constraints), and the
//!   [`Timetable`](model::Timetable) result record.
//! - **[`rules`]**: Per-section predicates — scalar viability and pairwise
//!   day/time conflict detection.
//! - **[`search`]**: Depth-first backtracking over courses with pruning,
//!   execution statistics, and an optional trace log.
//! - **[`ingest`]**: CSV dataset loading (simple and real-dataset formats).
//! - **[`config`]**: Constraints loading from YAML or JSON files.
//! - **[`datagen`]**: Synthetic problem instance generation for
//!   benchmarking and scalability testing.
//! - **[`verify`]**: Pluggable exact-solver seam for cross-validating the
//!   backtracking engine against an independent feasibility check.
//!
//! # Architecture
//!
//! The search engine is single-threaded and synchronous: one invocation
//! owns its selection stack, result list, and statistics exclusively, so
//! independent invocations may be run in parallel by the host without any
//! synchronization. Presentation (CLI, TUI, output formatting) is out of
//! scope and belongs to consumers.

pub mod config;
pub mod datagen;
pub mod ingest;
pub mod model;
pub mod parse;
pub mod rules;
pub mod search;
pub mod verify;
