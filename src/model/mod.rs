//! Immutable value records.
//!
//! - [`Section`]: one concrete offering (schedule text, enrollment text)
//!   candidate for a course, with its eagerly parsed
//!   [`TimeSlot`](crate::parse::TimeSlot) and the derived full/at-risk
//!   classification.
//! - [`Constraints`]: per-run scalar constraints, supplied once per search
//!   invocation and never mutated during a run.
//! - [`Timetable`]: one complete, conflict-free, per-course assignment
//!   together with its derived summary metadata.

mod constraints;
mod section;
mod timetable;

pub use constraints::Constraints;
pub use section::Section;
pub use timetable::{Timetable, TimetableMeta};
