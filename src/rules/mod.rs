//! Per-section predicates.
//!
//! Two pure predicates drive the search:
//!
//! - [`is_viable`]: whether a single section satisfies the scalar
//!   constraints (time window, full/at-risk policy), independent of any
//!   other section. Applied once per section during pre-filtering.
//! - [`has_conflict`]: whether two sections overlap in time on a shared
//!   day. Symmetric, and inert for unparseable sections.

mod conflict;
mod viability;

pub use conflict::has_conflict;
pub use viability::is_viable;
