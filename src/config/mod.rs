//! Constraints file loading.
//!
//! Reads a validated [`Constraints`](crate::model::Constraints) record
//! from a YAML or JSON file shaped as:
//!
//! ```yaml
//! constraints:
//!   earliestStart: "08:00"
//!   latestEnd: "18:00"
//!   allowFull: false
//!   allowAtRisk: true
//!   maxSchedules: 5
//!   maxFullPerSchedule: 1
//! ```
//!
//! YAML is tried first, then JSON. All six fields are required; clock
//! strings are validated during deserialization, so a malformed time is a
//! hard failure here — the search engine never sees one.

mod loader;

pub use loader::{load_constraints, load_constraints_or_default, parse_constraints, ConfigError};
