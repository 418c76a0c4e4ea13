//! CSV dataset ingestion.
//!
//! Produces candidate lists grouped by course, ready for the search
//! engine. Two formats are supported:
//!
//! - **Simple**: headers `group,schedule,enrolled,status`; group id `g`
//!   belongs to course `g / 100` (groups 101 and 102 share course 1).
//! - **Real dataset**: headers `Course Code, Course Name, Group, Schedule,
//!   Enrolled`; the status label is inferred from the enrollment
//!   (`full` at capacity, else `open`) and sections are grouped by
//!   course code.
//!
//! The core engine assumes group membership and ordering are already
//! resolved; everything here happens before a search starts, and every
//! failure is a typed [`IngestError`].

mod error;
mod loader;

pub use error::IngestError;
pub use loader::{
    detect_format, load_csv, load_csv_flat, load_csv_path, load_real_csv, load_real_csv_path,
    CsvFormat,
};
