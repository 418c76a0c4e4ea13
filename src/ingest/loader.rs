//! CSV readers for the two supported dataset formats.

use super::error::IngestError;
use crate::model::Section;
use csv::StringRecord;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

const SIMPLE_COLUMNS: [&str; 4] = ["group", "schedule", "enrolled", "status"];
const REAL_COLUMNS: [&str; 5] = [
    "Course Code",
    "Course Name",
    "Group",
    "Schedule",
    "Enrolled",
];

/// Which dataset layout a CSV file uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsvFormat {
    /// `group,schedule,enrolled,status` with numeric course grouping.
    Simple,
    /// Real-dataset export with course code/name columns.
    Real,
}

/// Detects the dataset format from the header row.
///
/// A `Course Code` header marks the real-dataset format; anything else is
/// treated as the simple format.
pub fn detect_format<R: Read>(reader: R) -> Result<CsvFormat, IngestError> {
    let mut rdr = csv::Reader::from_reader(reader);
    let headers = rdr.headers()?;
    if headers.iter().any(|h| h.trim() == "Course Code") {
        Ok(CsvFormat::Real)
    } else {
        Ok(CsvFormat::Simple)
    }
}

/// Loads a simple-format dataset, grouped by course.
///
/// Group id `g` belongs to course `g / 100`, so groups 101 and 102 are
/// alternatives for the same course. Courses come back sorted by course
/// id, each with its sections in file order.
pub fn load_csv<R: Read>(reader: R) -> Result<Vec<Vec<Section>>, IngestError> {
    let mut rdr = csv::Reader::from_reader(reader);
    let headers = rdr.headers()?.clone();
    let idx = column_indexes(&headers, &SIMPLE_COLUMNS)?;

    let mut by_course: BTreeMap<u32, Vec<Section>> = BTreeMap::new();
    for (record_no, result) in rdr.records().enumerate() {
        let record = result?;
        let group_text = field(&record, idx[0], "group", record_no)?;
        let group: u32 = group_text.parse().map_err(|_| IngestError::InvalidGroup {
            record: record_no,
            value: group_text.to_string(),
        })?;
        let schedule = field(&record, idx[1], "schedule", record_no)?;
        let enrolled = field(&record, idx[2], "enrolled", record_no)?;
        let status = field(&record, idx[3], "status", record_no)?;

        by_course
            .entry(group / 100)
            .or_default()
            .push(Section::new(group, schedule, enrolled, status));
    }

    if by_course.is_empty() {
        return Err(IngestError::Empty);
    }
    Ok(by_course.into_values().collect())
}

/// Loads a simple-format dataset from a file path.
pub fn load_csv_path(path: impl AsRef<Path>) -> Result<Vec<Vec<Section>>, IngestError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading simple-format dataset");
    load_csv(File::open(path)?)
}

/// Loads a simple-format dataset without course grouping.
pub fn load_csv_flat<R: Read>(reader: R) -> Result<Vec<Section>, IngestError> {
    Ok(load_csv(reader)?.into_iter().flatten().collect())
}

/// Loads a real-dataset export, grouped by course code.
///
/// The status label is inferred from the enrollment text: `full` at
/// capacity, otherwise `open`. Courses come back sorted by course code.
pub fn load_real_csv<R: Read>(reader: R) -> Result<Vec<Vec<Section>>, IngestError> {
    let mut rdr = csv::Reader::from_reader(reader);
    let headers = rdr.headers()?.clone();
    let idx = column_indexes(&headers, &REAL_COLUMNS)?;

    let mut by_course: BTreeMap<String, Vec<Section>> = BTreeMap::new();
    for (record_no, result) in rdr.records().enumerate() {
        let record = result?;
        let course_code = field(&record, idx[0], "Course Code", record_no)?.to_string();
        let group_text = field(&record, idx[2], "Group", record_no)?;
        let group: u32 = group_text.parse().map_err(|_| IngestError::InvalidGroup {
            record: record_no,
            value: group_text.to_string(),
        })?;
        let schedule = field(&record, idx[3], "Schedule", record_no)?;
        let enrolled = field(&record, idx[4], "Enrolled", record_no)?;

        let (current, total) =
            parse_enrollment(enrolled).ok_or_else(|| IngestError::InvalidEnrollment {
                record: record_no,
                value: enrolled.to_string(),
            })?;
        let status = if current == total { "full" } else { "open" };

        by_course
            .entry(course_code)
            .or_default()
            .push(Section::new(group, schedule, enrolled, status));
    }

    if by_course.is_empty() {
        return Err(IngestError::Empty);
    }
    Ok(by_course.into_values().collect())
}

/// Loads a real-dataset export from a file path.
pub fn load_real_csv_path(path: impl AsRef<Path>) -> Result<Vec<Vec<Section>>, IngestError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading real-format dataset");
    load_real_csv(File::open(path)?)
}

fn column_indexes(headers: &StringRecord, required: &[&str]) -> Result<Vec<usize>, IngestError> {
    let mut indexes = Vec::with_capacity(required.len());
    let mut missing = Vec::new();
    for name in required {
        match headers.iter().position(|h| h.trim() == *name) {
            Some(i) => indexes.push(i),
            None => missing.push(name.to_string()),
        }
    }
    if !missing.is_empty() {
        return Err(IngestError::MissingColumns {
            missing,
            available: headers.iter().map(|h| h.trim().to_string()).collect(),
        });
    }
    Ok(indexes)
}

fn field<'r>(
    record: &'r StringRecord,
    idx: usize,
    name: &'static str,
    record_no: usize,
) -> Result<&'r str, IngestError> {
    let value = record.get(idx).unwrap_or("").trim();
    if value.is_empty() {
        return Err(IngestError::EmptyField {
            record: record_no,
            field: name,
        });
    }
    Ok(value)
}

fn parse_enrollment(text: &str) -> Option<(u32, u32)> {
    let (current, total) = text.split_once('/')?;
    Some((current.trim().parse().ok()?, total.trim().parse().ok()?))
}
