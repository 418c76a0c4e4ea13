//! YAML/JSON constraints parsing.

use crate::model::Constraints;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors produced while loading a constraints file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),

    #[error("config is neither valid YAML ({yaml}) nor valid JSON ({json})")]
    Parse {
        yaml: serde_yaml::Error,
        json: serde_json::Error,
    },
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    constraints: Constraints,
}

/// Parses a constraints document from text, trying YAML first and
/// falling back to JSON.
pub fn parse_constraints(text: &str) -> Result<Constraints, ConfigError> {
    let yaml_err = match serde_yaml::from_str::<ConfigFile>(text) {
        Ok(file) => return Ok(file.constraints),
        Err(e) => e,
    };
    match serde_json::from_str::<ConfigFile>(text) {
        Ok(file) => Ok(file.constraints),
        Err(json_err) => Err(ConfigError::Parse {
            yaml: yaml_err,
            json: json_err,
        }),
    }
}

/// Loads constraints from a YAML or JSON file.
pub fn load_constraints(path: impl AsRef<Path>) -> Result<Constraints, ConfigError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading constraints");
    parse_constraints(&fs::read_to_string(path)?)
}

/// Loads constraints from a file, or returns the defaults when no path
/// is given.
pub fn load_constraints_or_default(
    path: Option<impl AsRef<Path>>,
) -> Result<Constraints, ConfigError> {
    match path {
        Some(path) => load_constraints(path),
        None => Ok(Constraints::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const YAML: &str = "\
constraints:
  earliestStart: \"08:30\"
  latestEnd: \"17:00\"
  allowFull: false
  allowAtRisk: true
  maxSchedules: 5
  maxFullPerSchedule: 1
";

    const JSON: &str = r#"{
        "constraints": {
            "earliestStart": "09:00",
            "latestEnd": "16:00",
            "allowFull": true,
            "allowAtRisk": false,
            "maxSchedules": 3,
            "maxFullPerSchedule": 0
        }
    }"#;

    #[test]
    fn test_parse_yaml() {
        let c = parse_constraints(YAML).unwrap();
        assert_eq!(c.earliest_start.minutes(), 510);
        assert_eq!(c.latest_end.minutes(), 1020);
        assert!(!c.allow_full);
        assert_eq!(c.max_schedules, 5);
    }

    #[test]
    fn test_parse_json_fallback() {
        let c = parse_constraints(JSON).unwrap();
        assert_eq!(c.earliest_start.minutes(), 540);
        assert!(c.allow_full);
        assert!(!c.allow_at_risk);
    }

    #[test]
    fn test_missing_constraints_key() {
        assert!(matches!(
            parse_constraints("settings:\n  maxSchedules: 5\n"),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_missing_field() {
        let incomplete = "\
constraints:
  earliestStart: \"08:30\"
  latestEnd: \"17:00\"
";
        assert!(parse_constraints(incomplete).is_err());
    }

    #[test]
    fn test_invalid_clock_string() {
        let bad = YAML.replace("08:30", "8 AM");
        assert!(parse_constraints(&bad).is_err());
    }

    #[test]
    fn test_defaults_without_path() {
        let c = load_constraints_or_default(None::<&Path>).unwrap();
        assert_eq!(c, Constraints::default());
    }

    #[test]
    fn test_load_from_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(YAML.as_bytes()).unwrap();

        let c = load_constraints(file.path()).unwrap();
        assert_eq!(c.max_full_per_schedule, 1);
    }
}
