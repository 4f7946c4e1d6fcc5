//! Shared helpers for CLI commands.
//!
//! Commands read entries from a JSON file and anchor every calculation to an
//! explicit reference date, falling back to the configured entries file and
//! the local calendar date when the flags are omitted.

use std::path::Path;

use chrono::NaiveDate;
use habitdash_core::Entry;
use serde::Deserialize;

use crate::config::Config;

/// On-disk entry shape. Dates stay as strings until parse time so a
/// malformed one surfaces as a date error, not a deserialization error.
#[derive(Debug, Deserialize)]
struct RawEntry {
    habit_id: String,
    date: String,
    completed: bool,
    #[serde(default)]
    current_value: f64,
}

/// Read and parse an entries file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not a JSON array of
/// entries, or contains a date that is not a real `YYYY-MM-DD` day.
pub fn load_entries(path: &Path) -> Result<Vec<Entry>, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    let raw: Vec<RawEntry> = serde_json::from_str(&content)
        .map_err(|e| format!("cannot parse {}: {e}", path.display()))?;

    let mut entries = Vec::with_capacity(raw.len());
    for r in raw {
        entries.push(Entry::from_ymd_str(
            r.habit_id,
            &r.date,
            r.completed,
            r.current_value,
        )?);
    }
    Ok(entries)
}

/// Resolve the entries file from the `--file` flag or the config default,
/// then load it.
///
/// # Errors
///
/// Returns an error if no path can be resolved or the file fails to load.
pub fn load_entries_from(file: Option<String>) -> Result<Vec<Entry>, Box<dyn std::error::Error>> {
    let path = match file {
        Some(path) => std::path::PathBuf::from(path),
        None => Config::load_or_default().entries_file()?,
    };
    load_entries(&path)
}

/// Resolve the reference date from the `--date` flag, defaulting to today.
///
/// # Errors
///
/// Returns an error if the flag value is not a real `YYYY-MM-DD` day.
pub fn reference_date(date: Option<String>) -> Result<NaiveDate, Box<dyn std::error::Error>> {
    match date {
        Some(s) => Ok(habitdash_core::parse_date(&s)?),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_fixture(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        file.write_all(json.as_bytes()).expect("write fixture");
        file
    }

    #[test]
    fn test_load_entries_parses_dates_and_defaults_value() {
        let file = write_fixture(
            r#"[
                {"habit_id": "water", "date": "2024-03-01", "completed": true, "current_value": 2.5},
                {"habit_id": "water", "date": "2024-03-02", "completed": false}
            ]"#,
        );
        let entries = load_entries(file.path()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(
            entries[0].date,
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
        assert_eq!(entries[0].current_value, 2.5);
        assert_eq!(entries[1].current_value, 0.0);
        assert!(!entries[1].completed);
    }

    #[test]
    fn test_load_entries_rejects_malformed_date() {
        let file = write_fixture(
            r#"[{"habit_id": "water", "date": "2024-13-05", "completed": true}]"#,
        );
        let err = load_entries(file.path()).unwrap_err();
        assert!(err.to_string().contains("Malformed date"));
    }

    #[test]
    fn test_load_entries_rejects_non_array_json() {
        let file = write_fixture(r#"{"habit_id": "water"}"#);
        assert!(load_entries(file.path()).is_err());
    }

    #[test]
    fn test_reference_date_parses_flag_value() {
        let date = reference_date(Some("2024-06-30".to_string())).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 6, 30).unwrap());
        assert!(reference_date(Some("not-a-date".to_string())).is_err());
    }
}
