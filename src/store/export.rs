// src/store/export.rs
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::Result;
use crate::models::SavedRecord;

pub const CSV_HEADER: [&str; 4] = ["Name", "Password", "Type", "Date"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    /// A name ending in `.csv` selects CSV; anything else is JSON with `.json`
    /// appended when missing. Suffixes are case-sensitive and a bare `.csv`
    /// file name counts.
    pub fn from_path(path: &Path) -> (ExportFormat, PathBuf) {
        let name = path.to_string_lossy();
        if name.ends_with(".csv") {
            (ExportFormat::Csv, path.to_path_buf())
        } else if name.ends_with(".json") {
            (ExportFormat::Json, path.to_path_buf())
        } else {
            let mut with_suffix = path.as_os_str().to_owned();
            with_suffix.push(".json");
            (ExportFormat::Json, PathBuf::from(with_suffix))
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Csv => write!(f, "csv"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            other => Err(format!("Unsupported export format '{}'", other)),
        }
    }
}

// Pretty-printed array in the persisted record shape
pub fn write_json(path: &Path, records: &[SavedRecord]) -> Result<()> {
    let json = serde_json::to_string_pretty(records)?;
    fs::write(path, json)?;
    Ok(())
}

pub fn write_csv(path: &Path, records: &[SavedRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(CSV_HEADER)?;
    for record in records {
        writer.write_record([
            record.name.as_str(),
            record.secret.as_str(),
            record.kind.as_str(),
            record.date_string().as_str(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
