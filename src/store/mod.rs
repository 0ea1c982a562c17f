// src/store/mod.rs
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime, Timelike};
use thiserror::Error;

use crate::models::{CredentialKind, SavedRecord};
use crate::utils::write_atomic;

pub mod export;

pub use export::ExportFormat;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("No saved password at index {0}")]
    NotFound(usize),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("No saved passwords to export")]
    NothingToExport,
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Ordered collection of saved credentials backed by one JSON file.
///
/// The whole set is rewritten on every mutation. A mutation only becomes
/// visible in memory after the new snapshot has been written.
#[derive(Debug)]
pub struct CredentialStore {
    path: PathBuf,
    records: Vec<SavedRecord>,
}

impl CredentialStore {
    /// Read the collection at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let records = if path.exists() {
            let content = fs::read_to_string(&path)?;
            let records: Vec<SavedRecord> = serde_json::from_str(&content)?;
            log::debug!("Loaded {} saved passwords from {}", records.len(), path.display());
            records
        } else {
            log::debug!("No saved passwords at {}, starting empty", path.display());
            Vec::new()
        };

        Ok(Self { path, records })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn add(&mut self, name: &str, secret: &str) -> Result<()> {
        self.add_with_kind(name, secret, None)
    }

    pub fn add_with_kind(&mut self, name: &str, secret: &str, kind: Option<CredentialKind>) -> Result<()> {
        if name.trim().is_empty() {
            return Err(StoreError::Validation("Name cannot be empty".to_string()));
        }
        if secret.is_empty() {
            return Err(StoreError::Validation("No password to save".to_string()));
        }

        let record = SavedRecord {
            name: name.to_string(),
            secret: secret.to_string(),
            kind: kind.unwrap_or_else(|| CredentialKind::infer(secret)),
            created_at: now_to_minute(),
        };

        let mut next = self.records.clone();
        next.push(record);
        self.commit(next)?;

        log::info!("Saved '{}' ({} records)", name, self.records.len());
        Ok(())
    }

    pub fn list_all(&self) -> &[SavedRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&SavedRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn delete_at(&mut self, index: usize) -> Result<SavedRecord> {
        if index >= self.records.len() {
            return Err(StoreError::NotFound(index));
        }

        let mut next = self.records.clone();
        let removed = next.remove(index);
        self.commit(next)?;

        log::info!("Deleted saved password at index {}", index);
        Ok(removed)
    }

    pub fn delete_all(&mut self) -> Result<()> {
        self.commit(Vec::new())?;
        log::info!("Deleted all saved passwords");
        Ok(())
    }

    pub fn export(&self, path: &Path, format: ExportFormat) -> Result<()> {
        if self.records.is_empty() {
            return Err(StoreError::NothingToExport);
        }

        match format {
            ExportFormat::Json => export::write_json(path, &self.records)?,
            ExportFormat::Csv => export::write_csv(path, &self.records)?,
        }

        log::info!("Exported {} records as {} to {}", self.records.len(), format, path.display());
        Ok(())
    }

    /// Export with the format picked from the file name. Returns the path written.
    pub fn export_inferred(&self, path: &Path) -> Result<PathBuf> {
        let (format, target) = ExportFormat::from_path(path);
        self.export(&target, format)?;
        Ok(target)
    }

    fn commit(&mut self, next: Vec<SavedRecord>) -> Result<()> {
        let json = serde_json::to_vec_pretty(&next)?;
        write_atomic(&self.path, &json)?;
        self.records = next;
        Ok(())
    }
}

fn now_to_minute() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(now)
}
