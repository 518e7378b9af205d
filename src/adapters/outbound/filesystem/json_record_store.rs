use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::ports::outbound::RecordStore;
use crate::recommendation::domain::ImageRecord;
use crate::shared::error::ScanError;
use crate::shared::Result;

/// JsonRecordStore adapter implementing [`RecordStore`] over one JSON file.
///
/// The whole store is read and rewritten per mutation; scans cover tens of
/// images, so a document store keeps the persistence layer trivial. Writes
/// go through a temp file in the target directory and an atomic rename, so
/// an interrupted scan never leaves a half-written store behind.
pub struct JsonRecordStore {
    path: PathBuf,
}

impl JsonRecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_records(&self, records: &[ImageRecord]) -> Result<()> {
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                fs::create_dir_all(parent).map_err(|e| ScanError::StoreWriteError {
                    path: self.path.clone(),
                    details: e.to_string(),
                })?;
                parent
            }
            _ => Path::new("."),
        };

        let json =
            serde_json::to_string_pretty(records).map_err(|e| ScanError::StoreWriteError {
                path: self.path.clone(),
                details: e.to_string(),
            })?;

        let mut file = NamedTempFile::new_in(parent).map_err(|e| ScanError::StoreWriteError {
            path: self.path.clone(),
            details: e.to_string(),
        })?;
        file.write_all(json.as_bytes())
            .map_err(|e| ScanError::StoreWriteError {
                path: self.path.clone(),
                details: e.to_string(),
            })?;
        file.persist(&self.path)
            .map_err(|e| ScanError::StoreWriteError {
                path: self.path.clone(),
                details: e.to_string(),
            })?;

        Ok(())
    }
}

impl RecordStore for JsonRecordStore {
    fn load_all(&self) -> Result<Vec<ImageRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| ScanError::StoreReadError {
            path: self.path.clone(),
            details: e.to_string(),
        })?;

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&content).map_err(|e| {
            ScanError::StoreReadError {
                path: self.path.clone(),
                details: e.to_string(),
            }
            .into()
        })
    }

    fn contains(&self, name: &str) -> Result<bool> {
        Ok(self.load_all()?.iter().any(|record| record.name == name))
    }

    fn upsert(&self, record: &ImageRecord) -> Result<()> {
        let mut records = self.load_all()?;
        match records.iter_mut().find(|existing| existing.name == record.name) {
            Some(existing) => *existing = record.clone(),
            None => records.push(record.clone()),
        }
        self.write_records(&records)
    }

    fn reset(&self) -> Result<()> {
        self.write_records(&[])
    }
}
