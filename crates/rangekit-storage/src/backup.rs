//! Versioned backup files for export/import of all charts.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use rangekit_editor::model::StoredChart;

use crate::error::{StorageError, StorageResult};

/// Backup format version. Imports of any other version are rejected rather
/// than migrated.
pub const BACKUP_VERSION: u32 = 1;

/// A timestamped snapshot of every chart, as written to a user-chosen file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupFile {
    pub version: u32,
    pub timestamp: DateTime<Utc>,
    pub charts: Vec<StoredChart>,
}

impl BackupFile {
    pub fn new(charts: Vec<StoredChart>) -> Self {
        Self {
            version: BACKUP_VERSION,
            timestamp: Utc::now(),
            charts,
        }
    }

    /// Writes the backup as pretty-printed JSON.
    pub fn export_to_file(&self, path: impl AsRef<Path>) -> StorageResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), json)?;
        Ok(())
    }

    /// Reads a backup, rejecting unknown versions.
    pub fn import_from_file(path: impl AsRef<Path>) -> StorageResult<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let backup: BackupFile = serde_json::from_str(&content)?;
        if backup.version != BACKUP_VERSION {
            return Err(StorageError::UnsupportedVersion {
                found: backup.version,
                expected: BACKUP_VERSION,
            });
        }
        Ok(backup)
    }
}
