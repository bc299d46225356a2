//! The chart store: a JSON blob holding every saved chart.
//!
//! Charts are loaded wholesale on startup and written back wholesale on
//! every mutation the caller chooses to persist. A missing file is an empty
//! store, not an error.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use uuid::Uuid;

use rangekit_editor::model::StoredChart;

use crate::backup::BackupFile;
use crate::error::{StorageError, StorageResult};

/// All saved charts plus the file path they persist to.
#[derive(Debug, Clone)]
pub struct ChartStore {
    path: PathBuf,
    charts: Vec<StoredChart>,
}

impl ChartStore {
    /// An empty store that will persist to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            charts: Vec::new(),
        }
    }

    /// Loads the store from `path`. A file that does not exist yet yields
    /// an empty store.
    pub fn load(path: impl Into<PathBuf>) -> StorageResult<Self> {
        let path = path.into();
        if !path.exists() {
            debug!(path = %path.display(), "no chart store yet, starting empty");
            return Ok(Self::new(path));
        }
        let content = fs::read_to_string(&path)?;
        let charts = serde_json::from_str(&content)?;
        Ok(Self { path, charts })
    }

    /// Writes the store back to its path, creating parent directories as
    /// needed.
    pub fn save(&self) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.charts)?;
        fs::write(&self.path, json)?;
        debug!(path = %self.path.display(), charts = self.charts.len(), "chart store saved");
        Ok(())
    }

    /// The platform-default store location
    /// (`<data dir>/rangekit/charts.json`).
    pub fn default_path() -> StorageResult<PathBuf> {
        let dir = dirs::data_dir()
            .ok_or_else(|| StorageError::DataDirectory("no platform data directory".into()))?;
        Ok(dir.join("rangekit").join("charts.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn charts(&self) -> &[StoredChart] {
        &self.charts
    }

    pub fn get(&self, id: Uuid) -> Option<&StoredChart> {
        self.charts.iter().find(|c| c.id == id)
    }

    /// Creates a chart with the given name (seeded with its exit button)
    /// and returns its id.
    pub fn create_chart(&mut self, name: impl Into<String>) -> Uuid {
        let chart = StoredChart::new(name);
        let id = chart.id;
        self.charts.push(chart);
        id
    }

    /// Replaces the stored chart with the same id, or appends the chart if
    /// it is new. This is the editor's save path.
    pub fn upsert_chart(&mut self, chart: StoredChart) {
        match self.charts.iter_mut().find(|c| c.id == chart.id) {
            Some(slot) => *slot = chart,
            None => self.charts.push(chart),
        }
    }

    pub fn delete_chart(&mut self, id: Uuid) -> StorageResult<()> {
        let before = self.charts.len();
        self.charts.retain(|c| c.id != id);
        if self.charts.len() == before {
            return Err(StorageError::ChartNotFound { id: id.to_string() });
        }
        Ok(())
    }

    /// Snapshot of every chart as a versioned backup.
    pub fn export_backup(&self) -> BackupFile {
        BackupFile::new(self.charts.clone())
    }

    /// Replaces the store's contents with a backup's charts. The backup's
    /// version has already been checked on import.
    pub fn restore(&mut self, backup: BackupFile) {
        self.charts = backup.charts;
    }
}
