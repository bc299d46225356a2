//! Read-only catalog of linkable hand ranges.
//!
//! The catalog is fed by an external collaborator (the range editor owns the
//! data); the chart editor only looks ids up to populate selection UI and to
//! pick defaults. No validation happens beyond "id exists".

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A linkable hand range: id, display name, and the hand → action-id map
/// the viewer renders into the 13×13 matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeEntry {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub hands: HashMap<String, String>,
}

impl RangeEntry {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            hands: HashMap::new(),
        }
    }
}

/// A named group of ranges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeFolder {
    pub id: String,
    pub name: String,
    pub ranges: Vec<RangeEntry>,
}

/// All ranges available for linking, grouped into folders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RangeCatalog {
    folders: Vec<RangeFolder>,
}

impl RangeCatalog {
    pub fn new(folders: Vec<RangeFolder>) -> Self {
        Self { folders }
    }

    /// True when no range exists anywhere in the catalog.
    pub fn is_empty(&self) -> bool {
        self.folders.iter().all(|f| f.ranges.is_empty())
    }

    pub fn folders(&self) -> &[RangeFolder] {
        &self.folders
    }

    /// Iterates over every range across all folders.
    pub fn ranges(&self) -> impl Iterator<Item = &RangeEntry> {
        self.folders.iter().flat_map(|f| f.ranges.iter())
    }

    pub fn get(&self, range_id: &str) -> Option<&RangeEntry> {
        self.ranges().find(|r| r.id == range_id)
    }

    pub fn contains(&self, range_id: &str) -> bool {
        self.get(range_id).is_some()
    }

    pub fn display_name(&self, range_id: &str) -> Option<&str> {
        self.get(range_id).map(|r| r.name.as_str())
    }

    /// The default link target for a new `Normal` button: the first range of
    /// the first non-empty folder.
    pub fn first_range_id(&self) -> Option<&str> {
        self.ranges().next().map(|r| r.id.as_str())
    }

    /// The folder containing a range, used to pre-select the folder picker
    /// when a button's settings open.
    pub fn folder_of(&self, range_id: &str) -> Option<&RangeFolder> {
        self.folders
            .iter()
            .find(|f| f.ranges.iter().any(|r| r.id == range_id))
    }

    /// Ranges inside one folder; empty for an unknown folder id.
    pub fn ranges_in(&self, folder_id: &str) -> &[RangeEntry] {
        self.folders
            .iter()
            .find(|f| f.id == folder_id)
            .map(|f| f.ranges.as_slice())
            .unwrap_or(&[])
    }
}
