//! # RangeKit Storage
//!
//! Durable persistence for charts. The editor treats this layer as an
//! opaque collaborator: charts go in and come out as whole values, stored
//! on disk as a single JSON blob, with versioned backup files for
//! export/import.

pub mod backup;
pub mod error;
pub mod store;

pub use backup::{BackupFile, BACKUP_VERSION};
pub use error::{StorageError, StorageResult};
pub use store::ChartStore;
