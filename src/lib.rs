//! # RangeKit
//!
//! An editor core for poker range charts: spatial layouts of draggable,
//! resizable buttons that link to 13×13 hand-range matrices.
//!
//! ## Architecture
//!
//! RangeKit is organized as a workspace with multiple crates:
//!
//! 1. **rangekit-core** - Constants, error types, geometry primitives
//! 2. **rangekit-editor** - Canvas engine: gestures, resize math, reflow,
//!    editor lifecycle, range catalog, hand matrix
//! 3. **rangekit-storage** - JSON chart store and versioned backups
//! 4. **rangekit** - This facade, re-exporting the public API
//!
//! The presentation layer is deliberately absent: rendering, dialogs, and
//! input adapters are external collaborators that feed pointer events in
//! and read button lists out.

pub use rangekit_core::constants;
pub use rangekit_core::{CanvasSize, ChartError, Error, Point, Rect, Result};

pub use rangekit_editor::{
    change_kind, clamp_to_canvas, detect_resize_edge, drag_position, fit_scale, reflow_buttons,
    resize_rect, resolve_click, ButtonKind, CanvasFrame, ChartButton, ChartEditor, ClickOutcome,
    FontColor, Gesture, GestureKind, GestureTracker, PointerInput, RangeCatalog, RangeEntry,
    RangeFolder, ResizeEdge, StoredChart, LABEL_ONLY,
};

pub use rangekit_storage::{BackupFile, ChartStore, StorageError, BACKUP_VERSION};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
