//! # RangeKit Editor
//!
//! This crate provides the direct-manipulation canvas engine behind range
//! charts: spatial layouts of clickable, resizable buttons that link to
//! poker hand-range matrices.
//!
//! ## Core Components
//!
//! ### Canvas Engine
//! - **Geometry**: edge-zone detection, clamped drag translation, and
//!   eight-direction resize math against canvas bounds
//! - **Gestures**: a single-pointer state machine fed by unified
//!   mouse/touch events
//! - **Reflow**: re-clamping every button when the canvas itself resizes
//!
//! ### Editing
//! - **Model**: buttons, kinds (range link / label / exit), stored charts
//! - **Editor**: add/save/cancel/duplicate lifecycle over a draft copy
//! - **Catalog**: read-only lookup of linkable ranges
//!
//! ### Viewing
//! - **Click resolution**: route button activation to a range or an exit
//! - **Matrix**: the static 13×13 hand lookup table
//!
//! ## Architecture
//!
//! ```text
//! ChartEditor (lifecycle + canvas dimensions)
//!   ├── GestureTracker (drag/resize state machine)
//!   │     └── geometry (pure edge/drag/resize/clamp math)
//!   ├── reflow (canvas-resize policy)
//!   └── RangeCatalog (external, read-only)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rangekit_editor::{ChartEditor, RangeCatalog};
//!
//! let mut editor = ChartEditor::open(chart, RangeCatalog::default());
//! editor.pointer_down(button_id, local);
//! editor.pointer_move(pointer, &frame);
//! editor.pointer_up();
//! let record = editor.to_stored();
//! ```

pub mod catalog;
pub mod editor;
pub mod geometry;
pub mod gesture;
pub mod matrix;
pub mod model;
pub mod reflow;
pub mod viewer;

pub use catalog::{RangeCatalog, RangeEntry, RangeFolder};
pub use editor::{change_kind, ChartEditor};
pub use geometry::{
    clamp_to_canvas, detect_resize_edge, drag_position, resize_rect, ResizeEdge,
};
pub use gesture::{CanvasFrame, Gesture, GestureKind, GestureTracker, PointerInput};
pub use model::{ButtonKind, ChartButton, FontColor, StoredChart, LABEL_ONLY};
pub use reflow::reflow_buttons;
pub use viewer::{fit_scale, legend_label, resolve_click, used_action_ids, ClickOutcome};
