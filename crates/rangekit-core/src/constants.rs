//! Canvas and button limits shared across the workspace.

/// Minimum width/height of a chart button, in pixels.
pub const MIN_BUTTON_DIMENSION: f64 = 5.0;

/// Minimum canvas width/height, in pixels.
///
/// Always at least twice [`MIN_BUTTON_DIMENSION`], so a minimum-size button
/// fits inside any legal canvas.
pub const MIN_CANVAS_DIMENSION: f64 = 100.0;

/// Pixel band measured inward from each button edge in which a pointer-down
/// starts a resize instead of a drag.
pub const RESIZE_EDGE_TOLERANCE: f64 = 8.0;

/// Default canvas width for new charts, in pixels.
pub const DEFAULT_CANVAS_WIDTH: f64 = 800.0;

/// Default canvas height for new charts, in pixels.
pub const DEFAULT_CANVAS_HEIGHT: f64 = 500.0;

/// Default geometry for a newly added button.
pub const DEFAULT_BUTTON_X: f64 = 50.0;
pub const DEFAULT_BUTTON_Y: f64 = 50.0;
pub const DEFAULT_BUTTON_WIDTH: f64 = 120.0;
pub const DEFAULT_BUTTON_HEIGHT: f64 = 40.0;

/// Offset applied to both axes when duplicating a button.
pub const DUPLICATE_OFFSET: f64 = 10.0;

/// Viewport fractions used when maximizing the canvas in desktop layout.
/// Mobile layout uses the full viewport.
pub const MAXIMIZE_WIDTH_FACTOR: f64 = 0.97;
pub const MAXIMIZE_HEIGHT_FACTOR: f64 = 0.91;
