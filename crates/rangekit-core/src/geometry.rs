//! Geometry primitives for canvas-local coordinates.
//!
//! All values are f64 pixels. The canvas coordinate space has its origin at
//! the top-left corner with +X right and +Y down, matching the rendered
//! layout the editor manipulates.

use serde::{Deserialize, Serialize};

use crate::constants::MIN_CANVAS_DIMENSION;

/// A point in canvas-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle: top-left position plus size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Top-left corner.
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// X coordinate of the right edge.
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Y coordinate of the bottom edge.
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Canvas dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Floors both dimensions at [`MIN_CANVAS_DIMENSION`].
    ///
    /// NaN input snaps to the minimum, so malformed form values entering
    /// through this path never produce an illegal canvas.
    pub fn clamped(self) -> Self {
        Self {
            width: self.width.max(MIN_CANVAS_DIMENSION),
            height: self.height.max(MIN_CANVAS_DIMENSION),
        }
    }

    /// True when a rect lies fully inside the canvas.
    pub fn contains_rect(&self, rect: &Rect) -> bool {
        rect.x >= 0.0 && rect.y >= 0.0 && rect.right() <= self.width && rect.bottom() <= self.height
    }
}
