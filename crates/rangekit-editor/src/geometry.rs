//! Pure geometry for dragging and resizing buttons inside the canvas.
//!
//! Every function here is total: out-of-range or NaN input snaps to the
//! nearest legal value instead of failing. The invariant maintained by all
//! of them is the canvas invariant: non-negative position, minimum size,
//! and the whole rectangle inside the canvas bounds.

use rangekit_core::constants::MIN_BUTTON_DIMENSION;
use rangekit_core::geometry::{CanvasSize, Point, Rect};

/// The eight resize zones around a button's border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeEdge {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl ResizeEdge {
    /// True when dragging this edge moves the right border.
    fn resizes_east(self) -> bool {
        matches!(self, Self::East | Self::NorthEast | Self::SouthEast)
    }

    /// True when dragging this edge moves the left border (the right border
    /// is anchored).
    fn resizes_west(self) -> bool {
        matches!(self, Self::West | Self::NorthWest | Self::SouthWest)
    }

    /// True when dragging this edge moves the bottom border.
    fn resizes_south(self) -> bool {
        matches!(self, Self::South | Self::SouthEast | Self::SouthWest)
    }

    /// True when dragging this edge moves the top border (the bottom border
    /// is anchored).
    fn resizes_north(self) -> bool {
        matches!(self, Self::North | Self::NorthEast | Self::NorthWest)
    }

    /// CSS cursor name for hover feedback over this zone.
    pub fn cursor(self) -> &'static str {
        match self {
            Self::North => "n-resize",
            Self::South => "s-resize",
            Self::East => "e-resize",
            Self::West => "w-resize",
            Self::NorthEast => "ne-resize",
            Self::NorthWest => "nw-resize",
            Self::SouthEast => "se-resize",
            Self::SouthWest => "sw-resize",
        }
    }
}

/// Classifies a pointer position (relative to a button's top-left corner)
/// into one of the eight resize zones, or `None` for the interior drag zone.
///
/// Corners win over single edges: a pointer within `tolerance` of both the
/// top and left edges is `NorthWest`, not `North` or `West`.
pub fn detect_resize_edge(
    local: Point,
    width: f64,
    height: f64,
    tolerance: f64,
) -> Option<ResizeEdge> {
    let near_left = local.x < tolerance;
    let near_right = local.x > width - tolerance;
    let near_top = local.y < tolerance;
    let near_bottom = local.y > height - tolerance;

    if near_left && near_top {
        Some(ResizeEdge::NorthWest)
    } else if near_right && near_top {
        Some(ResizeEdge::NorthEast)
    } else if near_left && near_bottom {
        Some(ResizeEdge::SouthWest)
    } else if near_right && near_bottom {
        Some(ResizeEdge::SouthEast)
    } else if near_left {
        Some(ResizeEdge::West)
    } else if near_right {
        Some(ResizeEdge::East)
    } else if near_top {
        Some(ResizeEdge::North)
    } else if near_bottom {
        Some(ResizeEdge::South)
    } else {
        None
    }
}

/// New top-left position for a dragged button.
///
/// `pointer` is canvas-local; `grab_offset` is where inside the button the
/// gesture started, so the grabbed point stays under the pointer. The result
/// is clamped so the button remains fully inside the canvas; when the canvas
/// is narrower than the button the position clamps to 0.
pub fn drag_position(
    pointer: Point,
    grab_offset: Point,
    canvas: CanvasSize,
    width: f64,
    height: f64,
) -> Point {
    let x = (pointer.x - grab_offset.x)
        .min(canvas.width - width)
        .max(0.0);
    let y = (pointer.y - grab_offset.y)
        .min(canvas.height - height)
        .max(0.0);
    Point::new(x, y)
}

/// New rectangle for a resize step.
///
/// The pointer determines one or two of position/size depending on the edge.
/// West/north edges anchor the opposite border: the new width/height is
/// floored at the minimum *first* and the position derived from it, so the
/// anchored border never drifts when the pointer overshoots past it; the
/// moving border simply stalls at minimum size. The result is then re-clamped
/// against the canvas, which keeps the invariant even when the pointer leaves
/// the canvas entirely.
pub fn resize_rect(edge: ResizeEdge, pointer: Point, rect: Rect, canvas: CanvasSize) -> Rect {
    let mut out = rect;

    if edge.resizes_east() {
        out.width = (pointer.x - rect.x).max(MIN_BUTTON_DIMENSION);
    } else if edge.resizes_west() {
        let width = (rect.width - (pointer.x - rect.x)).max(MIN_BUTTON_DIMENSION);
        out.x = rect.right() - width;
        out.width = width;
    }

    if edge.resizes_south() {
        out.height = (pointer.y - rect.y).max(MIN_BUTTON_DIMENSION);
    } else if edge.resizes_north() {
        let height = (rect.height - (pointer.y - rect.y)).max(MIN_BUTTON_DIMENSION);
        out.y = rect.bottom() - height;
        out.height = height;
    }

    clamp_to_canvas(out, canvas)
}

/// Clamps a rectangle into the canvas.
///
/// Order matters: size is floored at the minimum, position is clamped
/// against that size, and size is then re-floored against the clamped
/// position. A rectangle that no longer fits shrinks rather than overflows,
/// and one that already fits comes back unchanged.
pub fn clamp_to_canvas(rect: Rect, canvas: CanvasSize) -> Rect {
    let width = rect.width.max(MIN_BUTTON_DIMENSION);
    let height = rect.height.max(MIN_BUTTON_DIMENSION);
    let x = rect.x.min(canvas.width - width).max(0.0);
    let y = rect.y.min(canvas.height - height).max(0.0);
    Rect {
        x,
        y,
        width: width.min(canvas.width - x),
        height: height.min(canvas.height - y),
    }
}
