use rangekit_core::geometry::{CanvasSize, Point, Rect};
use rangekit_editor::geometry::{
    clamp_to_canvas, detect_resize_edge, drag_position, resize_rect, ResizeEdge,
};

const TOLERANCE: f64 = 8.0;

#[test]
fn test_corner_beats_single_edge() {
    // A pointer near both the top and left edges is the corner zone, never
    // one of its component edges.
    let edge = detect_resize_edge(Point::new(2.0, 2.0), 100.0, 100.0, TOLERANCE);
    assert_eq!(edge, Some(ResizeEdge::NorthWest));

    let edge = detect_resize_edge(Point::new(97.0, 2.0), 100.0, 100.0, TOLERANCE);
    assert_eq!(edge, Some(ResizeEdge::NorthEast));

    let edge = detect_resize_edge(Point::new(2.0, 97.0), 100.0, 100.0, TOLERANCE);
    assert_eq!(edge, Some(ResizeEdge::SouthWest));

    let edge = detect_resize_edge(Point::new(97.0, 97.0), 100.0, 100.0, TOLERANCE);
    assert_eq!(edge, Some(ResizeEdge::SouthEast));
}

#[test]
fn test_single_edges() {
    assert_eq!(
        detect_resize_edge(Point::new(2.0, 50.0), 100.0, 100.0, TOLERANCE),
        Some(ResizeEdge::West)
    );
    assert_eq!(
        detect_resize_edge(Point::new(97.0, 50.0), 100.0, 100.0, TOLERANCE),
        Some(ResizeEdge::East)
    );
    assert_eq!(
        detect_resize_edge(Point::new(50.0, 2.0), 100.0, 100.0, TOLERANCE),
        Some(ResizeEdge::North)
    );
    assert_eq!(
        detect_resize_edge(Point::new(50.0, 97.0), 100.0, 100.0, TOLERANCE),
        Some(ResizeEdge::South)
    );
}

#[test]
fn test_interior_is_drag_zone() {
    assert_eq!(
        detect_resize_edge(Point::new(50.0, 50.0), 100.0, 100.0, TOLERANCE),
        None
    );
    // Just inside the band boundary on both axes.
    assert_eq!(
        detect_resize_edge(Point::new(8.0, 8.0), 100.0, 100.0, TOLERANCE),
        None
    );
}

#[test]
fn test_drag_follows_grab_point() {
    let canvas = CanvasSize::new(800.0, 500.0);
    // Grabbed 20px into the button; pointer at (100, 90) puts the top-left
    // at (80, 70).
    let pos = drag_position(Point::new(100.0, 90.0), Point::new(20.0, 20.0), canvas, 120.0, 40.0);
    assert_eq!(pos, Point::new(80.0, 70.0));
}

#[test]
fn test_drag_clamps_to_canvas() {
    let canvas = CanvasSize::new(800.0, 500.0);
    // A drag that would land at (790, 490) stops at canvas - size.
    let pos = drag_position(Point::new(790.0, 490.0), Point::new(0.0, 0.0), canvas, 120.0, 40.0);
    assert_eq!(pos, Point::new(680.0, 460.0));

    // And past the origin, clamps to zero.
    let pos = drag_position(
        Point::new(-300.0, -300.0),
        Point::new(0.0, 0.0),
        canvas,
        120.0,
        40.0,
    );
    assert_eq!(pos, Point::new(0.0, 0.0));
}

#[test]
fn test_drag_degenerate_canvas_clamps_to_zero() {
    // Canvas narrower than the button: position pins to 0 rather than
    // going negative.
    let canvas = CanvasSize::new(100.0, 100.0);
    let pos = drag_position(Point::new(50.0, 50.0), Point::new(0.0, 0.0), canvas, 120.0, 40.0);
    assert_eq!(pos.x, 0.0);
}

#[test]
fn test_resize_east_edge() {
    let canvas = CanvasSize::new(800.0, 500.0);
    let rect = Rect::new(50.0, 50.0, 120.0, 40.0);
    let out = resize_rect(ResizeEdge::East, Point::new(250.0, 70.0), rect, canvas);
    assert_eq!(out, Rect::new(50.0, 50.0, 200.0, 40.0));
}

#[test]
fn test_resize_west_edge_moves_with_pointer() {
    let canvas = CanvasSize::new(800.0, 500.0);
    let rect = Rect::new(50.0, 50.0, 120.0, 40.0);
    // Pointer at x=80: left edge follows, right edge anchored at 170.
    let out = resize_rect(ResizeEdge::West, Point::new(80.0, 70.0), rect, canvas);
    assert_eq!(out, Rect::new(80.0, 50.0, 90.0, 40.0));
    assert_eq!(out.right(), rect.right());
}

#[test]
fn test_resize_west_floors_at_minimum() {
    let canvas = CanvasSize::new(800.0, 500.0);
    let rect = Rect::new(50.0, 50.0, 120.0, 40.0);
    // Dragging the west edge far past the east edge: width floors at 5 and
    // x stalls at 165 (= 50 + 120 - 5) instead of drifting with the pointer.
    let out = resize_rect(ResizeEdge::West, Point::new(400.0, 70.0), rect, canvas);
    assert_eq!(out.width, 5.0);
    assert_eq!(out.x, 165.0);
}

#[test]
fn test_resize_north_floors_at_minimum() {
    let canvas = CanvasSize::new(800.0, 500.0);
    let rect = Rect::new(50.0, 50.0, 120.0, 40.0);
    let out = resize_rect(ResizeEdge::North, Point::new(70.0, 400.0), rect, canvas);
    assert_eq!(out.height, 5.0);
    assert_eq!(out.y, 85.0);
    assert_eq!(out.bottom(), rect.bottom());
}

#[test]
fn test_resize_corner_combines_axes() {
    let canvas = CanvasSize::new(800.0, 500.0);
    let rect = Rect::new(50.0, 50.0, 120.0, 40.0);
    let out = resize_rect(ResizeEdge::SouthEast, Point::new(300.0, 200.0), rect, canvas);
    assert_eq!(out, Rect::new(50.0, 50.0, 250.0, 150.0));

    let out = resize_rect(ResizeEdge::NorthWest, Point::new(30.0, 20.0), rect, canvas);
    assert_eq!(out, Rect::new(30.0, 20.0, 140.0, 70.0));
}

#[test]
fn test_resize_outside_canvas_is_clamped() {
    let canvas = CanvasSize::new(800.0, 500.0);
    let rect = Rect::new(700.0, 450.0, 80.0, 40.0);
    // Handle dragged far outside the canvas: the result still satisfies the
    // invariant.
    let out = resize_rect(ResizeEdge::SouthEast, Point::new(1200.0, 900.0), rect, canvas);
    assert!(canvas.contains_rect(&out));
    assert_eq!(out.right(), 800.0);
    assert_eq!(out.bottom(), 500.0);
}

#[test]
fn test_clamp_preserves_fitting_rect() {
    let canvas = CanvasSize::new(800.0, 500.0);
    let rect = Rect::new(50.0, 50.0, 120.0, 40.0);
    assert_eq!(clamp_to_canvas(rect, canvas), rect);
}

#[test]
fn test_clamp_moves_before_shrinking() {
    let canvas = CanvasSize::new(600.0, 500.0);
    // Fits after moving: size preserved.
    let out = clamp_to_canvas(Rect::new(700.0, 50.0, 120.0, 40.0), canvas);
    assert_eq!(out, Rect::new(480.0, 50.0, 120.0, 40.0));

    // Wider than the canvas: pinned at 0 and shrunk to fit.
    let out = clamp_to_canvas(Rect::new(0.0, 0.0, 900.0, 40.0), canvas);
    assert_eq!(out, Rect::new(0.0, 0.0, 600.0, 40.0));
}

#[test]
fn test_clamp_floors_degenerate_sizes() {
    let canvas = CanvasSize::new(800.0, 500.0);
    let out = clamp_to_canvas(Rect::new(10.0, 10.0, 0.0, -20.0), canvas);
    assert_eq!(out.width, 5.0);
    assert_eq!(out.height, 5.0);

    // NaN snaps to the minimum too.
    let out = clamp_to_canvas(Rect::new(10.0, 10.0, f64::NAN, f64::NAN), canvas);
    assert_eq!(out.width, 5.0);
    assert_eq!(out.height, 5.0);
}
