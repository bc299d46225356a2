use rangekit_core::geometry::Point;
use rangekit_editor::gesture::{CanvasFrame, GestureKind, GestureTracker, PointerInput};
use rangekit_editor::geometry::ResizeEdge;
use rangekit_editor::model::{ButtonKind, ChartButton, LABEL_ONLY};

fn label_button() -> ChartButton {
    ChartButton::new(ButtonKind::Label, LABEL_ONLY)
}

#[test]
fn test_pointer_down_in_interior_starts_drag() {
    let button = label_button();
    let mut tracker = GestureTracker::new();

    let kind = tracker.begin(&button, Point::new(60.0, 20.0));
    assert_eq!(kind, Some(GestureKind::Drag));
    assert!(tracker.is_active());
    assert_eq!(tracker.active().unwrap().button_id, button.id);
}

#[test]
fn test_pointer_down_near_edge_starts_resize() {
    let button = label_button();
    let mut tracker = GestureTracker::new();

    // Default button is 120x40; (2, 2) is the nw corner zone.
    let kind = tracker.begin(&button, Point::new(2.0, 2.0));
    assert_eq!(kind, Some(GestureKind::Resize(ResizeEdge::NorthWest)));
}

#[test]
fn test_second_pointer_down_is_ignored() {
    let first = label_button();
    let second = label_button();
    let mut tracker = GestureTracker::new();

    tracker.begin(&first, Point::new(60.0, 20.0));
    // Single-pointer model: the second gesture does not start and the first
    // stays active.
    assert_eq!(tracker.begin(&second, Point::new(60.0, 20.0)), None);
    assert_eq!(tracker.active().unwrap().button_id, first.id);
}

#[test]
fn test_kind_fixed_for_gesture_duration() {
    let mut button = label_button();
    button.x = 100.0;
    button.y = 100.0;
    let mut tracker = GestureTracker::new();
    let frame = CanvasFrame::new(0.0, 0.0, 800.0, 500.0);

    tracker.begin(&button, Point::new(60.0, 20.0));

    // The pointer crosses into what would be an edge zone; the gesture is
    // still a drag, so the rect keeps its size.
    let (_, rect) = tracker
        .update(PointerInput::new(102.0, 102.0), &frame, &[button.clone()])
        .unwrap();
    assert_eq!(rect.width, button.width);
    assert_eq!(rect.height, button.height);
}

#[test]
fn test_update_translates_client_coordinates() {
    let mut button = label_button();
    button.x = 50.0;
    button.y = 50.0;
    let mut tracker = GestureTracker::new();
    // Canvas rendered 30px right, 10px down from the client origin.
    let frame = CanvasFrame::new(30.0, 10.0, 800.0, 500.0);

    tracker.begin(&button, Point::new(10.0, 10.0));

    let (id, rect) = tracker
        .update(PointerInput::new(130.0, 110.0), &frame, &[button.clone()])
        .unwrap();
    assert_eq!(id, button.id);
    // Canvas-local pointer is (100, 100); minus the grab offset -> (90, 90).
    assert_eq!(rect.x, 90.0);
    assert_eq!(rect.y, 90.0);
}

#[test]
fn test_update_with_vanished_button_is_noop() {
    let button = label_button();
    let mut tracker = GestureTracker::new();
    let frame = CanvasFrame::new(0.0, 0.0, 800.0, 500.0);

    tracker.begin(&button, Point::new(60.0, 20.0));

    // The button is gone from the list: the move is skipped, not an error.
    assert_eq!(
        tracker.update(PointerInput::new(100.0, 100.0), &frame, &[]),
        None
    );
}

#[test]
fn test_update_without_gesture_is_noop() {
    let button = label_button();
    let tracker = GestureTracker::new();
    let frame = CanvasFrame::new(0.0, 0.0, 800.0, 500.0);

    assert_eq!(
        tracker.update(PointerInput::new(100.0, 100.0), &frame, &[button]),
        None
    );
}

#[test]
fn test_end_from_any_state() {
    let button = label_button();
    let mut tracker = GestureTracker::new();

    // Ending while idle is safe.
    assert!(tracker.end().is_none());

    tracker.begin(&button, Point::new(60.0, 20.0));
    let gesture = tracker.end().unwrap();
    assert_eq!(gesture.button_id, button.id);
    assert!(!tracker.is_active());

    // A new gesture can start after the old one ends.
    assert!(tracker.begin(&button, Point::new(60.0, 20.0)).is_some());
}
