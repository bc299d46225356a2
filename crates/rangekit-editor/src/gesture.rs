//! Single-pointer gesture tracking for button manipulation.
//!
//! Mouse and touch adapters both reduce their events to [`PointerInput`]
//! samples, so the drag/resize math exists exactly once. The tracker is a
//! three-state machine (idle, dragging, resizing) with the gesture kind
//! fixed at pointer-down and never re-evaluated mid-gesture.
//!
//! The adapter contract mirrors the tracker's state: document-scope
//! move/up listeners are registered exactly while [`GestureTracker::is_active`]
//! holds, default touch scrolling is suppressed for the same window, and
//! every exit path (pointer-up, touch-end, touch-cancel, editor teardown)
//! funnels through [`GestureTracker::end`].

use uuid::Uuid;

use rangekit_core::constants::RESIZE_EDGE_TOLERANCE;
use rangekit_core::geometry::{CanvasSize, Point, Rect};

use crate::geometry::{detect_resize_edge, drag_position, resize_rect, ResizeEdge};
use crate::model::ChartButton;

/// A single pointer sample in client coordinates, regardless of whether it
/// came from a mouse event or the first touch of a touch event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerInput {
    pub client_x: f64,
    pub client_y: f64,
}

impl PointerInput {
    pub fn new(client_x: f64, client_y: f64) -> Self {
        Self { client_x, client_y }
    }
}

/// The rendered canvas rectangle in client coordinates, as reported by the
/// presentation layer for the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasFrame {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl CanvasFrame {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Translates a client-space pointer into canvas-local coordinates.
    pub fn to_local(&self, pointer: PointerInput) -> Point {
        Point::new(pointer.client_x - self.left, pointer.client_y - self.top)
    }

    /// The canvas dimensions of this frame.
    pub fn size(&self) -> CanvasSize {
        CanvasSize::new(self.width, self.height)
    }
}

/// How the active gesture mutates its button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    Drag,
    Resize(ResizeEdge),
}

/// One pointer-down-to-pointer-up interaction with a single button.
#[derive(Debug, Clone)]
pub struct Gesture {
    pub button_id: Uuid,
    pub kind: GestureKind,
    /// Pointer position relative to the button's top-left at gesture start,
    /// in the rendered coordinate space. Reused for every move event so the
    /// grabbed point stays under the pointer.
    pub grab_offset: Point,
}

/// State machine over the active gesture. At most one gesture exists at a
/// time; a second pointer-down while one is active is ignored (multi-touch
/// manipulation of distinct buttons is an unsupported input mode).
#[derive(Debug, Default)]
pub struct GestureTracker {
    active: Option<Gesture>,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn active(&self) -> Option<&Gesture> {
        self.active.as_ref()
    }

    /// Starts a gesture on `button`, classifying drag vs. resize from the
    /// pointer's position within the button. The kind is fixed for the
    /// gesture's duration. Returns `None` if a gesture is already active.
    pub fn begin(&mut self, button: &ChartButton, local: Point) -> Option<GestureKind> {
        if self.active.is_some() {
            return None;
        }
        let kind = match detect_resize_edge(local, button.width, button.height, RESIZE_EDGE_TOLERANCE)
        {
            Some(edge) => GestureKind::Resize(edge),
            None => GestureKind::Drag,
        };
        self.active = Some(Gesture {
            button_id: button.id,
            kind,
            grab_offset: local,
        });
        Some(kind)
    }

    /// Computes the active button's new rectangle for a move event.
    ///
    /// Returns `None` when no gesture is active or the button id is no
    /// longer present in the list; the move is then simply skipped.
    pub fn update(
        &self,
        pointer: PointerInput,
        frame: &CanvasFrame,
        buttons: &[ChartButton],
    ) -> Option<(Uuid, Rect)> {
        let gesture = self.active.as_ref()?;
        let button = buttons.iter().find(|b| b.id == gesture.button_id)?;
        let local = frame.to_local(pointer);
        let canvas = frame.size();

        let rect = match gesture.kind {
            GestureKind::Drag => {
                let position =
                    drag_position(local, gesture.grab_offset, canvas, button.width, button.height);
                Rect::new(position.x, position.y, button.width, button.height)
            }
            GestureKind::Resize(edge) => resize_rect(edge, local, button.rect(), canvas),
        };

        Some((gesture.button_id, rect))
    }

    /// Ends the active gesture and returns it. Safe to call from any exit
    /// transition, including when already idle.
    pub fn end(&mut self) -> Option<Gesture> {
        self.active.take()
    }
}
