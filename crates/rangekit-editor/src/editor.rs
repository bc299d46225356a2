//! Chart editor session: button lifecycle, gestures, and canvas dimensions.
//!
//! The editor owns a value copy of the chart being edited. Buttons are held
//! behind an `Arc` and every mutation swaps in a whole new list, so the
//! presentation layer detects change with a pointer comparison instead of
//! diffing. Button edits happen on a draft copy and reach the list only on
//! save.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use rangekit_core::constants::{
    DUPLICATE_OFFSET, MAXIMIZE_HEIGHT_FACTOR, MAXIMIZE_WIDTH_FACTOR, RESIZE_EDGE_TOLERANCE,
};
use rangekit_core::error::ChartError;
use rangekit_core::geometry::{CanvasSize, Point};

use crate::catalog::RangeCatalog;
use crate::geometry::{clamp_to_canvas, detect_resize_edge};
use crate::gesture::{CanvasFrame, GestureKind, GestureTracker, PointerInput};
use crate::model::{ButtonKind, ChartButton, StoredChart, LABEL_ONLY};
use crate::reflow::reflow_buttons;

/// Switches a button between the range-linked and label kinds, keeping the
/// cross-field invariant on `linked_item`: labels carry the [`LABEL_ONLY`]
/// sentinel, range buttons the supplied default range id (empty when the
/// catalog has none). Exit buttons never change kind, and nothing can
/// become one.
pub fn change_kind(button: &mut ChartButton, kind: ButtonKind, default_range: Option<&str>) {
    if button.kind == ButtonKind::Exit || kind == ButtonKind::Exit {
        return;
    }
    button.linked_item = match kind {
        ButtonKind::Label => LABEL_ONLY.to_string(),
        ButtonKind::Normal => default_range.unwrap_or_default().to_string(),
        ButtonKind::Exit => unreachable!(),
    };
    button.kind = kind;
}

/// An open editing session for one chart.
#[derive(Debug)]
pub struct ChartEditor {
    chart_id: Uuid,
    chart_name: String,
    buttons: Arc<Vec<ChartButton>>,
    /// Ids present when the chart was opened; canceling an edit of any
    /// other button removes it (it was added this session).
    original_ids: HashSet<Uuid>,
    canvas: CanvasSize,
    editing: Option<ChartButton>,
    gesture: GestureTracker,
    catalog: RangeCatalog,
    is_modified: bool,
}

impl ChartEditor {
    /// Opens a chart for editing. The chart is value-copied in; the stored
    /// version is untouched until [`ChartEditor::to_stored`] hands a new
    /// record back to the storage collaborator.
    pub fn open(chart: StoredChart, catalog: RangeCatalog) -> Self {
        let canvas = CanvasSize::new(chart.canvas_width, chart.canvas_height).clamped();
        let original_ids = chart.buttons.iter().map(|b| b.id).collect();
        let buttons = match reflow_buttons(&chart.buttons, canvas) {
            Some(reflowed) => reflowed,
            None => chart.buttons,
        };
        Self {
            chart_id: chart.id,
            chart_name: chart.name,
            buttons: Arc::new(buttons),
            original_ids,
            canvas,
            editing: None,
            gesture: GestureTracker::new(),
            catalog,
            is_modified: false,
        }
    }

    pub fn chart_name(&self) -> &str {
        &self.chart_name
    }

    pub fn set_chart_name(&mut self, name: impl Into<String>) {
        self.chart_name = name.into();
        self.is_modified = true;
    }

    /// The current button list. The `Arc` is swapped on every mutation, so
    /// `Arc::ptr_eq` against a previously observed value detects change.
    pub fn buttons(&self) -> &Arc<Vec<ChartButton>> {
        &self.buttons
    }

    pub fn canvas_size(&self) -> CanvasSize {
        self.canvas
    }

    pub fn catalog(&self) -> &RangeCatalog {
        &self.catalog
    }

    pub fn is_modified(&self) -> bool {
        self.is_modified
    }

    fn commit_buttons(&mut self, buttons: Vec<ChartButton>) {
        self.buttons = Arc::new(buttons);
        self.is_modified = true;
    }

    // ---- Button lifecycle -------------------------------------------------

    /// Adds a button with default geometry and immediately begins editing
    /// it. The kind depends on the catalog: linked to the first available
    /// range when one exists, a plain label otherwise.
    pub fn add_button(&mut self) -> Uuid {
        let mut button = match self.catalog.first_range_id() {
            Some(range_id) => {
                let range_id = range_id.to_string();
                ChartButton::new(ButtonKind::Normal, range_id)
            }
            None => ChartButton::new(ButtonKind::Label, LABEL_ONLY),
        };
        // The spawn position assumes the default canvas; a smaller canvas
        // still gets the button in bounds.
        button.set_rect(clamp_to_canvas(button.rect(), self.canvas));
        let id = button.id;

        let mut next = self.buttons.as_ref().clone();
        next.push(button.clone());
        self.commit_buttons(next);
        self.editing = Some(button);
        debug!(button = %id, "added chart button");
        id
    }

    /// Begins editing an existing button via its settings control. This is
    /// the hit-test exclusion path: it never starts a gesture.
    pub fn open_settings(&mut self, id: Uuid) -> Result<(), ChartError> {
        let button = self
            .buttons
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or(ChartError::ButtonNotFound { id: id.to_string() })?;
        self.editing = Some(button);
        Ok(())
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// The draft being edited, if any. Edits through
    /// [`ChartEditor::editing_mut`] touch only the draft until save.
    pub fn editing(&self) -> Option<&ChartButton> {
        self.editing.as_ref()
    }

    pub fn editing_mut(&mut self) -> Option<&mut ChartButton> {
        self.editing.as_mut()
    }

    /// Commits the draft into the list, keyed by id. Width/height typed
    /// into the settings form pass through the same clamp as every other
    /// geometry mutation, so malformed input snaps instead of breaking the
    /// canvas invariant.
    pub fn save_button(&mut self) {
        let Some(mut draft) = self.editing.take() else {
            return;
        };
        draft.set_rect(clamp_to_canvas(draft.rect(), self.canvas));
        let mut next = self.buttons.as_ref().clone();
        if let Some(slot) = next.iter_mut().find(|b| b.id == draft.id) {
            *slot = draft;
            self.commit_buttons(next);
        }
    }

    /// Discards the draft. A button added this session (absent from the
    /// originally-loaded list) is removed entirely; a pre-existing button's
    /// list entry was never touched by the draft, so the list is left as it
    /// was before the edit began.
    pub fn cancel_button(&mut self) {
        let Some(draft) = self.editing.take() else {
            return;
        };
        if !self.original_ids.contains(&draft.id) {
            let mut next = self.buttons.as_ref().clone();
            next.retain(|b| b.id != draft.id);
            self.commit_buttons(next);
        }
    }

    /// Clones the draft (including its unsaved edits) under a new id,
    /// offset by (+10, +10) and clamped into the canvas, and appends it.
    /// Exits editing without committing the draft to the original button.
    pub fn duplicate_button(&mut self) -> Option<Uuid> {
        let draft = self.editing.take()?;
        let mut copy = draft;
        copy.id = Uuid::new_v4();
        copy.x += DUPLICATE_OFFSET;
        copy.y += DUPLICATE_OFFSET;
        copy.set_rect(clamp_to_canvas(copy.rect(), self.canvas));

        let id = copy.id;
        let mut next = self.buttons.as_ref().clone();
        next.push(copy);
        self.commit_buttons(next);
        Some(id)
    }

    /// Applies [`change_kind`] to the draft, using the catalog's first range
    /// as the default link target.
    pub fn set_editing_kind(&mut self, kind: ButtonKind) {
        let default_range = self.catalog.first_range_id().map(str::to_owned);
        if let Some(draft) = self.editing.as_mut() {
            change_kind(draft, kind, default_range.as_deref());
        }
    }

    /// Stores cleaned legend overrides on the draft: values are trimmed and
    /// empties dropped.
    pub fn set_legend_overrides(&mut self, overrides: HashMap<String, String>) {
        if let Some(draft) = self.editing.as_mut() {
            draft.legend_overrides = overrides
                .into_iter()
                .filter_map(|(action_id, label)| {
                    let label = label.trim().to_string();
                    (!label.is_empty()).then_some((action_id, label))
                })
                .collect();
        }
    }

    // ---- Gestures ---------------------------------------------------------

    /// Pointer-down on a button body. Classifies the gesture from the
    /// pointer's position within the button and starts tracking. Returns
    /// `None` for an unknown button or while another gesture is active.
    pub fn pointer_down(&mut self, id: Uuid, local: Point) -> Option<GestureKind> {
        let buttons = Arc::clone(&self.buttons);
        let button = buttons.iter().find(|b| b.id == id)?;
        self.gesture.begin(button, local)
    }

    /// Pointer-move while a gesture is active. Overwrites the active
    /// button's geometry; all other buttons are untouched. Returns whether
    /// the list changed.
    pub fn pointer_move(&mut self, pointer: PointerInput, frame: &CanvasFrame) -> bool {
        let Some((id, rect)) = self.gesture.update(pointer, frame, &self.buttons) else {
            return false;
        };
        let mut next = self.buttons.as_ref().clone();
        match next.iter_mut().find(|b| b.id == id) {
            Some(button) => button.set_rect(rect),
            None => return false,
        }
        self.commit_buttons(next);
        true
    }

    /// Ends the active gesture. Pointer-up, touch-end, and touch-cancel all
    /// land here, wherever in the document they occur.
    pub fn pointer_up(&mut self) {
        self.gesture.end();
    }

    pub fn gesture(&self) -> &GestureTracker {
        &self.gesture
    }

    /// Hover cursor for a pointer resting over a button: a resize cursor in
    /// the edge zones, a grab cursor in the interior. `None` while a gesture
    /// is in flight (the gesture owns the cursor then) or for unknown ids.
    pub fn cursor_hint(&self, id: Uuid, local: Point) -> Option<&'static str> {
        if self.gesture.is_active() {
            return None;
        }
        let button = self.buttons.iter().find(|b| b.id == id)?;
        Some(
            match detect_resize_edge(local, button.width, button.height, RESIZE_EDGE_TOLERANCE) {
                Some(edge) => edge.cursor(),
                None => "grab",
            },
        )
    }

    // ---- Canvas dimensions ------------------------------------------------

    /// Resizes the canvas, flooring both dimensions at the minimum, then
    /// reflows every button into the new bounds. NaN input (unparseable
    /// form fields) snaps to the minimum.
    pub fn resize_canvas(&mut self, width: f64, height: f64) {
        let canvas = CanvasSize::new(width, height).clamped();
        if canvas == self.canvas {
            return;
        }
        debug!(
            width = canvas.width,
            height = canvas.height,
            "canvas resized"
        );
        self.canvas = canvas;
        self.is_modified = true;
        if let Some(reflowed) = reflow_buttons(&self.buttons, canvas) {
            self.buttons = Arc::new(reflowed);
        }
    }

    /// Expands the canvas to the viewport: the full viewport in mobile
    /// layout, slightly inset (97% × 91%, rounded) on desktop so the canvas
    /// clears the surrounding chrome.
    pub fn maximize_canvas(&mut self, viewport: CanvasSize, mobile: bool) {
        if mobile {
            self.resize_canvas(viewport.width, viewport.height);
        } else {
            self.resize_canvas(
                (viewport.width * MAXIMIZE_WIDTH_FACTOR).round(),
                (viewport.height * MAXIMIZE_HEIGHT_FACTOR).round(),
            );
        }
    }

    // ---- Persistence ------------------------------------------------------

    /// The record handed back to the storage collaborator on save.
    pub fn to_stored(&self) -> StoredChart {
        StoredChart {
            id: self.chart_id,
            name: self.chart_name.clone(),
            buttons: self.buttons.as_ref().clone(),
            canvas_width: self.canvas.width,
            canvas_height: self.canvas.height,
        }
    }
}
