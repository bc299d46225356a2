//! Chart viewing logic: click routing, legend actions, and fit scaling.
//!
//! The rendering itself lives outside this crate; these are the decisions
//! the viewer needs made for it.

use std::collections::HashMap;

use rangekit_core::geometry::CanvasSize;

use crate::catalog::{RangeCatalog, RangeEntry};
use crate::model::{ButtonKind, ChartButton};

/// What activating a button in the viewer should do.
#[derive(Debug, Clone, PartialEq)]
pub enum ClickOutcome<'a> {
    /// Leave the chart (exit buttons, and labels which have no action).
    ExitChart,
    /// Show the linked range's matrix.
    ShowRange(&'a RangeEntry),
    /// The linked range no longer exists in the catalog.
    MissingRange,
}

/// Routes a button activation.
pub fn resolve_click<'a>(button: &ChartButton, catalog: &'a RangeCatalog) -> ClickOutcome<'a> {
    match button.kind {
        ButtonKind::Exit | ButtonKind::Label => ClickOutcome::ExitChart,
        ButtonKind::Normal => match catalog.get(&button.linked_item) {
            Some(range) => ClickOutcome::ShowRange(range),
            None => ClickOutcome::MissingRange,
        },
    }
}

/// The action ids a range actually assigns to hands, in no particular
/// order. The legend shows exactly these.
pub fn used_action_ids(range: &RangeEntry) -> Vec<&str> {
    let mut ids: Vec<&str> = range.hands.values().map(String::as_str).collect();
    ids.sort_unstable();
    ids.dedup();
    ids
}

/// The legend label for an action: the button's override when one exists,
/// the action's own name otherwise.
pub fn legend_label<'a>(
    action_id: &str,
    action_name: &'a str,
    overrides: &'a HashMap<String, String>,
) -> &'a str {
    overrides
        .get(action_id)
        .map(String::as_str)
        .unwrap_or(action_name)
}

/// Scale factor that fits a chart canvas into 95% of the viewport while
/// preserving aspect ratio, capped at 1:1. Used by the mobile viewer.
pub fn fit_scale(canvas: CanvasSize, viewport: CanvasSize) -> f64 {
    if canvas.width <= 0.0 || canvas.height <= 0.0 {
        return 1.0;
    }
    let scale_x = viewport.width * 0.95 / canvas.width;
    let scale_y = viewport.height * 0.95 / canvas.height;
    scale_x.min(scale_y).min(1.0)
}
