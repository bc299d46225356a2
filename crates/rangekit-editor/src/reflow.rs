//! Canvas reflow: re-clamping every button after a canvas dimension change.

use rangekit_core::geometry::CanvasSize;

use crate::geometry::clamp_to_canvas;
use crate::model::ChartButton;

/// Re-clamps every button into the new canvas bounds, independently.
///
/// Size is preserved whenever the canvas is large enough; buttons that no
/// longer fit are moved first and shrunk only if moving is not enough. No
/// button is ever dropped.
///
/// Returns `None` when nothing actually moved, so callers can skip update
/// notifications; applying the policy twice without a dimension change in
/// between is therefore always a no-op the second time.
pub fn reflow_buttons(buttons: &[ChartButton], canvas: CanvasSize) -> Option<Vec<ChartButton>> {
    let mut changed = false;
    let reflowed = buttons
        .iter()
        .map(|button| {
            let clamped = clamp_to_canvas(button.rect(), canvas);
            if clamped == button.rect() {
                button.clone()
            } else {
                changed = true;
                let mut moved = button.clone();
                moved.set_rect(clamped);
                moved
            }
        })
        .collect();

    changed.then_some(reflowed)
}
