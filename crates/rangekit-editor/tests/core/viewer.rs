use std::collections::HashMap;

use rangekit_core::geometry::CanvasSize;
use rangekit_editor::catalog::{RangeCatalog, RangeEntry, RangeFolder};
use rangekit_editor::model::{ButtonKind, ChartButton, LABEL_ONLY};
use rangekit_editor::viewer::{fit_scale, legend_label, resolve_click, used_action_ids, ClickOutcome};

fn catalog_with_range() -> RangeCatalog {
    let mut range = RangeEntry::new("r1", "UTG open");
    range.hands.insert("AA".to_string(), "raise".to_string());
    range.hands.insert("AKs".to_string(), "raise".to_string());
    range.hands.insert("A5s".to_string(), "mix".to_string());
    RangeCatalog::new(vec![RangeFolder {
        id: "f1".to_string(),
        name: "Opening".to_string(),
        ranges: vec![range],
    }])
}

#[test]
fn test_exit_and_label_buttons_leave_the_chart() {
    let catalog = catalog_with_range();
    assert_eq!(
        resolve_click(&ChartButton::exit_button(), &catalog),
        ClickOutcome::ExitChart
    );
    assert_eq!(
        resolve_click(&ChartButton::new(ButtonKind::Label, LABEL_ONLY), &catalog),
        ClickOutcome::ExitChart
    );
}

#[test]
fn test_normal_button_shows_linked_range() {
    let catalog = catalog_with_range();
    let button = ChartButton::new(ButtonKind::Normal, "r1");
    match resolve_click(&button, &catalog) {
        ClickOutcome::ShowRange(range) => assert_eq!(range.name, "UTG open"),
        other => panic!("expected ShowRange, got {other:?}"),
    }
}

#[test]
fn test_dangling_link_is_reported() {
    let catalog = catalog_with_range();
    let button = ChartButton::new(ButtonKind::Normal, "deleted-range");
    assert_eq!(resolve_click(&button, &catalog), ClickOutcome::MissingRange);
}

#[test]
fn test_used_action_ids_deduplicates() {
    let catalog = catalog_with_range();
    let range = catalog.get("r1").unwrap();
    assert_eq!(used_action_ids(range), vec!["mix", "raise"]);
}

#[test]
fn test_legend_label_prefers_override() {
    let mut overrides = HashMap::new();
    overrides.insert("raise".to_string(), "Open".to_string());
    assert_eq!(legend_label("raise", "Raise", &overrides), "Open");
    assert_eq!(legend_label("call", "Call", &overrides), "Call");
}

#[test]
fn test_fit_scale() {
    // Chart wider than the viewport: scaled down to 95% of viewport width.
    let scale = fit_scale(CanvasSize::new(800.0, 500.0), CanvasSize::new(400.0, 800.0));
    assert!((scale - 0.475).abs() < 1e-9);

    // Chart already fits: never scaled up past 1:1.
    let scale = fit_scale(CanvasSize::new(200.0, 100.0), CanvasSize::new(1920.0, 1080.0));
    assert_eq!(scale, 1.0);
}
