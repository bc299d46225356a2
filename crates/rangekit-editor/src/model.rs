//! Chart model: buttons, kinds, and stored charts.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use rangekit_core::constants::{
    DEFAULT_BUTTON_HEIGHT, DEFAULT_BUTTON_WIDTH, DEFAULT_BUTTON_X, DEFAULT_BUTTON_Y,
    DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH,
};
use rangekit_core::geometry::Rect;

/// Sentinel stored in `linked_item` for label-only buttons.
pub const LABEL_ONLY: &str = "label-only";

/// What a button does when activated in the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonKind {
    /// Linked to a hand range from the catalog.
    Normal,
    /// Text-only, no linked content.
    Label,
    /// Navigates back out of the chart.
    Exit,
}

/// Text color when the adaptive font is turned off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontColor {
    #[default]
    White,
    Black,
}

/// A placeable button on the chart canvas.
///
/// Position and size are canvas-local pixels and always satisfy the canvas
/// invariant after any mutation routed through the editor: non-negative
/// position, minimum size, fully inside the canvas. The display attributes
/// are carried through untouched by the geometry engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartButton {
    pub id: Uuid,
    pub name: String,
    /// CSS color of the button face.
    pub color: String,
    /// Range id for `Normal` buttons, [`LABEL_ONLY`] for labels,
    /// empty for exit buttons.
    pub linked_item: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub kind: ButtonKind,
    #[serde(default = "default_true")]
    pub font_adaptive: bool,
    #[serde(default = "default_font_size")]
    pub font_size: f64,
    #[serde(default)]
    pub font_color: FontColor,
    #[serde(default)]
    pub show_legend: bool,
    #[serde(default)]
    pub legend_overrides: HashMap<String, String>,
}

fn default_true() -> bool {
    true
}

fn default_font_size() -> f64 {
    16.0
}

impl ChartButton {
    /// Creates a button with default geometry and styling at the standard
    /// spawn position.
    pub fn new(kind: ButtonKind, linked_item: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: "New".to_string(),
            color: "#60A5FA".to_string(),
            linked_item: linked_item.into(),
            x: DEFAULT_BUTTON_X,
            y: DEFAULT_BUTTON_Y,
            width: DEFAULT_BUTTON_WIDTH,
            height: DEFAULT_BUTTON_HEIGHT,
            kind,
            font_adaptive: true,
            font_size: default_font_size(),
            font_color: FontColor::White,
            show_legend: false,
            legend_overrides: HashMap::new(),
        }
    }

    /// The exit button seeded into every new chart.
    pub fn exit_button() -> Self {
        Self {
            name: "Exit".to_string(),
            color: "#EF4444".to_string(),
            linked_item: String::new(),
            x: 10.0,
            y: 10.0,
            width: 150.0,
            height: 40.0,
            kind: ButtonKind::Exit,
            ..Self::new(ButtonKind::Exit, "")
        }
    }

    /// The button's bounding rectangle.
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Overwrites position and size from a rectangle.
    pub fn set_rect(&mut self, rect: Rect) {
        self.x = rect.x;
        self.y = rect.y;
        self.width = rect.width;
        self.height = rect.height;
    }
}

/// A persisted chart: named button layout plus canvas dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredChart {
    pub id: Uuid,
    pub name: String,
    pub buttons: Vec<ChartButton>,
    #[serde(default = "default_canvas_width")]
    pub canvas_width: f64,
    #[serde(default = "default_canvas_height")]
    pub canvas_height: f64,
}

fn default_canvas_width() -> f64 {
    DEFAULT_CANVAS_WIDTH
}

fn default_canvas_height() -> f64 {
    DEFAULT_CANVAS_HEIGHT
}

impl StoredChart {
    /// Creates a chart with default canvas dimensions and a single exit
    /// button.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            buttons: vec![ChartButton::exit_button()],
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
        }
    }
}
