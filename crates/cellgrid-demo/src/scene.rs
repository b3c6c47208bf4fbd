#![forbid(unsafe_code)]

//! The nine-button demo scene.
//!
//! Nine flat buttons of assorted sizes go into a 3x3 grid, which an anchor
//! pins 300 units from the left and 100 from the bottom of an 800x700
//! window. The last row deliberately puts two buttons into cell (1, 2) and
//! leaves cell (2, 2) empty.

use cellgrid_core::{Rect, Widget, WidgetArena, WidgetId};
use cellgrid_layout::{
    GridConfig, GridError, GridLayout, GridMetrics, HorizontalAlign, VerticalAlign,
};
use serde::Serialize;
use tracing::{debug, info};

use crate::anchor::{Anchor, AnchorX, AnchorY};

/// Default flat-button size.
pub const BUTTON_WIDTH: f64 = 100.0;
pub const BUTTON_HEIGHT: f64 = 50.0;

/// A labelled button with a fixed natural size.
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    label: String,
    rect: Rect,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            rect: Rect::from_size(BUTTON_WIDTH, BUTTON_HEIGHT),
        }
    }

    #[must_use]
    pub fn with_width(mut self, width: f64) -> Self {
        self.rect = self.rect.resize(Some(width), None);
        self
    }

    #[must_use]
    pub fn with_height(mut self, height: f64) -> Self {
        self.rect = self.rect.resize(None, Some(height));
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Widget for Button {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }
}

/// Demo grid settings: 3x3 cells with centered widgets 20 units apart.
pub fn example_config() -> GridConfig {
    GridConfig {
        column_count: 3,
        row_count: 3,
        align_horizontal: HorizontalAlign::from_name_lenient("c"),
        align_vertical: VerticalAlign::from_name_lenient("c"),
        horizontal_spacing: 20.0,
        vertical_spacing: 20.0,
        ..GridConfig::default()
    }
}

/// Buttons with their cells, in the order they are added to the grid.
fn example_buttons() -> Vec<(Button, usize, usize)> {
    vec![
        (Button::new("Test 1").with_width(100.0).with_height(50.0), 0, 0),
        (Button::new("Test 2").with_width(75.0).with_height(35.0), 1, 0),
        (Button::new("Test 3").with_width(150.0).with_height(25.0), 2, 0),
        (Button::new("Test 4").with_width(150.0), 0, 1),
        (Button::new("Test 5").with_height(120.0), 1, 1),
        (Button::new("Test 6").with_width(50.0), 2, 1),
        (Button::new("Test 7").with_height(150.0), 0, 2),
        (Button::new("Test 8").with_height(150.0), 1, 2),
        (Button::new("Test 9").with_height(200.0), 1, 2),
    ]
}

/// Window, anchor, grid, and the buttons it places.
#[derive(Debug, Clone)]
pub struct Scene {
    window: Rect,
    anchor: Anchor,
    grid: GridLayout,
    widgets: WidgetArena<Button>,
    order: Vec<WidgetId>,
}

impl Scene {
    /// Build the demo scene with the given grid settings.
    pub fn example(config: &GridConfig) -> Result<Self, GridError> {
        let mut grid = GridLayout::from_config(config)?;
        let mut widgets = WidgetArena::with_capacity(9);
        let mut order = Vec::with_capacity(9);
        for (button, column, row) in example_buttons() {
            let id = widgets.insert(button);
            grid.try_add_widget(id, column, row)?;
            order.push(id);
        }
        Ok(Self {
            window: Rect::from_size(800.0, 700.0),
            anchor: Anchor::new(AnchorX::Left, AnchorY::Bottom, 300.0, 100.0),
            grid,
            widgets,
            order,
        })
    }

    /// Run anchor + grid passes until nothing moves. Returns the pass count.
    ///
    /// The anchor positions the grid from its last computed size, so the
    /// first pass sizes the grid and the second moves it into place.
    pub fn settle(&mut self, max_passes: usize) -> usize {
        for pass in 1..=max_passes {
            let before = self.rects();
            let grid_before = self.grid.rect();

            let anchored = self.anchor.place(self.window, self.grid.rect());
            self.grid.set_rect(anchored);
            self.grid.do_layout(&mut self.widgets);

            if self.grid.rect() == grid_before && self.rects() == before {
                debug!(pass, "scene settled");
                return pass;
            }
        }
        info!(max_passes, "scene did not settle");
        max_passes
    }

    pub fn grid(&self) -> &GridLayout {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut GridLayout {
        &mut self.grid
    }

    /// Column widths and row heights for the current buttons.
    pub fn metrics(&self) -> GridMetrics {
        self.grid.metrics(&self.widgets)
    }

    /// Buttons in the order they were added.
    pub fn buttons(&self) -> impl Iterator<Item = (WidgetId, &Button)> + '_ {
        self.order.iter().map(|id| (*id, &self.widgets[*id]))
    }

    fn rects(&self) -> Vec<Rect> {
        self.order.iter().map(|id| self.widgets[*id].rect()).collect()
    }

    /// Serializable view of the current placement.
    pub fn snapshot(&self, passes: usize) -> SceneSnapshot {
        let buttons = self
            .buttons()
            .map(|(id, button)| {
                let cell = self.grid.cell_of(id);
                ButtonSnapshot {
                    label: button.label().to_string(),
                    column: cell.map(|c| c.column),
                    row: cell.map(|c| c.row),
                    rect: button.rect(),
                }
            })
            .collect();
        SceneSnapshot {
            passes,
            placement: self.grid.get_placement().as_str(),
            grid: self.grid.rect(),
            buttons,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ButtonSnapshot {
    pub label: String,
    pub column: Option<usize>,
    pub row: Option<usize>,
    pub rect: Rect,
}

#[derive(Debug, Clone, Serialize)]
pub struct SceneSnapshot {
    pub passes: usize,
    pub placement: &'static str,
    pub grid: Rect,
    pub buttons: Vec<ButtonSnapshot>,
}

impl SceneSnapshot {
    /// Plain-text table, one button per line.
    pub fn to_table(&self) -> String {
        let mut out = format!(
            "grid ({}): x={} y={} w={} h={} after {} passes\n",
            self.placement,
            self.grid.x,
            self.grid.y,
            self.grid.width,
            self.grid.height,
            self.passes
        );
        for b in &self.buttons {
            let cell = match (b.column, b.row) {
                (Some(c), Some(r)) => format!("({c}, {r})"),
                _ => "-".to_string(),
            };
            out.push_str(&format!(
                "{:<8} {:<8} x={:<7} y={:<7} w={:<5} h={}\n",
                b.label, cell, b.rect.x, b.rect.y, b.rect.width, b.rect.height
            ));
        }
        out
    }
}
