#![forbid(unsafe_code)]

//! Uniform cell grid for widget placement.
//!
//! A `GridLayout` assigns widgets to `(column, row)` cells. Each column is as
//! wide as its widest widget and each row as tall as its tallest one; widgets
//! keep their own size and are aligned inside their cell slot.
//!
//! The grid grows down and to the right from its top-left anchor: after a
//! pass, the layout's own rect keeps the top edge it had before the pass.
//!
//! # Example
//!
//! ```
//! use cellgrid_core::{Rect, WidgetArena};
//! use cellgrid_layout::grid::GridLayout;
//! use cellgrid_layout::{HorizontalAlign, VerticalAlign};
//!
//! let mut widgets = WidgetArena::new();
//! let a = widgets.insert(Rect::from_size(100.0, 50.0));
//! let b = widgets.insert(Rect::from_size(75.0, 35.0));
//!
//! let mut grid = GridLayout::new(2, 1)
//!     .horizontal_spacing(20.0)
//!     .align_horizontal(HorizontalAlign::Left)
//!     .align_vertical(VerticalAlign::Top);
//! grid.add_widget(a, 0, 0);
//! grid.add_widget(b, 1, 0);
//! grid.do_layout(&mut widgets);
//!
//! assert_eq!(widgets[b].left(), 120.0);
//! assert_eq!(grid.rect().width, 195.0);
//! ```

use cellgrid_core::{Rect, Widget, WidgetArena, WidgetId};
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

use crate::align::{HorizontalAlign, Placement, VerticalAlign};
use crate::config::GridConfig;
use crate::error::GridError;

/// A `(column, row)` grid coordinate, both 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub column: usize,
    pub row: usize,
}

impl Cell {
    #[inline]
    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }
}

/// Column widths and row heights from one measuring pass.
#[derive(Debug, Clone, PartialEq)]
pub struct GridMetrics {
    column_widths: Vec<f64>,
    row_heights: Vec<f64>,
    width: f64,
    height: f64,
}

impl GridMetrics {
    /// Widest widget in each column (0 for empty columns).
    pub fn column_widths(&self) -> &[f64] {
        &self.column_widths
    }

    /// Tallest widget in each row (0 for empty rows).
    pub fn row_heights(&self) -> &[f64] {
        &self.row_heights
    }

    /// Width of a column, or 0 when out of range.
    #[inline]
    pub fn column_width(&self, column: usize) -> f64 {
        self.column_widths.get(column).copied().unwrap_or(0.0)
    }

    /// Height of a row, or 0 when out of range.
    #[inline]
    pub fn row_height(&self, row: usize) -> f64 {
        self.row_heights.get(row).copied().unwrap_or(0.0)
    }

    /// Total width including one gap between each pair of columns.
    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Total height including one gap between each pair of rows.
    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }
}

/// Live widgets bucketed by row, each tagged with its assigned column.
type RowBuckets = Vec<Vec<(WidgetId, usize)>>;

/// Gaps are finite and non-negative; a zero gap count times infinity is NaN.
#[inline]
fn sanitize_spacing(spacing: f64) -> f64 {
    if spacing.is_finite() {
        spacing.max(0.0)
    } else {
        0.0
    }
}

/// A grid of cells holding widgets.
#[derive(Debug, Clone)]
pub struct GridLayout {
    rect: Rect,
    column_count: usize,
    row_count: usize,
    horizontal_spacing: f64,
    vertical_spacing: f64,
    align_horizontal: HorizontalAlign,
    align_vertical: VerticalAlign,
    placement: Placement,
    /// Insertion-ordered; re-assigning a widget keeps its original position.
    cells: IndexMap<WidgetId, Cell, FxBuildHasher>,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl GridLayout {
    /// Create an empty grid at the origin.
    ///
    /// Zero counts are raised to 1; use [`Self::from_config`] to reject them.
    #[must_use]
    pub fn new(column_count: usize, row_count: usize) -> Self {
        Self {
            rect: Rect::ZERO,
            column_count: column_count.max(1),
            row_count: row_count.max(1),
            horizontal_spacing: 0.0,
            vertical_spacing: 0.0,
            align_horizontal: HorizontalAlign::default(),
            align_vertical: VerticalAlign::default(),
            placement: Placement::default(),
            cells: IndexMap::default(),
        }
    }

    /// Create a grid from a validated configuration.
    pub fn from_config(config: &GridConfig) -> Result<Self, GridError> {
        config.validate()?;
        Ok(Self::new(config.column_count, config.row_count)
            .at(config.x, config.y)
            .horizontal_spacing(config.horizontal_spacing)
            .vertical_spacing(config.vertical_spacing)
            .align_horizontal(config.align_horizontal)
            .align_vertical(config.align_vertical)
            .placement(config.placement))
    }

    /// Place the (still empty) grid with its bottom-left corner at `(x, y)`.
    #[must_use]
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.rect = Rect::new(x, y, 0.0, 0.0);
        self
    }

    /// Set the gap between columns. Negative and non-finite values become 0.
    #[must_use]
    pub fn horizontal_spacing(mut self, spacing: f64) -> Self {
        self.set_horizontal_spacing(spacing);
        self
    }

    /// Set the gap between rows. Negative and non-finite values become 0.
    #[must_use]
    pub fn vertical_spacing(mut self, spacing: f64) -> Self {
        self.set_vertical_spacing(spacing);
        self
    }

    /// Set the same gap between rows and between columns.
    #[must_use]
    pub fn spacing(self, spacing: f64) -> Self {
        self.horizontal_spacing(spacing).vertical_spacing(spacing)
    }

    #[must_use]
    pub fn align_horizontal(mut self, align: HorizontalAlign) -> Self {
        self.align_horizontal = align;
        self
    }

    #[must_use]
    pub fn align_vertical(mut self, align: VerticalAlign) -> Self {
        self.align_vertical = align;
        self
    }

    #[must_use]
    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    // --- accessors ---

    /// Current bounds, as computed by the last pass or set by the parent.
    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    #[inline]
    pub fn column_count(&self) -> usize {
        self.column_count
    }

    #[inline]
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    #[inline]
    pub fn get_horizontal_spacing(&self) -> f64 {
        self.horizontal_spacing
    }

    #[inline]
    pub fn get_vertical_spacing(&self) -> f64 {
        self.vertical_spacing
    }

    #[inline]
    pub fn get_align_horizontal(&self) -> HorizontalAlign {
        self.align_horizontal
    }

    #[inline]
    pub fn get_align_vertical(&self) -> VerticalAlign {
        self.align_vertical
    }

    #[inline]
    pub fn get_placement(&self) -> Placement {
        self.placement
    }

    // --- mutation ---

    /// Move or resize the grid. The next pass re-anchors on the new top-left.
    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    /// Change the column count (zero is raised to 1).
    ///
    /// Existing assignments are kept; shrinking can leave some out of range.
    pub fn set_column_count(&mut self, column_count: usize) {
        self.column_count = column_count.max(1);
    }

    /// Change the row count (zero is raised to 1).
    pub fn set_row_count(&mut self, row_count: usize) {
        self.row_count = row_count.max(1);
    }

    pub fn set_horizontal_spacing(&mut self, spacing: f64) {
        self.horizontal_spacing = sanitize_spacing(spacing);
    }

    pub fn set_vertical_spacing(&mut self, spacing: f64) {
        self.vertical_spacing = sanitize_spacing(spacing);
    }

    pub fn set_align_horizontal(&mut self, align: HorizontalAlign) {
        self.align_horizontal = align;
    }

    pub fn set_align_vertical(&mut self, align: VerticalAlign) {
        self.align_vertical = align;
    }

    pub fn set_placement(&mut self, placement: Placement) {
        self.placement = placement;
    }

    /// Assign `id` to `(column, row)`, returning its previous cell.
    ///
    /// A widget occupies at most one cell: adding it again moves it. The cell
    /// is not checked here; [`Self::do_layout`] panics on cells outside the
    /// grid. Use [`Self::try_add_widget`] to check up front.
    pub fn add_widget(&mut self, id: WidgetId, column: usize, row: usize) -> Option<Cell> {
        self.cells.insert(id, Cell::new(column, row))
    }

    /// Like [`Self::add_widget`], but rejects cells outside the grid.
    pub fn try_add_widget(
        &mut self,
        id: WidgetId,
        column: usize,
        row: usize,
    ) -> Result<Option<Cell>, GridError> {
        self.check_cell(id, Cell::new(column, row))?;
        Ok(self.add_widget(id, column, row))
    }

    /// Drop a widget's assignment, keeping the order of the others.
    pub fn remove_widget(&mut self, id: WidgetId) -> Option<Cell> {
        self.cells.shift_remove(&id)
    }

    /// Drop every assignment.
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Cell currently assigned to `id`.
    pub fn cell_of(&self, id: WidgetId) -> Option<Cell> {
        self.cells.get(&id).copied()
    }

    /// Number of assigned widgets.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Assigned widgets in insertion order.
    pub fn children(&self) -> impl Iterator<Item = (WidgetId, Cell)> + '_ {
        self.cells.iter().map(|(id, cell)| (*id, *cell))
    }

    /// Check every assignment against the current column and row counts.
    pub fn check_bounds(&self) -> Result<(), GridError> {
        self.cells
            .iter()
            .try_for_each(|(id, cell)| self.check_cell(*id, *cell))
    }

    fn check_cell(&self, id: WidgetId, cell: Cell) -> Result<(), GridError> {
        if cell.column < self.column_count && cell.row < self.row_count {
            Ok(())
        } else {
            Err(GridError::CellOutOfBounds {
                id,
                column: cell.column,
                row: cell.row,
                column_count: self.column_count,
                row_count: self.row_count,
            })
        }
    }

    // --- layout ---

    /// Measure column widths and row heights from the widgets' natural sizes.
    ///
    /// # Panics
    ///
    /// Panics if a live widget is assigned outside the grid.
    pub fn metrics<W: Widget>(&self, widgets: &WidgetArena<W>) -> GridMetrics {
        self.measure(widgets).0
    }

    fn measure<W: Widget>(&self, widgets: &WidgetArena<W>) -> (GridMetrics, RowBuckets) {
        let mut column_widths = vec![0.0_f64; self.column_count];
        let mut row_heights = vec![0.0_f64; self.row_count];
        let mut rows: RowBuckets = vec![Vec::new(); self.row_count];

        for (&id, &cell) in &self.cells {
            let Some(widget) = widgets.get(id) else {
                #[cfg(feature = "tracing")]
                tracing::debug!(?id, "skipping grid child no longer in the arena");
                continue;
            };
            if let Err(err) = self.check_cell(id, cell) {
                panic!("{err}");
            }
            column_widths[cell.column] = column_widths[cell.column].max(widget.width());
            row_heights[cell.row] = row_heights[cell.row].max(widget.height());
            rows[cell.row].push((id, cell.column));
        }

        let width = column_widths.iter().sum::<f64>()
            + (self.column_count - 1) as f64 * self.horizontal_spacing;
        let height =
            row_heights.iter().sum::<f64>() + (self.row_count - 1) as f64 * self.vertical_spacing;

        let metrics = GridMetrics {
            column_widths,
            row_heights,
            width,
            height,
        };
        (metrics, rows)
    }

    /// Recompute every child's rect and the grid's own rect.
    ///
    /// Rows are walked top to bottom from the grid's current top edge, and
    /// each slot is its column width (or row height) plus one spacing step.
    /// A child's rect is only written when it actually moves. With no live
    /// children the grid collapses to a zero-size rect at its bottom-left.
    ///
    /// # Panics
    ///
    /// Panics if a live widget is assigned outside the grid, or, with
    /// [`Placement::InsertionOrder`], if a row holds more widgets than the
    /// grid has columns.
    pub fn do_layout<W: Widget>(&mut self, widgets: &mut WidgetArena<W>) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "grid_layout",
            columns = self.column_count,
            rows = self.row_count,
            children = self.cells.len(),
            placement = self.placement.as_str(),
        )
        .entered();

        let initial_top = self.rect.top();
        let initial_left = self.rect.left();

        let (metrics, rows) = self.measure(widgets);
        if rows.iter().all(Vec::is_empty) {
            self.rect = Rect::new(initial_left, self.rect.bottom(), 0.0, 0.0);
            return;
        }

        // Left edge of every column slot, relative to the grid's left edge.
        let column_offsets: Vec<f64> = metrics
            .column_widths
            .iter()
            .scan(0.0_f64, |offset, width| {
                let start = *offset;
                *offset += width + self.horizontal_spacing;
                Some(start)
            })
            .collect();

        #[cfg_attr(
            not(feature = "tracing"),
            allow(unused_variables, unused_assignments)
        )]
        let mut moved = 0usize;
        let mut start_y = initial_top;

        for (row, members) in rows.iter().enumerate() {
            let slot_height = metrics.row_heights[row] + self.vertical_spacing;
            let center_y = start_y - (slot_height / 2.0).floor();
            let mut cursor_x = initial_left;

            for (position, &(id, column)) in members.iter().enumerate() {
                let slot_column = match self.placement {
                    Placement::Cell => column,
                    Placement::InsertionOrder => position,
                };
                let Some(&column_width) = metrics.column_widths.get(slot_column) else {
                    panic!(
                        "row {row} holds more widgets than the grid's {} columns",
                        self.column_count
                    );
                };
                let slot_width = column_width + self.horizontal_spacing;
                let start_x = match self.placement {
                    Placement::Cell => initial_left + column_offsets[column],
                    Placement::InsertionOrder => cursor_x,
                };
                let center_x = start_x + (slot_width / 2.0).floor();

                if let Some(widget) = widgets.get_mut(id) {
                    let current = widget.rect();
                    let placed = match self.align_vertical {
                        VerticalAlign::Top => current.align_top(start_y),
                        VerticalAlign::Bottom => current.align_bottom(start_y - slot_height),
                        VerticalAlign::Center => current.align_center_y(center_y),
                    };
                    let placed = match self.align_horizontal {
                        HorizontalAlign::Left => placed.align_left(start_x),
                        HorizontalAlign::Right => placed.align_right(start_x + slot_width),
                        HorizontalAlign::Center => placed.align_center_x(center_x),
                    };
                    if placed != current {
                        widget.set_rect(placed);
                        moved += 1;
                    }
                }
                cursor_x += slot_width;
            }
            start_y -= slot_height;
        }

        self.rect = Rect::new(
            initial_left,
            initial_top - metrics.height,
            metrics.width,
            metrics.height,
        );

        #[cfg(feature = "tracing")]
        tracing::debug!(
            width = metrics.width,
            height = metrics.height,
            moved,
            "grid layout complete"
        );
    }
}

impl<W: Widget> crate::Layout<W> for GridLayout {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn set_rect(&mut self, rect: Rect) {
        GridLayout::set_rect(self, rect);
    }

    fn do_layout(&mut self, widgets: &mut WidgetArena<W>) {
        GridLayout::do_layout(self, widgets);
    }
}
