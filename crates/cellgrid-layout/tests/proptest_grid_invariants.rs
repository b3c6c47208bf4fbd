//! Property-based invariant tests for `GridLayout`.
//!
//! These hold for any grid shape, spacing, alignment, and cell occupancy:
//!
//! 1. Total size is the sum of track maxima plus one gap per adjacent pair.
//! 2. A second pass changes nothing.
//! 3. Widgets are moved, never resized.
//! 4. The grid's top-left anchor survives the pass.
//! 5. Left/top alignment puts each widget at its slot origin.
//! 6. Cell and insertion-order placement agree on rows filled left to right.
//! 7. Re-adding a widget never duplicates it.
//! 8. An empty grid collapses to zero size.

use cellgrid_core::{Rect, WidgetArena, WidgetId};
use cellgrid_layout::{GridLayout, HorizontalAlign, Placement, VerticalAlign};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
struct Scene {
    columns: usize,
    rows: usize,
    /// Row-major; `None` leaves the cell empty.
    sizes: Vec<Option<(f64, f64)>>,
}

fn scene_strategy() -> impl Strategy<Value = Scene> {
    (1usize..=5, 1usize..=5).prop_flat_map(|(columns, rows)| {
        let size = (0u16..=200, 0u16..=200).prop_map(|(w, h)| (f64::from(w), f64::from(h)));
        proptest::collection::vec(proptest::option::weighted(0.8, size), columns * rows)
            .prop_map(move |sizes| Scene {
                columns,
                rows,
                sizes,
            })
    })
}

fn full_scene_strategy() -> impl Strategy<Value = Scene> {
    scene_strategy().prop_map(|mut scene| {
        for size in &mut scene.sizes {
            size.get_or_insert((10.0, 10.0));
        }
        scene
    })
}

fn spacing() -> impl Strategy<Value = f64> {
    (0u8..=30).prop_map(f64::from)
}

fn horizontal_strategy() -> impl Strategy<Value = HorizontalAlign> {
    prop_oneof![
        Just(HorizontalAlign::Left),
        Just(HorizontalAlign::Center),
        Just(HorizontalAlign::Right),
    ]
}

fn vertical_strategy() -> impl Strategy<Value = VerticalAlign> {
    prop_oneof![
        Just(VerticalAlign::Top),
        Just(VerticalAlign::Center),
        Just(VerticalAlign::Bottom),
    ]
}

fn anchor() -> impl Strategy<Value = (f64, f64)> {
    (-500i16..=500, -500i16..=500).prop_map(|(x, y)| (f64::from(x), f64::from(y)))
}

/// Build the arena and add widgets row by row, left to right.
fn populate(
    scene: &Scene,
    grid: &mut GridLayout,
) -> (WidgetArena<Rect>, Vec<(WidgetId, usize, usize)>) {
    let mut widgets = WidgetArena::new();
    let mut placed = Vec::new();
    for row in 0..scene.rows {
        for col in 0..scene.columns {
            if let Some((w, h)) = scene.sizes[row * scene.columns + col] {
                let id = widgets.insert(Rect::from_size(w, h));
                grid.add_widget(id, col, row);
                placed.push((id, col, row));
            }
        }
    }
    (widgets, placed)
}

fn track_maxima(scene: &Scene) -> (Vec<f64>, Vec<f64>) {
    let mut widths = vec![0.0_f64; scene.columns];
    let mut heights = vec![0.0_f64; scene.rows];
    for row in 0..scene.rows {
        for col in 0..scene.columns {
            if let Some((w, h)) = scene.sizes[row * scene.columns + col] {
                widths[col] = widths[col].max(w);
                heights[row] = heights[row].max(h);
            }
        }
    }
    (widths, heights)
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Total size
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn total_size_is_tracks_plus_gaps(
        scene in scene_strategy(),
        hs in spacing(),
        vs in spacing(),
    ) {
        let mut grid = GridLayout::new(scene.columns, scene.rows)
            .horizontal_spacing(hs)
            .vertical_spacing(vs);
        let (mut widgets, placed) = populate(&scene, &mut grid);
        prop_assume!(!placed.is_empty());
        grid.do_layout(&mut widgets);

        let (widths, heights) = track_maxima(&scene);
        let expected_w = widths.iter().sum::<f64>() + (scene.columns - 1) as f64 * hs;
        let expected_h = heights.iter().sum::<f64>() + (scene.rows - 1) as f64 * vs;
        prop_assert_eq!(grid.rect().width, expected_w);
        prop_assert_eq!(grid.rect().height, expected_h);

        let metrics = grid.metrics(&widgets);
        prop_assert_eq!(metrics.column_widths(), widths.as_slice());
        prop_assert_eq!(metrics.row_heights(), heights.as_slice());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Idempotence and 3. size preservation
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn second_pass_is_a_no_op(
        scene in scene_strategy(),
        hs in spacing(),
        vs in spacing(),
        h_align in horizontal_strategy(),
        v_align in vertical_strategy(),
        (x, y) in anchor(),
    ) {
        let mut grid = GridLayout::new(scene.columns, scene.rows)
            .at(x, y)
            .horizontal_spacing(hs)
            .vertical_spacing(vs)
            .align_horizontal(h_align)
            .align_vertical(v_align);
        let (mut widgets, placed) = populate(&scene, &mut grid);

        grid.do_layout(&mut widgets);
        let first_rect = grid.rect();
        let first: Vec<Rect> = placed.iter().map(|(id, _, _)| widgets[*id]).collect();

        grid.do_layout(&mut widgets);
        prop_assert_eq!(grid.rect(), first_rect);
        let second: Vec<Rect> = placed.iter().map(|(id, _, _)| widgets[*id]).collect();
        prop_assert_eq!(&second, &first);

        for ((id, col, row), rect) in placed.iter().zip(&first) {
            let (w, h) = scene.sizes[row * scene.columns + col].unwrap();
            prop_assert_eq!(rect.size(), (w, h), "widget {:?} was resized", id);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Anchor
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn top_left_anchor_survives(
        scene in scene_strategy(),
        hs in spacing(),
        (x, y) in anchor(),
        (w0, h0) in (0u8..=50, 0u8..=50),
    ) {
        let mut grid = GridLayout::new(scene.columns, scene.rows).horizontal_spacing(hs);
        grid.set_rect(Rect::new(x, y, f64::from(w0), f64::from(h0)));
        let top = grid.rect().top();
        let (mut widgets, placed) = populate(&scene, &mut grid);
        prop_assume!(!placed.is_empty());

        grid.do_layout(&mut widgets);
        prop_assert_eq!(grid.rect().left(), x);
        prop_assert_eq!(grid.rect().top(), top);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Slot origins
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn left_top_alignment_hits_slot_origin(
        scene in scene_strategy(),
        hs in spacing(),
        vs in spacing(),
        (x, y) in anchor(),
    ) {
        let mut grid = GridLayout::new(scene.columns, scene.rows)
            .at(x, y)
            .horizontal_spacing(hs)
            .vertical_spacing(vs)
            .align_horizontal(HorizontalAlign::Left)
            .align_vertical(VerticalAlign::Top);
        let (mut widgets, placed) = populate(&scene, &mut grid);
        grid.do_layout(&mut widgets);

        let (widths, heights) = track_maxima(&scene);
        for (id, col, row) in placed {
            let left = x + widths[..col].iter().map(|w| w + hs).sum::<f64>();
            let top = y - heights[..row].iter().map(|h| h + vs).sum::<f64>();
            prop_assert_eq!(widgets[id].left(), left);
            prop_assert_eq!(widgets[id].top(), top);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Placement modes agree on well-ordered rows
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn placement_modes_agree_when_rows_are_full(
        scene in full_scene_strategy(),
        hs in spacing(),
        vs in spacing(),
        h_align in horizontal_strategy(),
        v_align in vertical_strategy(),
    ) {
        let base = GridLayout::new(scene.columns, scene.rows)
            .horizontal_spacing(hs)
            .vertical_spacing(vs)
            .align_horizontal(h_align)
            .align_vertical(v_align);

        let mut by_cell = base.clone().placement(Placement::Cell);
        let (mut cell_widgets, cell_ids) = populate(&scene, &mut by_cell);
        by_cell.do_layout(&mut cell_widgets);

        let mut by_order = base.placement(Placement::InsertionOrder);
        let (mut order_widgets, order_ids) = populate(&scene, &mut by_order);
        by_order.do_layout(&mut order_widgets);

        prop_assert_eq!(by_cell.rect(), by_order.rect());
        for ((a, _, _), (b, _, _)) in cell_ids.iter().zip(&order_ids) {
            prop_assert_eq!(cell_widgets[*a], order_widgets[*b]);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Mapping semantics
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn re_adding_never_duplicates(
        scene in scene_strategy(),
        moves in proptest::collection::vec((0usize..64, 0usize..5, 0usize..5), 0..20),
    ) {
        let mut grid = GridLayout::new(scene.columns, scene.rows);
        let (_, placed) = populate(&scene, &mut grid);
        prop_assume!(!placed.is_empty());
        let count = grid.len();

        for (pick, col, row) in moves {
            let (id, _, _) = placed[pick % placed.len()];
            grid.add_widget(id, col % scene.columns, row % scene.rows);
            prop_assert_eq!(grid.len(), count);
            prop_assert_eq!(
                grid.cell_of(id).map(|c| (c.column, c.row)),
                Some((col % scene.columns, row % scene.rows))
            );
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 8. Empty grid
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn empty_grid_is_zero_sized(
        (columns, rows) in (1usize..=8, 1usize..=8),
        (x, y) in anchor(),
        (w, h) in (0u8..=100, 0u8..=100),
    ) {
        let mut widgets: WidgetArena<Rect> = WidgetArena::new();
        let mut grid = GridLayout::new(columns, rows).spacing(7.0);
        grid.set_rect(Rect::new(x, y, f64::from(w), f64::from(h)));
        grid.do_layout(&mut widgets);
        prop_assert_eq!(grid.rect(), Rect::new(x, y, 0.0, 0.0));
    }
}
