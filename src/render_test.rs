#![allow(clippy::float_cmp)]

use std::f64::consts::TAU;

use super::*;
use crate::geom::Point;
use crate::surface::recording::{Op, RecordingSurface};

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn store() -> SceneStore {
    SceneStore::new(800.0, 600.0)
}

fn rendered(store: &SceneStore) -> RecordingSurface {
    let mut surface = RecordingSurface::new();
    draw(&mut surface, store).unwrap();
    surface
}

/// Count grid lines as adjacent MoveTo/LineTo pairs spanning the full
/// surface: vertical lines run top edge to bottom edge, horizontal lines
/// left edge to right edge.
fn grid_line_counts(surface: &RecordingSurface, width: f64, height: f64) -> (usize, usize) {
    let mut vertical = 0;
    let mut horizontal = 0;
    for pair in surface.ops.windows(2) {
        if let [Op::MoveTo { x: mx, y: my }, Op::LineTo { x: lx, y: ly }] = pair {
            if mx == lx && *my == 0.0 && *ly == height {
                vertical += 1;
            }
            if my == ly && *mx == 0.0 && *lx == width {
                horizontal += 1;
            }
        }
    }
    (vertical, horizontal)
}

// =============================================================
// Layering
// =============================================================

#[test]
fn empty_scene_clears_then_fills_background() {
    let surface = rendered(&store());
    assert_eq!(surface.ops[0], Op::ClearRegion { x: 0.0, y: 0.0, w: 800.0, h: 600.0 });
    assert_eq!(surface.ops[1], Op::FillColor("#f8f9fa".to_owned()));
    assert_eq!(surface.ops[2], Op::FillRect { x: 0.0, y: 0.0, w: 800.0, h: 600.0 });
}

#[test]
fn grid_off_scene_has_no_strokes() {
    let mut store = store();
    store.show_grid = false;
    let surface = rendered(&store);
    assert_eq!(surface.count(|op| matches!(op, Op::Stroke)), 0);
}

#[test]
fn paths_use_round_caps_and_joins() {
    let surface = rendered(&store());
    assert!(surface.ops.contains(&Op::LineCap("round".to_owned())));
    assert!(surface.ops.contains(&Op::LineJoin("round".to_owned())));
}

#[test]
fn paths_render_before_shapes() {
    let mut store = store();
    store.show_grid = false;
    store.begin_path(pt(0.0, 0.0), "#111111".to_owned(), 1.0);
    store.append_path_point(pt(10.0, 10.0));
    store.add_shape(ShapeKind::Rect { width: 10.0, height: 10.0 }, pt(0.0, 0.0), "#222222".to_owned());

    let surface = rendered(&store);
    let path_stroke = surface
        .ops
        .iter()
        .position(|op| *op == Op::StrokeColor("#111111".to_owned()));
    let shape_fill = surface
        .ops
        .iter()
        .position(|op| *op == Op::FillColor("#222222".to_owned()));
    assert!(path_stroke.is_some());
    assert!(shape_fill.is_some());
    assert!(path_stroke < shape_fill);
}

// =============================================================
// Grid
// =============================================================

#[test]
fn grid_800x600_has_41_vertical_and_31_horizontal_lines() {
    let surface = rendered(&store());
    let (vertical, horizontal) = grid_line_counts(&surface, 800.0, 600.0);
    assert_eq!(vertical, 41);
    assert_eq!(horizontal, 31);
}

#[test]
fn grid_uses_light_subpixel_stroke() {
    let surface = rendered(&store());
    assert!(surface.ops.contains(&Op::StrokeColor("#e9ecef".to_owned())));
    assert!(surface.ops.contains(&Op::LineWidth(0.5)));
}

#[test]
fn grid_lines_span_the_full_surface() {
    let surface = rendered(&store());
    // First grid line runs down the left edge.
    assert!(surface.ops.contains(&Op::MoveTo { x: 0.0, y: 0.0 }));
    assert!(surface.ops.contains(&Op::LineTo { x: 0.0, y: 600.0 }));
    // Last vertical line sits on the right edge.
    assert!(surface.ops.contains(&Op::LineTo { x: 800.0, y: 600.0 }));
}

// =============================================================
// Paths
// =============================================================

#[test]
fn single_point_path_is_not_stroked() {
    let mut store = store();
    store.show_grid = false;
    store.begin_path(pt(10.0, 10.0), "#2196F3".to_owned(), 5.0);

    let surface = rendered(&store);
    assert_eq!(surface.count(|op| matches!(op, Op::Stroke)), 0);
}

#[test]
fn three_point_path_strokes_a_two_segment_polyline() {
    let mut store = store();
    store.show_grid = false;
    store.begin_path(pt(10.0, 10.0), "#2196F3".to_owned(), 5.0);
    store.append_path_point(pt(20.0, 20.0));
    store.append_path_point(pt(30.0, 10.0));

    let surface = rendered(&store);
    let start = surface
        .ops
        .iter()
        .position(|op| *op == Op::StrokeColor("#2196F3".to_owned()))
        .unwrap();
    assert_eq!(
        &surface.ops[start..start + 7],
        &[
            Op::StrokeColor("#2196F3".to_owned()),
            Op::LineWidth(5.0),
            Op::BeginPath,
            Op::MoveTo { x: 10.0, y: 10.0 },
            Op::LineTo { x: 20.0, y: 20.0 },
            Op::LineTo { x: 30.0, y: 10.0 },
            Op::Stroke,
        ]
    );
}

// =============================================================
// Shapes
// =============================================================

#[test]
fn rect_is_filled_then_outlined() {
    let mut store = store();
    store.show_grid = false;
    store.add_shape(ShapeKind::Rect { width: 100.0, height: 60.0 }, pt(10.0, 20.0), "#2196F3".to_owned());

    let surface = rendered(&store);
    let start = surface
        .ops
        .iter()
        .position(|op| *op == Op::FillColor("#2196F3".to_owned()))
        .unwrap();
    assert_eq!(
        &surface.ops[start..start + 5],
        &[
            Op::FillColor("#2196F3".to_owned()),
            Op::FillRect { x: 10.0, y: 20.0, w: 100.0, h: 60.0 },
            Op::StrokeColor("#000000".to_owned()),
            Op::LineWidth(2.0),
            Op::StrokeRect { x: 10.0, y: 20.0, w: 100.0, h: 60.0 },
        ]
    );
}

#[test]
fn circle_is_filled_then_outlined() {
    let mut store = store();
    store.show_grid = false;
    store.add_shape(ShapeKind::Circle { radius: 50.0 }, pt(100.0, 100.0), "#2196F3".to_owned());

    let surface = rendered(&store);
    assert!(surface
        .ops
        .contains(&Op::Arc { cx: 100.0, cy: 100.0, r: 50.0, start: 0.0, end: TAU }));
    assert_eq!(surface.count(|op| matches!(op, Op::Fill)), 1);
    assert_eq!(surface.count(|op| matches!(op, Op::Stroke)), 1);
    assert!(surface.ops.contains(&Op::StrokeColor("#000000".to_owned())));
    assert!(surface.ops.contains(&Op::LineWidth(2.0)));
}

#[test]
fn star_vertex_zero_points_straight_up() {
    let mut store = store();
    store.show_grid = false;
    store.add_shape(ShapeKind::Star { radius: 40.0 }, pt(100.0, 100.0), "#fff".to_owned());

    let surface = rendered(&store);
    let vertex0 = surface
        .ops
        .iter()
        .find_map(|op| match op {
            Op::MoveTo { x, y } => Some((*x, *y)),
            _ => None,
        })
        .unwrap();
    assert!((vertex0.0 - 100.0).abs() < 1e-9);
    assert!((vertex0.1 - 60.0).abs() < 1e-9);
}

#[test]
fn star_alternates_outer_and_inner_radius_across_ten_vertices() {
    let mut store = store();
    store.show_grid = false;
    store.add_shape(ShapeKind::Star { radius: 40.0 }, pt(100.0, 100.0), "#fff".to_owned());

    let surface = rendered(&store);
    let vertices: Vec<(f64, f64)> = surface
        .ops
        .iter()
        .filter_map(|op| match op {
            Op::MoveTo { x, y } | Op::LineTo { x, y } => Some((*x, *y)),
            _ => None,
        })
        .collect();
    assert_eq!(vertices.len(), 10);

    for (i, (x, y)) in vertices.iter().enumerate() {
        let dist = ((x - 100.0).powi(2) + (y - 100.0).powi(2)).sqrt();
        let expected = if i % 2 == 0 { 40.0 } else { 20.0 };
        assert!((dist - expected).abs() < 1e-9, "vertex {i}: dist {dist}, expected {expected}");
    }
}

#[test]
fn star_path_is_closed_filled_and_outlined() {
    let mut store = store();
    store.show_grid = false;
    store.add_shape(ShapeKind::Star { radius: 40.0 }, pt(100.0, 100.0), "#fff".to_owned());

    let surface = rendered(&store);
    assert_eq!(surface.count(|op| matches!(op, Op::ClosePath)), 1);
    assert_eq!(surface.count(|op| matches!(op, Op::Fill)), 1);
    assert_eq!(surface.count(|op| matches!(op, Op::Stroke)), 1);
}

// =============================================================
// Ordering and determinism
// =============================================================

#[test]
fn overlapping_shapes_composite_last_wins() {
    let mut store = store();
    store.show_grid = false;
    store.add_shape(ShapeKind::Rect { width: 50.0, height: 50.0 }, pt(0.0, 0.0), "#aa0000".to_owned());
    store.add_shape(ShapeKind::Rect { width: 50.0, height: 50.0 }, pt(25.0, 25.0), "#0000aa".to_owned());

    let surface = rendered(&store);
    let first = surface
        .ops
        .iter()
        .position(|op| *op == Op::FillColor("#aa0000".to_owned()));
    let second = surface
        .ops
        .iter()
        .position(|op| *op == Op::FillColor("#0000aa".to_owned()));
    assert!(first < second, "later-inserted shape must draw over the earlier one");
}

#[test]
fn clear_then_render_matches_initial_empty_render() {
    let mut store = store();
    let initial = rendered(&store);

    store.begin_path(pt(0.0, 0.0), "#000".to_owned(), 1.0);
    store.append_path_point(pt(10.0, 10.0));
    store.add_shape(ShapeKind::Circle { radius: 50.0 }, pt(100.0, 100.0), "#abc".to_owned());
    store.clear();

    let after_clear = rendered(&store);
    assert_eq!(initial.ops, after_clear.ops);
}

#[test]
fn identical_stores_render_identically() {
    let mut store = store();
    store.begin_path(pt(5.0, 5.0), "#123".to_owned(), 2.0);
    store.append_path_point(pt(15.0, 25.0));
    store.add_shape(ShapeKind::Star { radius: 40.0 }, pt(200.0, 200.0), "#456".to_owned());

    let first = rendered(&store);
    let second = rendered(&store);
    assert_eq!(first.ops, second.ops);
}
