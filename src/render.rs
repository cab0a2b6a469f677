//! Rendering: composites the full scene onto a drawing surface.
//!
//! The redraw contract is clear → background → optional grid → paths →
//! shapes, each sequence in insertion order so later elements draw over
//! earlier ones. The function is pure with respect to the store and fully
//! deterministic: identical store contents produce the identical call
//! sequence, which is what makes full redraw after every mutation viable.
//!
//! All fallible surface calls propagate via `Result<(), SurfaceError>`. The
//! top-level caller ([`crate::engine::Engine::render`]) decides whether a
//! failure is fatal.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::f64::consts::TAU;

use crate::consts::{
    CANVAS_BACKGROUND, FRAC_PI_5, GRID_LINE_WIDTH, GRID_SPACING, GRID_STROKE, SHAPE_OUTLINE,
    SHAPE_OUTLINE_WIDTH, STAR_INNER_RATIO,
};
use crate::scene::{DrawnPath, DrawnShape, SceneStore, ShapeKind};
use crate::surface::{Surface, SurfaceError};

/// Draw the full scene.
///
/// # Errors
///
/// Returns `Err` if any surface call fails.
pub fn draw(surface: &mut dyn Surface, store: &SceneStore) -> Result<(), SurfaceError> {
    // Layer 1: blank surface and background.
    surface.clear_region(0.0, 0.0, store.width, store.height)?;
    surface.set_fill_color(CANVAS_BACKGROUND)?;
    surface.fill_rect(0.0, 0.0, store.width, store.height)?;

    // Layer 2: grid.
    if store.show_grid {
        grid(surface, store.width, store.height)?;
    }

    // Layer 3: freehand paths with round caps so strokes join smoothly.
    surface.set_line_cap("round")?;
    surface.set_line_join("round")?;
    for path in store.paths() {
        draw_path(surface, path)?;
    }

    // Layer 4: stamped shapes.
    for shape in store.shapes() {
        draw_shape(surface, shape)?;
    }

    Ok(())
}

/// Stroke a uniform grid: vertical lines at every spacing column from 0 to
/// the width inclusive, then horizontal rows likewise.
pub(crate) fn grid(surface: &mut dyn Surface, width: f64, height: f64) -> Result<(), SurfaceError> {
    surface.set_stroke_color(GRID_STROKE)?;
    surface.set_line_width(GRID_LINE_WIDTH)?;

    let mut x = 0.0;
    while x <= width {
        surface.begin_path()?;
        surface.move_to(x, 0.0)?;
        surface.line_to(x, height)?;
        surface.stroke()?;
        x += GRID_SPACING;
    }

    let mut y = 0.0;
    while y <= height {
        surface.begin_path()?;
        surface.move_to(0.0, y)?;
        surface.line_to(width, y)?;
        surface.stroke()?;
        y += GRID_SPACING;
    }

    Ok(())
}

// =============================================================
// Paths
// =============================================================

fn draw_path(surface: &mut dyn Surface, path: &DrawnPath) -> Result<(), SurfaceError> {
    // A path needs two points before there is anything to stroke.
    let [first, rest @ ..] = path.points.as_slice() else {
        return Ok(());
    };
    if rest.is_empty() {
        return Ok(());
    }

    surface.set_stroke_color(&path.color)?;
    surface.set_line_width(path.width)?;
    surface.begin_path()?;
    surface.move_to(first.x, first.y)?;
    for point in rest {
        surface.line_to(point.x, point.y)?;
    }
    surface.stroke()?;
    Ok(())
}

// =============================================================
// Shapes
// =============================================================

fn draw_shape(surface: &mut dyn Surface, shape: &DrawnShape) -> Result<(), SurfaceError> {
    match shape.kind {
        ShapeKind::Rect { width, height } => draw_rect(surface, shape, width, height),
        ShapeKind::Circle { radius } => draw_circle(surface, shape, radius),
        ShapeKind::Star { radius } => draw_star(surface, shape, radius),
    }
}

fn draw_rect(
    surface: &mut dyn Surface,
    shape: &DrawnShape,
    width: f64,
    height: f64,
) -> Result<(), SurfaceError> {
    surface.set_fill_color(&shape.color)?;
    surface.fill_rect(shape.x, shape.y, width, height)?;

    apply_outline(surface)?;
    surface.stroke_rect(shape.x, shape.y, width, height)?;
    Ok(())
}

fn draw_circle(surface: &mut dyn Surface, shape: &DrawnShape, radius: f64) -> Result<(), SurfaceError> {
    surface.set_fill_color(&shape.color)?;
    surface.begin_path()?;
    surface.arc(shape.x, shape.y, radius, 0.0, TAU)?;
    surface.fill()?;

    apply_outline(surface)?;
    surface.stroke()?;
    Ok(())
}

fn draw_star(surface: &mut dyn Surface, shape: &DrawnShape, radius: f64) -> Result<(), SurfaceError> {
    surface.set_fill_color(&shape.color)?;
    surface.begin_path()?;

    // Ten vertices alternating outer and inner radius, offset so vertex 0
    // points straight up.
    let offset = std::f64::consts::FRAC_PI_2;
    for i in 0..10 {
        let angle = FRAC_PI_5.mul_add(f64::from(i), -offset);
        let r = if i % 2 == 0 { radius } else { radius * STAR_INNER_RATIO };
        let px = r.mul_add(angle.cos(), shape.x);
        let py = r.mul_add(angle.sin(), shape.y);
        if i == 0 {
            surface.move_to(px, py)?;
        } else {
            surface.line_to(px, py)?;
        }
    }

    surface.close_path()?;
    surface.fill()?;

    apply_outline(surface)?;
    surface.stroke()?;
    Ok(())
}

/// Set the black outline style drawn over every stamped shape.
fn apply_outline(surface: &mut dyn Surface) -> Result<(), SurfaceError> {
    surface.set_stroke_color(SHAPE_OUTLINE)?;
    surface.set_line_width(SHAPE_OUTLINE_WIDTH)?;
    Ok(())
}
