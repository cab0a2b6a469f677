//! One-shot scene compositions drawn directly to the surface.
//!
//! These routines bypass the scene store entirely: they are deterministic,
//! stateless output with no retained objects. `backdrop` paints the blank
//! canvas (background plus optional grid); `campus` paints the fixed campus
//! illustration.

#[cfg(test)]
#[path = "presets_test.rs"]
mod presets_test;

use std::f64::consts::TAU;

use crate::consts::CANVAS_BACKGROUND;
use crate::render;
use crate::surface::{Surface, SurfaceError};

/// Title drawn over the campus illustration.
const CAMPUS_TITLE: &str = "EASEL CAMPUS";

/// Clear the surface and paint the background, with the grid on top when
/// requested.
///
/// # Errors
///
/// Returns `Err` if any surface call fails.
pub fn backdrop(
    surface: &mut dyn Surface,
    width: f64,
    height: f64,
    show_grid: bool,
) -> Result<(), SurfaceError> {
    surface.clear_region(0.0, 0.0, width, height)?;
    surface.set_fill_color(CANVAS_BACKGROUND)?;
    surface.fill_rect(0.0, 0.0, width, height)?;
    if show_grid {
        render::grid(surface, width, height)?;
    }
    Ok(())
}

/// Paint the fixed campus illustration: sky and ground bands, a building
/// with a triangular roof, windows and a door, two trees, a walkway, and
/// the title.
///
/// # Errors
///
/// Returns `Err` if any surface call fails.
pub fn campus(surface: &mut dyn Surface, width: f64, height: f64) -> Result<(), SurfaceError> {
    surface.clear_region(0.0, 0.0, width, height)?;

    // Sky over the top half, ground over the bottom half.
    let horizon = height / 2.0;
    surface.set_fill_color("#87CEEB")?;
    surface.fill_rect(0.0, 0.0, width, horizon)?;
    surface.set_fill_color("#228B22")?;
    surface.fill_rect(0.0, horizon, width, height - horizon)?;

    // Main building.
    surface.set_fill_color("#8B4513")?;
    surface.fill_rect(300.0, 200.0, 200.0, 150.0)?;

    // Roof: triangle peaking over the building's center.
    surface.set_fill_color("#DC143C")?;
    surface.begin_path()?;
    surface.move_to(300.0, 200.0)?;
    surface.line_to(400.0, 150.0)?;
    surface.line_to(500.0, 200.0)?;
    surface.close_path()?;
    surface.fill()?;

    // Four evenly spaced windows.
    surface.set_fill_color("#87CEEB")?;
    for i in 0..4 {
        let x = 50.0f64.mul_add(f64::from(i), 320.0);
        surface.fill_rect(x, 220.0, 30.0, 40.0)?;
    }

    // Door.
    surface.set_fill_color("#654321")?;
    surface.fill_rect(385.0, 290.0, 30.0, 60.0)?;

    // Trees flanking the building.
    tree(surface, 150.0, 300.0)?;
    tree(surface, 650.0, 300.0)?;

    // Walkway band across the full width.
    surface.set_fill_color("#696969")?;
    surface.fill_rect(0.0, 340.0, width, 20.0)?;

    // Title.
    surface.set_fill_color("#000000")?;
    surface.set_font("bold 24px Arial")?;
    surface.fill_text(CAMPUS_TITLE, 310.0, 100.0)?;

    Ok(())
}

/// One tree: a trunk rooted at (x, y) with a circular canopy above it.
fn tree(surface: &mut dyn Surface, x: f64, y: f64) -> Result<(), SurfaceError> {
    surface.set_fill_color("#8B4513")?;
    surface.fill_rect(x - 5.0, y - 40.0, 10.0, 40.0)?;

    surface.set_fill_color("#228B22")?;
    surface.begin_path()?;
    surface.arc(x, y - 60.0, 25.0, 0.0, TAU)?;
    surface.fill()?;
    Ok(())
}
