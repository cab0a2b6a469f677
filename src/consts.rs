//! Shared numeric and color constants for the sketch engine.

// ── Math ────────────────────────────────────────────────────────

/// π / 5 (36°) — angular step for a 10-vertex star polygon.
pub const FRAC_PI_5: f64 = std::f64::consts::PI / 5.0;

/// Inner-to-outer radius ratio for the star stamp.
pub const STAR_INNER_RATIO: f64 = 0.5;

// ── Canvas ──────────────────────────────────────────────────────

/// Default surface width in pixels.
pub const CANVAS_WIDTH: f64 = 800.0;

/// Default surface height in pixels.
pub const CANVAS_HEIGHT: f64 = 600.0;

/// Background fill behind everything else.
pub const CANVAS_BACKGROUND: &str = "#f8f9fa";

// ── Grid ────────────────────────────────────────────────────────

/// Spacing between grid lines in pixels, both axes.
pub const GRID_SPACING: f64 = 20.0;

/// Grid line color — light enough to sit under any stroke.
pub const GRID_STROKE: &str = "#e9ecef";

/// Grid line width; sub-pixel so the grid reads as a texture.
pub const GRID_LINE_WIDTH: f64 = 0.5;

// ── Stamps ──────────────────────────────────────────────────────

/// Width of a stamped rectangle.
pub const STAMP_RECT_WIDTH: f64 = 100.0;

/// Height of a stamped rectangle.
pub const STAMP_RECT_HEIGHT: f64 = 60.0;

/// Radius of a stamped circle.
pub const STAMP_CIRCLE_RADIUS: f64 = 50.0;

/// Outer radius of a stamped star.
pub const STAMP_STAR_RADIUS: f64 = 40.0;

/// Outline color drawn over every stamped shape.
pub const SHAPE_OUTLINE: &str = "#000000";

/// Outline width drawn over every stamped shape.
pub const SHAPE_OUTLINE_WIDTH: f64 = 2.0;

// ── Brush defaults ──────────────────────────────────────────────

/// Initial brush/stamp color.
pub const DEFAULT_COLOR: &str = "#2196F3";

/// Initial brush stroke width.
pub const DEFAULT_BRUSH_WIDTH: f64 = 5.0;

// ── Animation ───────────────────────────────────────────────────

/// Target frame interval for hosts driving the animator off a software
/// timer instead of a frame callback.
pub const FRAME_INTERVAL_MS: u32 = 16;
