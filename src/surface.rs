//! Drawing-surface capability trait and its error type.
//!
//! The renderer, animator, and presets draw through [`Surface`] rather than
//! a concrete canvas context, so all of them run under native unit tests
//! against recording doubles. The browser implementation lives in
//! [`crate::web`]. Calls are strictly sequenced: a style setter affects every
//! draw call after it until the next setter, so implementations must apply
//! calls in order.

use thiserror::Error;

/// Error raised by surface operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    /// The drawing surface has not been initialized yet. Drawing entry
    /// points treat this as a safe no-op until initialization completes.
    #[error("drawing surface is not initialized")]
    Unavailable,
    /// An individual draw call failed. Suppressed for one-shot interactive
    /// operations, fatal to an in-progress animation run.
    #[error("draw operation failed: {0}")]
    Draw(String),
}

/// The 2D raster target that receives drawing commands.
pub trait Surface {
    /// Reset a region to transparent.
    fn clear_region(&mut self, x: f64, y: f64, w: f64, h: f64) -> Result<(), SurfaceError>;

    /// Set the fill color for subsequent fill calls.
    fn set_fill_color(&mut self, color: &str) -> Result<(), SurfaceError>;

    /// Set the stroke color for subsequent stroke calls.
    fn set_stroke_color(&mut self, color: &str) -> Result<(), SurfaceError>;

    /// Set the stroke width for subsequent stroke calls.
    fn set_line_width(&mut self, width: f64) -> Result<(), SurfaceError>;

    /// Set the line cap style (`"butt"`, `"round"`, `"square"`).
    fn set_line_cap(&mut self, cap: &str) -> Result<(), SurfaceError>;

    /// Set the line join style (`"miter"`, `"round"`, `"bevel"`).
    fn set_line_join(&mut self, join: &str) -> Result<(), SurfaceError>;

    /// Fill a rectangle with the current fill color.
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) -> Result<(), SurfaceError>;

    /// Outline a rectangle with the current stroke style.
    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64) -> Result<(), SurfaceError>;

    /// Start a new path.
    fn begin_path(&mut self) -> Result<(), SurfaceError>;

    /// Move the path cursor without drawing.
    fn move_to(&mut self, x: f64, y: f64) -> Result<(), SurfaceError>;

    /// Extend the current path with a straight segment.
    fn line_to(&mut self, x: f64, y: f64) -> Result<(), SurfaceError>;

    /// Close the current path back to its starting point.
    fn close_path(&mut self) -> Result<(), SurfaceError>;

    /// Stroke the current path.
    fn stroke(&mut self) -> Result<(), SurfaceError>;

    /// Fill the current path.
    fn fill(&mut self) -> Result<(), SurfaceError>;

    /// Append a circular arc to the current path. Angles are in radians.
    fn arc(&mut self, cx: f64, cy: f64, r: f64, start: f64, end: f64) -> Result<(), SurfaceError>;

    /// Set the font for subsequent text calls (CSS font shorthand).
    fn set_font(&mut self, font: &str) -> Result<(), SurfaceError>;

    /// Fill a text run at the given baseline position.
    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), SurfaceError>;
}
