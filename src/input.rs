//! Input model: tools, user style settings, and the pointer gesture state.
//!
//! `Tool` and `UiState` capture the user's intent at the time of a pointer
//! event; `PointerState` is the gesture being tracked between pointer-down
//! and pointer-up. Only the brush occupies `Drawing` across pointer-moves —
//! stamp tools place a complete shape on pointer-down and return to `Idle`
//! immediately.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_BRUSH_WIDTH, DEFAULT_COLOR, STAMP_CIRCLE_RADIUS, STAMP_RECT_HEIGHT, STAMP_RECT_WIDTH,
    STAMP_STAR_RADIUS,
};
use crate::scene::ShapeKind;

/// Which tool is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Freehand brush (default): accumulates points over a drag.
    #[default]
    Brush,
    /// Stamp a fixed-size rectangle.
    Rect,
    /// Stamp a fixed-size circle.
    Circle,
    /// Stamp a fixed-size star.
    Star,
}

impl Tool {
    /// Whether this tool places a complete shape in one click.
    #[must_use]
    pub fn is_stamp(self) -> bool {
        matches!(self, Self::Rect | Self::Circle | Self::Star)
    }

    /// The preset-size shape this stamp tool places, or `None` for the brush.
    #[must_use]
    pub fn stamp_kind(self) -> Option<ShapeKind> {
        match self {
            Self::Brush => None,
            Self::Rect => Some(ShapeKind::Rect {
                width: STAMP_RECT_WIDTH,
                height: STAMP_RECT_HEIGHT,
            }),
            Self::Circle => Some(ShapeKind::Circle { radius: STAMP_CIRCLE_RADIUS }),
            Self::Star => Some(ShapeKind::Star { radius: STAMP_STAR_RADIUS }),
        }
    }
}

/// User-settable drawing configuration. Changes take effect on the next
/// stroke or stamp, never retroactively.
#[derive(Debug, Clone)]
pub struct UiState {
    /// Currently active tool.
    pub tool: Tool,
    /// Stroke/fill color for new content.
    pub color: String,
    /// Stroke width for new brush paths.
    pub brush_width: f64,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            tool: Tool::default(),
            color: DEFAULT_COLOR.to_owned(),
            brush_width: DEFAULT_BRUSH_WIDTH,
        }
    }
}

/// Pointer gesture state between pointer-down and pointer-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The brush is down and the active path is accepting points.
    Drawing,
}
