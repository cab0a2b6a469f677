//! Engine: pointer events in, scene mutations and redraws out.
//!
//! [`EngineCore`] holds all logic that doesn't depend on the browser — the
//! scene store, the user's tool/style settings, and the pointer gesture state
//! machine — so it can be tested natively. Handlers return an [`Action`]
//! telling the caller whether a full redraw is needed; the core never draws.
//!
//! [`Engine`] wraps the core together with the canvas-bound surface and the
//! animation loop. Until [`Engine::init`] succeeds, every drawing entry point
//! is a safe no-op; afterwards, interactive draw failures are logged and
//! swallowed so no error crosses into the host's event-handling layer.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use web_sys::HtmlCanvasElement;

use crate::animate::Animator;
use crate::geom::Point;
use crate::input::{PointerState, Tool, UiState};
use crate::presets;
use crate::render;
use crate::scene::SceneStore;
use crate::surface::SurfaceError;
use crate::web::{AnimationLoop, CanvasSurface};

/// What the caller should do after an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Nothing changed that affects pixels.
    None,
    /// The scene changed; redraw in full.
    RenderNeeded,
}

/// Core engine state — scene, settings, and the gesture state machine.
///
/// Separated from [`Engine`] so it can be tested without a browser.
#[derive(Debug, Clone, Default)]
pub struct EngineCore {
    pub scene: SceneStore,
    pub ui: UiState,
    pointer: PointerState,
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a core for a surface of the given dimensions.
    #[must_use]
    pub fn with_size(width: f64, height: f64) -> Self {
        Self {
            scene: SceneStore::new(width, height),
            ..Self::default()
        }
    }

    // --- Input events ---

    /// Pointer pressed at surface-local coordinates.
    ///
    /// Brush: begins a new active path and enters `Drawing`. Stamp tools:
    /// place the complete preset-size shape and stay `Idle` — stamps are
    /// one-shot, not drag-sized.
    pub fn on_pointer_down(&mut self, point: Point) -> Action {
        if let Some(kind) = self.ui.tool.stamp_kind() {
            self.scene.add_shape(kind, point, self.ui.color.clone());
            return Action::RenderNeeded;
        }

        self.scene
            .begin_path(point, self.ui.color.clone(), self.ui.brush_width);
        self.pointer = PointerState::Drawing;
        Action::RenderNeeded
    }

    /// Pointer moved. Appends to the active path while drawing; otherwise
    /// nothing happens.
    pub fn on_pointer_move(&mut self, point: Point) -> Action {
        if self.pointer != PointerState::Drawing {
            return Action::None;
        }
        self.scene.append_path_point(point);
        Action::RenderNeeded
    }

    /// Pointer released: seal the active path.
    pub fn on_pointer_up(&mut self) -> Action {
        self.finish_stroke()
    }

    /// Pointer left the surface: treated the same as a release.
    pub fn on_pointer_leave(&mut self) -> Action {
        self.finish_stroke()
    }

    fn finish_stroke(&mut self) -> Action {
        if self.pointer == PointerState::Drawing {
            self.scene.end_path();
            self.pointer = PointerState::Idle;
        }
        Action::None
    }

    // --- Configuration ---

    /// Set the active tool. Takes effect on the next pointer-down.
    pub fn set_tool(&mut self, tool: Tool) -> Action {
        self.ui.tool = tool;
        Action::None
    }

    /// Set the color for new strokes and stamps. Existing content keeps the
    /// color it was created with.
    pub fn set_color(&mut self, color: String) -> Action {
        self.ui.color = color;
        Action::None
    }

    /// Set the stroke width for new brush paths.
    pub fn set_brush_width(&mut self, width: f64) -> Action {
        self.ui.brush_width = width;
        Action::None
    }

    /// Flip grid visibility.
    pub fn toggle_grid(&mut self) -> Action {
        self.scene.show_grid = !self.scene.show_grid;
        Action::RenderNeeded
    }

    /// Set grid visibility directly.
    pub fn set_grid(&mut self, show: bool) -> Action {
        if self.scene.show_grid == show {
            return Action::None;
        }
        self.scene.show_grid = show;
        Action::RenderNeeded
    }

    /// Empty the scene.
    pub fn clear(&mut self) -> Action {
        self.scene.clear();
        Action::RenderNeeded
    }

    // --- Queries ---

    /// Current gesture state.
    #[must_use]
    pub fn pointer_state(&self) -> PointerState {
        self.pointer
    }
}

/// The full engine. Wraps [`EngineCore`] and owns the browser canvas
/// element, its 2D surface, and the animation loop.
pub struct Engine {
    canvas: HtmlCanvasElement,
    surface: Option<CanvasSurface>,
    animation: Option<AnimationLoop>,
    pub core: EngineCore,
}

impl Engine {
    /// Create an engine bound to the given canvas element. Drawing stays a
    /// no-op until [`Engine::init`] acquires the 2D context.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        let core = EngineCore::with_size(f64::from(canvas.width()), f64::from(canvas.height()));
        Self {
            canvas,
            surface: None,
            animation: None,
            core,
        }
    }

    /// Acquire the 2D context and paint the initial empty scene.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the canvas cannot provide a 2D context or the first
    /// render fails.
    pub fn init(&mut self) -> Result<(), SurfaceError> {
        let surface = CanvasSurface::from_canvas(&self.canvas)?;
        self.animation = Some(AnimationLoop::new(
            Animator::new(self.core.scene.width, self.core.scene.height),
            surface.clone(),
        ));
        self.surface = Some(surface);

        if let Some(surface) = self.surface.as_mut() {
            render::draw(surface, &self.core.scene)?;
        }
        Ok(())
    }

    // --- Input events (surface-local coordinates) ---

    pub fn on_pointer_down(&mut self, x: f64, y: f64) {
        let action = self.core.on_pointer_down(Point::new(x, y));
        self.apply(action);
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        let action = self.core.on_pointer_move(Point::new(x, y));
        self.apply(action);
    }

    pub fn on_pointer_up(&mut self) {
        let action = self.core.on_pointer_up();
        self.apply(action);
    }

    pub fn on_pointer_leave(&mut self) {
        let action = self.core.on_pointer_leave();
        self.apply(action);
    }

    // --- Configuration ---

    pub fn set_tool(&mut self, tool: Tool) {
        let action = self.core.set_tool(tool);
        self.apply(action);
    }

    pub fn set_color(&mut self, color: String) {
        let action = self.core.set_color(color);
        self.apply(action);
    }

    pub fn set_brush_width(&mut self, width: f64) {
        let action = self.core.set_brush_width(width);
        self.apply(action);
    }

    pub fn toggle_grid(&mut self) {
        let action = self.core.toggle_grid();
        self.apply(action);
    }

    /// Empty the scene and repaint the blank canvas.
    pub fn clear(&mut self) {
        let action = self.core.clear();
        self.apply(action);
    }

    /// Replace the canvas contents with the campus illustration. The stored
    /// scene is cleared first, matching a fresh composition.
    pub fn draw_campus(&mut self) {
        self.core.clear();
        let Some(surface) = self.surface.as_mut() else {
            log::debug!("campus scene skipped: {}", SurfaceError::Unavailable);
            return;
        };
        if let Err(err) = presets::campus(surface, self.core.scene.width, self.core.scene.height) {
            log::warn!("campus scene failed: {err}");
        }
    }

    // --- Animation ---

    /// Start the bouncing-body animation. No-op while already running or
    /// before initialization.
    pub fn start_animation(&mut self) {
        match self.animation.as_ref() {
            Some(animation) => animation.start(),
            None => log::debug!("animation skipped: {}", SurfaceError::Unavailable),
        }
    }

    /// Request the animation to stop; the scene itself is untouched.
    pub fn stop_animation(&mut self) {
        if let Some(animation) = self.animation.as_ref() {
            animation.stop();
        }
    }

    /// Whether an animation run is in progress.
    #[must_use]
    pub fn animation_running(&self) -> bool {
        self.animation
            .as_ref()
            .is_some_and(AnimationLoop::is_running)
    }

    // --- Render ---

    /// Redraw the full scene. A missing surface or a failed draw call is
    /// logged and swallowed — interactive errors never reach the host.
    pub fn render(&mut self) {
        let Some(surface) = self.surface.as_mut() else {
            log::debug!("render skipped: {}", SurfaceError::Unavailable);
            return;
        };
        if let Err(err) = render::draw(surface, &self.core.scene) {
            log::warn!("scene redraw failed: {err}");
        }
    }

    fn apply(&mut self, action: Action) {
        if action == Action::RenderNeeded {
            self.render();
        }
    }
}
