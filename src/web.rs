//! Browser binding: the only module that touches `web-sys`.
//!
//! [`CanvasSurface`] implements [`Surface`] over a `CanvasRenderingContext2d`
//! and maps `JsValue` failures into [`SurfaceError`]. [`AnimationLoop`]
//! drives [`Animator::step`] on `requestAnimationFrame`, re-scheduling
//! itself while the animator reports more work and releasing its frame
//! closure when the run ends. Only start/stop are exposed; the scheduling
//! primitive never leaks to callers.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::animate::Animator;
use crate::surface::{Surface, SurfaceError};

fn draw_error(value: &JsValue) -> SurfaceError {
    SurfaceError::Draw(format!("{value:?}"))
}

/// A [`Surface`] backed by a canvas 2D context.
///
/// Cloning is cheap: clones share the same underlying context handle.
#[derive(Debug, Clone)]
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Acquire the `2d` context from a canvas element.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::Unavailable`] if the context cannot be
    /// created (already claimed with another mode, or detached element).
    pub fn from_canvas(canvas: &HtmlCanvasElement) -> Result<Self, SurfaceError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|_| SurfaceError::Unavailable)?
            .ok_or(SurfaceError::Unavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SurfaceError::Unavailable)?;
        Ok(Self { ctx })
    }
}

impl Surface for CanvasSurface {
    fn clear_region(&mut self, x: f64, y: f64, w: f64, h: f64) -> Result<(), SurfaceError> {
        self.ctx.clear_rect(x, y, w, h);
        Ok(())
    }

    fn set_fill_color(&mut self, color: &str) -> Result<(), SurfaceError> {
        self.ctx.set_fill_style_str(color);
        Ok(())
    }

    fn set_stroke_color(&mut self, color: &str) -> Result<(), SurfaceError> {
        self.ctx.set_stroke_style_str(color);
        Ok(())
    }

    fn set_line_width(&mut self, width: f64) -> Result<(), SurfaceError> {
        self.ctx.set_line_width(width);
        Ok(())
    }

    fn set_line_cap(&mut self, cap: &str) -> Result<(), SurfaceError> {
        self.ctx.set_line_cap(cap);
        Ok(())
    }

    fn set_line_join(&mut self, join: &str) -> Result<(), SurfaceError> {
        self.ctx.set_line_join(join);
        Ok(())
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) -> Result<(), SurfaceError> {
        self.ctx.fill_rect(x, y, w, h);
        Ok(())
    }

    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64) -> Result<(), SurfaceError> {
        self.ctx.stroke_rect(x, y, w, h);
        Ok(())
    }

    fn begin_path(&mut self) -> Result<(), SurfaceError> {
        self.ctx.begin_path();
        Ok(())
    }

    fn move_to(&mut self, x: f64, y: f64) -> Result<(), SurfaceError> {
        self.ctx.move_to(x, y);
        Ok(())
    }

    fn line_to(&mut self, x: f64, y: f64) -> Result<(), SurfaceError> {
        self.ctx.line_to(x, y);
        Ok(())
    }

    fn close_path(&mut self) -> Result<(), SurfaceError> {
        self.ctx.close_path();
        Ok(())
    }

    fn stroke(&mut self) -> Result<(), SurfaceError> {
        self.ctx.stroke();
        Ok(())
    }

    fn fill(&mut self) -> Result<(), SurfaceError> {
        self.ctx.fill();
        Ok(())
    }

    fn arc(&mut self, cx: f64, cy: f64, r: f64, start: f64, end: f64) -> Result<(), SurfaceError> {
        self.ctx.arc(cx, cy, r, start, end).map_err(|e| draw_error(&e))
    }

    fn set_font(&mut self, font: &str) -> Result<(), SurfaceError> {
        self.ctx.set_font(font);
        Ok(())
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), SurfaceError> {
        self.ctx.fill_text(text, x, y).map_err(|e| draw_error(&e))
    }
}

/// Drives an [`Animator`] on the browser frame callback.
///
/// Each run owns one self-rescheduling frame closure. The closure checks the
/// run epoch and the animator's stop flag before drawing, so a step still
/// scheduled after `stop` exits without touching the surface, and a run
/// restarted within the same frame cannot be double-stepped by a stale
/// callback.
pub struct AnimationLoop {
    animator: Rc<RefCell<Animator>>,
    surface: CanvasSurface,
    epoch: Rc<Cell<u64>>,
}

impl AnimationLoop {
    #[must_use]
    pub fn new(animator: Animator, surface: CanvasSurface) -> Self {
        Self {
            animator: Rc::new(RefCell::new(animator)),
            surface,
            epoch: Rc::new(Cell::new(0)),
        }
    }

    /// Begin a run. No-op while one is already in progress. Restarting after
    /// a stop always reinitializes the body roster.
    pub fn start(&self) {
        {
            let mut animator = self.animator.borrow_mut();
            if animator.is_running() {
                return;
            }
            animator.start();
        }

        let my_epoch = self.epoch.get() + 1;
        self.epoch.set(my_epoch);

        let animator = Rc::clone(&self.animator);
        let epoch = Rc::clone(&self.epoch);
        let mut surface = self.surface.clone();

        let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let handle = Rc::clone(&frame);

        *frame.borrow_mut() = Some(Closure::new(move || {
            if epoch.get() != my_epoch {
                // A newer run owns the surface; this chain is stale.
                drop(handle.borrow_mut().take());
                return;
            }

            let keep_going = match animator.borrow_mut().step(&mut surface) {
                Ok(going) => going,
                Err(err) => {
                    log::warn!("animation run aborted: {err}");
                    false
                }
            };

            if keep_going {
                let scheduled = match handle.borrow().as_ref() {
                    Some(closure) => match schedule(closure) {
                        Ok(()) => true,
                        Err(err) => {
                            log::warn!("frame scheduling failed: {err}");
                            false
                        }
                    },
                    None => false,
                };
                if scheduled {
                    return;
                }
                animator.borrow_mut().stop();
            }
            // Run is over; release the frame closure.
            drop(handle.borrow_mut().take());
        }));

        let mut failed = false;
        if let Some(closure) = frame.borrow().as_ref() {
            if let Err(err) = schedule(closure) {
                log::warn!("frame scheduling failed: {err}");
                failed = true;
            }
        }
        if failed {
            self.animator.borrow_mut().stop();
            drop(frame.borrow_mut().take());
        }
    }

    /// Request the current run to end. The next scheduled frame observes the
    /// flag, skips drawing, and releases itself.
    pub fn stop(&self) {
        self.animator.borrow_mut().stop();
    }

    /// Whether a run is in progress.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.animator.borrow().is_running()
    }
}

fn schedule(closure: &Closure<dyn FnMut()>) -> Result<(), SurfaceError> {
    let window = web_sys::window().ok_or(SurfaceError::Unavailable)?;
    window
        .request_animation_frame(closure.as_ref().unchecked_ref::<js_sys::Function>())
        .map(|_handle| ())
        .map_err(|e| draw_error(&e))
}
