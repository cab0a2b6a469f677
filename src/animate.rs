//! Bouncing-body animation: transient moving shapes with elastic wall
//! reflection, advanced by a cooperative step cycle.
//!
//! The animator is disjoint from the scene store — its bodies are created on
//! `start`, discarded on the next `start`, and never persisted. Each step
//! checks the `running` flag before touching the surface, so a stop request
//! is observed by the at-most-one step still scheduled after it. Scheduling
//! itself belongs to the host ([`crate::web::AnimationLoop`] in the
//! browser); the target cadence is the platform frame rate, or
//! [`crate::consts::FRAME_INTERVAL_MS`] for software timers.

#[cfg(test)]
#[path = "animate_test.rs"]
mod animate_test;

use std::f64::consts::TAU;

use crate::consts::CANVAS_BACKGROUND;
use crate::surface::{Surface, SurfaceError};

/// Geometry of an animated body. Positions are centers; wall tests use the
/// half-extent on each axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BodyShape {
    Circle { radius: f64 },
    Rect { width: f64, height: f64 },
}

impl BodyShape {
    fn half_extent_x(self) -> f64 {
        match self {
            Self::Circle { radius } => radius,
            Self::Rect { width, .. } => width / 2.0,
        }
    }

    fn half_extent_y(self) -> f64 {
        match self {
            Self::Circle { radius } => radius,
            Self::Rect { height, .. } => height / 2.0,
        }
    }
}

/// A transient physics-simulated shape owned by the animator.
#[derive(Debug, Clone)]
pub struct Body {
    /// Center x in surface pixels.
    pub x: f64,
    /// Center y in surface pixels.
    pub y: f64,
    /// Velocity x in pixels per step.
    pub dx: f64,
    /// Velocity y in pixels per step.
    pub dy: f64,
    pub shape: BodyShape,
    pub color: String,
}

impl Body {
    /// Advance one step and reflect off the surface walls. Reflection is
    /// perfectly elastic and axis-independent: each velocity component
    /// inverts when that axis's extent crosses a wall.
    fn advance(&mut self, width: f64, height: f64) {
        self.x += self.dx;
        self.y += self.dy;

        let hx = self.shape.half_extent_x();
        let hy = self.shape.half_extent_y();

        // Invert only when moving toward the crossed wall, so a body already
        // past the boundary heads back out instead of oscillating in place.
        if (self.x - hx < 0.0 && self.dx < 0.0) || (self.x + hx > width && self.dx > 0.0) {
            self.dx = -self.dx;
        }
        if (self.y - hy < 0.0 && self.dy < 0.0) || (self.y + hy > height && self.dy > 0.0) {
            self.dy = -self.dy;
        }
    }
}

/// The default roster created on every `start`.
fn default_bodies() -> Vec<Body> {
    vec![
        Body {
            x: 50.0,
            y: 50.0,
            dx: 2.0,
            dy: 2.0,
            shape: BodyShape::Circle { radius: 25.0 },
            color: "#ff0000".to_owned(),
        },
        Body {
            x: 120.0,
            y: 150.0,
            dx: 2.0,
            dy: 1.5,
            shape: BodyShape::Circle { radius: 30.0 },
            color: "#ff6b6b".to_owned(),
        },
        Body {
            x: 400.0,
            y: 300.0,
            dx: -1.5,
            dy: 2.0,
            shape: BodyShape::Rect { width: 60.0, height: 40.0 },
            color: "#4ecdc4".to_owned(),
        },
    ]
}

/// Free-running bounce simulation with a cooperative stop flag.
#[derive(Debug)]
pub struct Animator {
    bodies: Vec<Body>,
    running: bool,
    width: f64,
    height: f64,
}

impl Animator {
    /// Create a stopped animator for a surface of the given dimensions.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            bodies: Vec::new(),
            running: false,
            width,
            height,
        }
    }

    /// Begin a run: reinitialize the body roster and set the running flag.
    /// No-op while a run is already in progress — there is no mid-run reset.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.bodies = default_bodies();
        self.running = true;
    }

    /// Request the run to end. The next scheduled step observes the flag and
    /// exits without drawing.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Whether a run is in progress.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The current body roster.
    #[must_use]
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Advance one frame: clear, redraw the background, move and draw every
    /// body. Returns `Ok(true)` if another step should be scheduled,
    /// `Ok(false)` once stopped.
    ///
    /// # Errors
    ///
    /// A failed draw call ends the run (the flag is cleared before the error
    /// propagates) — frame errors are fatal to the run, never retried.
    pub fn step(&mut self, surface: &mut dyn Surface) -> Result<bool, SurfaceError> {
        if !self.running {
            return Ok(false);
        }

        if let Err(err) = self.draw_frame(surface) {
            self.running = false;
            return Err(err);
        }

        Ok(true)
    }

    fn draw_frame(&mut self, surface: &mut dyn Surface) -> Result<(), SurfaceError> {
        surface.clear_region(0.0, 0.0, self.width, self.height)?;
        surface.set_fill_color(CANVAS_BACKGROUND)?;
        surface.fill_rect(0.0, 0.0, self.width, self.height)?;

        for body in &mut self.bodies {
            body.advance(self.width, self.height);

            surface.set_fill_color(&body.color)?;
            match body.shape {
                BodyShape::Circle { radius } => {
                    surface.begin_path()?;
                    surface.arc(body.x, body.y, radius, 0.0, TAU)?;
                    surface.fill()?;
                }
                BodyShape::Rect { width, height } => {
                    surface.fill_rect(body.x - width / 2.0, body.y - height / 2.0, width, height)?;
                }
            }
        }

        Ok(())
    }
}
