//! Sketch-canvas engine: freehand strokes, stamped shapes, and a bouncing-body
//! animation over a browser 2D canvas.
//!
//! This crate is compiled to WebAssembly and runs in the browser, but every
//! piece of drawing logic is host-agnostic: the renderer and animator speak to
//! an abstract [`surface::Surface`], and only the [`web`] module touches
//! `web-sys`. The host wires DOM pointer events to [`engine::Engine`], which
//! owns the scene, runs the gesture state machine, and repaints the canvas in
//! full after every mutation.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`scene`] | In-memory scene store: drawn paths and stamped shapes |
//! | [`render`] | Deterministic full-scene redraw over any surface |
//! | [`input`] | Tools, pointer gesture state, and user style settings |
//! | [`animate`] | Bouncing-body simulation and its cooperative step cycle |
//! | [`presets`] | One-shot compositions (backdrop, campus illustration) |
//! | [`surface`] | Drawing-surface capability trait and error type |
//! | [`web`] | Browser binding: canvas context surface, frame scheduler |
//! | [`geom`] | Point value type |
//! | [`consts`] | Shared numeric and color constants |

pub mod animate;
pub mod consts;
pub mod engine;
pub mod geom;
pub mod input;
pub mod presets;
pub mod render;
pub mod scene;
pub mod surface;
pub mod web;
