//! Rendering module
//!
//! Draws the game state onto any `Surface`; the browser build provides a
//! canvas-backed one.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod palette;
pub mod scene;
pub mod shapes;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use scene::draw_scene;
pub use surface::{Surface, TextAlign, TextStyle};
