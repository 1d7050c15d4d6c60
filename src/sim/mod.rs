//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, time passed in by the caller
//! - Seeded RNG only
//! - Stable iteration order (insertion order of obstacles)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod stream;
pub mod tick;

pub use collision::{Rect, circle_rect_collision};
pub use state::{Avatar, GamePhase, GameState, Obstacle};
pub use stream::ObstacleStream;
pub use tick::{GameEvent, TickOutcome, tick};
