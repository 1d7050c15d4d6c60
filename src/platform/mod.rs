//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Time/ticks
//! - Input events

pub mod input;
pub mod time;

pub use input::{InputEvent, event_for_key};
pub use time::{Clock, ManualClock};

#[cfg(target_arch = "wasm32")]
pub use time::PerformanceClock;
