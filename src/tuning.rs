//! Data-driven game balance
//!
//! Every gameplay constant the simulation reads lives here, so a build can
//! ship a different feel without touching the simulation code.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Surface ===
    pub width: f32,
    pub height: f32,

    // === Avatar ===
    pub gravity: f32,
    pub flap_strength: f32,
    pub avatar_radius: f32,
    /// Avatar x as a fraction of `width`
    pub avatar_x_frac: f32,

    // === Obstacles ===
    pub gap: f32,
    pub obstacle_width: f32,
    pub top_min: f32,
    pub top_reserve: f32,

    // === Stream / difficulty ===
    pub start_speed: f32,
    pub speed_step: f32,
    /// Speed ramps every time score hits a multiple of this
    pub speed_step_every: u32,
    /// Upper bound on obstacle speed (None = ramp forever)
    pub max_obstacle_speed: Option<f32>,
    pub spawn_interval_ms: f64,
    pub spawn_offset: f32,
    pub initial_spacing: f32,
    pub retire_margin: f32,

    // === Cosmetic ===
    pub color_tier_every: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            width: SURFACE_WIDTH,
            height: SURFACE_HEIGHT,

            gravity: GRAVITY,
            flap_strength: FLAP_STRENGTH,
            avatar_radius: AVATAR_RADIUS,
            avatar_x_frac: AVATAR_X_FRAC,

            gap: GAP_SIZE,
            obstacle_width: OBSTACLE_WIDTH,
            top_min: TOP_MIN,
            top_reserve: TOP_RESERVE,

            start_speed: START_SPEED,
            speed_step: SPEED_STEP,
            speed_step_every: SPEED_STEP_EVERY,
            max_obstacle_speed: None,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            spawn_offset: SPAWN_OFFSET,
            initial_spacing: INITIAL_SPACING,
            retire_margin: RETIRE_MARGIN,

            color_tier_every: COLOR_TIER_EVERY,
        }
    }
}

impl Tuning {
    /// Tuning for a surface of the given size, other values default
    pub fn for_surface(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Parse tuning from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Avatar start position (x, y), floored to whole pixels
    pub fn avatar_start(&self) -> (f32, f32) {
        (
            (self.width * self.avatar_x_frac).floor(),
            (self.height / 2.0).floor(),
        )
    }

    /// X at which new obstacles appear
    pub fn spawn_x(&self) -> f32 {
        self.width + self.spawn_offset
    }

    /// Half-open range `[lo, hi)` for an obstacle's top height
    pub fn top_height_range(&self) -> (f32, f32) {
        let span = (self.height - self.top_reserve - self.gap).max(0.0);
        (self.top_min, self.top_min + span)
    }

    /// Apply the optional speed cap
    pub fn clamp_speed(&self, speed: f32) -> f32 {
        match self.max_obstacle_speed {
            Some(max) => speed.min(max),
            None => speed,
        }
    }
}
