//! Flap Gates - A single-screen flapping arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (avatar physics, obstacle stream, collisions, score)
//! - `session`: Session lifecycle and best-score bookkeeping
//! - `renderer`: Drawing the game state onto a 2D surface
//! - `platform`: Input events and time source
//! - `persistence`: Best-score storage
//! - `tuning`: Data-driven game balance

pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod sim;
pub mod tuning;

pub use session::Session;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Default logical surface size
    pub const SURFACE_WIDTH: f32 = 320.0;
    pub const SURFACE_HEIGHT: f32 = 480.0;

    /// Avatar defaults
    pub const AVATAR_RADIUS: f32 = 16.0;
    /// Avatar x as a fraction of surface width
    pub const AVATAR_X_FRAC: f32 = 0.28;
    /// Downward acceleration per frame
    pub const GRAVITY: f32 = 0.55;
    /// Velocity set by an impulse (negative is up)
    pub const FLAP_STRENGTH: f32 = -9.0;
    /// Rotation is velocity / this, clamped
    pub const ROTATION_DIVISOR: f32 = 12.0;
    pub const ROTATION_MIN: f32 = -0.6;
    pub const ROTATION_MAX: f32 = 1.2;

    /// Obstacle defaults
    pub const GAP_SIZE: f32 = 150.0;
    pub const OBSTACLE_WIDTH: f32 = 60.0;
    /// Smallest top segment height
    pub const TOP_MIN: f32 = 60.0;
    /// Vertical space reserved outside the random range
    pub const TOP_RESERVE: f32 = 220.0;

    /// Obstacle stream defaults
    pub const START_SPEED: f32 = 2.5;
    pub const SPEED_STEP: f32 = 0.2;
    pub const SPEED_STEP_EVERY: u32 = 10;
    pub const SPAWN_INTERVAL_MS: f64 = 1500.0;
    /// Spawn x is surface width + this
    pub const SPAWN_OFFSET: f32 = 40.0;
    /// Distance between the two pre-seeded obstacles
    pub const INITIAL_SPACING: f32 = 220.0;
    /// Obstacles are culled once their right edge is this far left of 0
    pub const RETIRE_MARGIN: f32 = 50.0;

    /// Score points per avatar color tier
    pub const COLOR_TIER_EVERY: u32 = 5;
    /// Number of avatar colors
    pub const PALETTE_LEN: usize = 8;

    /// Height of the decorative ground band
    pub const GROUND_HEIGHT: f32 = 48.0;
}
