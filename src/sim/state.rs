//! Game state and core simulation types

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::Rect;
use super::stream::ObstacleStream;
use crate::consts::{PALETTE_LEN, ROTATION_DIVISOR, ROTATION_MAX, ROTATION_MIN};
use crate::tuning::Tuning;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Scene is shown, waiting for the first activation
    Ready,
    /// Active gameplay
    Running,
    /// Avatar died; waiting for a restart
    Ended,
}

/// The player's avatar
#[derive(Debug, Clone)]
pub struct Avatar {
    pub pos: Vec2,
    pub vel_y: f32,
    /// Cosmetic tilt in radians, derived from `vel_y`
    pub rotation: f32,
    pub radius: f32,
    pub alive: bool,
    /// Index into the avatar palette
    pub color_tier: usize,
}

impl Avatar {
    /// Create an avatar at the configured start position
    pub fn new(tuning: &Tuning) -> Self {
        let (x, y) = tuning.avatar_start();
        Self {
            pos: Vec2::new(x, y),
            vel_y: 0.0,
            rotation: 0.0,
            radius: tuning.avatar_radius,
            alive: true,
            color_tier: 0,
        }
    }

    /// Flap: set vertical velocity to the impulse constant
    pub fn apply_impulse(&mut self, tuning: &Tuning) {
        if self.alive {
            self.vel_y = tuning.flap_strength;
        }
    }

    /// Apply one frame of gravity and clamp to the surface
    pub fn advance(&mut self, tuning: &Tuning) {
        if !self.alive {
            return;
        }

        self.vel_y += tuning.gravity;
        self.pos.y += self.vel_y;
        self.rotation = (self.vel_y / ROTATION_DIVISOR).clamp(ROTATION_MIN, ROTATION_MAX);

        // Floor is terminal
        if self.pos.y + self.radius > tuning.height {
            self.pos.y = tuning.height - self.radius;
            self.alive = false;
        }
        // Ceiling just stops the climb
        if self.pos.y - self.radius < 0.0 {
            self.pos.y = self.radius;
            self.vel_y = 0.0;
        }
    }

    /// Recompute the color tier for a score
    pub fn set_color_tier(&mut self, score: u32, tuning: &Tuning) {
        let every = tuning.color_tier_every.max(1);
        self.color_tier = ((score / every) as usize).min(PALETTE_LEN - 1);
    }
}

/// A gated obstacle: a top segment and a bottom segment with a gap between
#[derive(Debug, Clone)]
pub struct Obstacle {
    pub x: f32,
    pub width: f32,
    /// Height of the top segment (gap starts here)
    pub top_height: f32,
    /// Y where the bottom segment begins (gap ends here)
    pub bottom_y: f32,
    /// Surface height, for the bottom segment's extent
    pub floor_y: f32,
    /// Set once the avatar is past this obstacle
    pub passed: bool,
}

impl Obstacle {
    /// Create an obstacle at `x` with a randomized gap position
    pub fn spawn<R: Rng>(x: f32, rng: &mut R, tuning: &Tuning) -> Self {
        let (lo, hi) = tuning.top_height_range();
        let offset = (rng.random::<f32>() * (hi - lo)).floor();
        Self::with_top(x, lo + offset, tuning)
    }

    /// Create an obstacle with a fixed top height
    pub fn with_top(x: f32, top_height: f32, tuning: &Tuning) -> Self {
        Self {
            x,
            width: tuning.obstacle_width,
            top_height,
            bottom_y: top_height + tuning.gap,
            floor_y: tuning.height,
            passed: false,
        }
    }

    /// Translate left by the shared stream speed
    #[inline]
    pub fn advance(&mut self, speed: f32) {
        self.x -= speed;
    }

    #[inline]
    pub fn right_edge(&self) -> f32 {
        self.x + self.width
    }

    /// Top segment, from the ceiling down to the gap
    pub fn top_rect(&self) -> Rect {
        Rect::new(self.x, 0.0, self.width, self.top_height)
    }

    /// Bottom segment, from the gap down to the floor
    pub fn bottom_rect(&self) -> Rect {
        Rect::new(self.x, self.bottom_y, self.width, self.floor_y - self.bottom_y)
    }
}

/// Complete state of one game (deterministic for a given seed and timestamps)
#[derive(Debug, Clone)]
pub struct GameState {
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub avatar: Avatar,
    pub stream: ObstacleStream,
    /// Score of the current session
    pub score: u32,
    /// Best score across sessions, as last loaded or recorded
    pub best_score: u32,
    /// Current horizontal obstacle speed
    pub speed: f32,
}

impl GameState {
    /// Create a game in the `Ready` phase with the opening obstacles laid out
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut stream = ObstacleStream::new(0.0);
        stream.seed_initial(&mut rng, &tuning);

        Self {
            rng,
            avatar: Avatar::new(&tuning),
            stream,
            score: 0,
            best_score: 0,
            speed: tuning.start_speed,
            phase: GamePhase::Ready,
            tuning,
        }
    }

    /// Start a fresh session at time `now` (ms)
    pub fn reset(&mut self, now: f64, best_score: u32) {
        self.avatar = Avatar::new(&self.tuning);
        self.stream = ObstacleStream::new(now);
        self.stream.seed_initial(&mut self.rng, &self.tuning);
        self.score = 0;
        self.best_score = best_score;
        self.speed = self.tuning.start_speed;
        self.avatar.set_color_tier(self.score, &self.tuning);
        self.phase = GamePhase::Running;
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Live obstacles in insertion order
    #[inline]
    pub fn obstacles(&self) -> &[Obstacle] {
        self.stream.obstacles()
    }
}
