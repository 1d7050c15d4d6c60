//! Obstacle stream: spawning, advancing and retiring obstacles

use rand::Rng;

use super::state::Obstacle;
use crate::tuning::Tuning;

/// Ordered sequence of live obstacles
///
/// Obstacles are appended at the tail. Because every obstacle moves at the
/// same speed, insertion order is also x order.
#[derive(Debug, Clone, Default)]
pub struct ObstacleStream {
    obstacles: Vec<Obstacle>,
    /// Timestamp (ms) of the last spawn
    pub last_spawn: f64,
}

impl ObstacleStream {
    pub fn new(now: f64) -> Self {
        Self {
            obstacles: Vec::new(),
            last_spawn: now,
        }
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn obstacles_mut(&mut self) -> &mut [Obstacle] {
        &mut self.obstacles
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// Append an obstacle at the tail
    pub fn push(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }

    /// Replace the sequence with the two opening obstacles
    pub fn seed_initial<R: Rng>(&mut self, rng: &mut R, tuning: &Tuning) {
        self.obstacles.clear();
        let x = tuning.spawn_x();
        self.push(Obstacle::spawn(x, rng, tuning));
        self.push(Obstacle::spawn(x + tuning.initial_spacing, rng, tuning));
    }

    /// Spawn one obstacle off-screen right if the interval has elapsed
    ///
    /// Returns true if an obstacle was spawned.
    pub fn maybe_spawn<R: Rng>(&mut self, now: f64, rng: &mut R, tuning: &Tuning) -> bool {
        if now - self.last_spawn > tuning.spawn_interval_ms {
            self.push(Obstacle::spawn(tuning.spawn_x(), rng, tuning));
            self.last_spawn = now;
            true
        } else {
            false
        }
    }

    /// Move every obstacle left by `speed`
    pub fn advance_all(&mut self, speed: f32) {
        for obstacle in &mut self.obstacles {
            obstacle.advance(speed);
        }
    }

    /// Drop obstacles whose right edge is past the retire margin
    ///
    /// Returns how many were removed.
    pub fn retire_offscreen(&mut self, tuning: &Tuning) -> usize {
        let before = self.obstacles.len();
        let limit = -tuning.retire_margin;
        self.obstacles.retain(|o| o.right_edge() > limit);
        before - self.obstacles.len()
    }
}
