//! Per-frame simulation tick
//!
//! Advances the game by exactly one frame. The host renders after the tick
//! returns and decides whether to request another frame.

use super::collision::circle_rect_collision;
use super::state::{GamePhase, GameState};

/// Something that happened during a tick (for logging and effects only)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// A new obstacle entered the stream
    Spawned,
    /// Obstacles left the screen and were dropped
    Retired(usize),
    /// The avatar passed an obstacle
    Scored { score: u32 },
    /// Obstacle speed ramped up
    SpeedUp { speed: f32 },
    /// The avatar hit an obstacle or the floor
    Died,
}

/// Result of a single tick
#[derive(Debug, Clone, Default)]
pub struct TickOutcome {
    pub events: Vec<GameEvent>,
}

impl TickOutcome {
    /// True if the session ended during this tick
    pub fn ended(&self) -> bool {
        self.events.contains(&GameEvent::Died)
    }
}

/// Advance the game state by one frame at timestamp `now` (ms)
pub fn tick(state: &mut GameState, now: f64) -> TickOutcome {
    let mut outcome = TickOutcome::default();

    // Only a running session moves
    if state.phase != GamePhase::Running {
        return outcome;
    }

    if state.stream.maybe_spawn(now, &mut state.rng, &state.tuning) {
        outcome.events.push(GameEvent::Spawned);
    }

    state.avatar.advance(&state.tuning);
    state.stream.advance_all(state.speed);

    let retired = state.stream.retire_offscreen(&state.tuning);
    if retired > 0 {
        outcome.events.push(GameEvent::Retired(retired));
    }

    score_passed(state, &mut outcome);

    let center = state.avatar.pos;
    let radius = state.avatar.radius;
    let hit = state.stream.obstacles().iter().any(|o| {
        circle_rect_collision(center, radius, &o.top_rect())
            || circle_rect_collision(center, radius, &o.bottom_rect())
    });
    if hit {
        state.avatar.alive = false;
    }

    if !state.avatar.alive {
        state.phase = GamePhase::Ended;
        outcome.events.push(GameEvent::Died);
    }

    outcome
}

/// Mark obstacles behind the avatar as passed and update score and speed
fn score_passed(state: &mut GameState, outcome: &mut TickOutcome) {
    let avatar_x = state.avatar.pos.x;
    let every = state.tuning.speed_step_every.max(1);

    for obstacle in state.stream.obstacles_mut() {
        if obstacle.passed || obstacle.right_edge() >= avatar_x {
            continue;
        }
        obstacle.passed = true;
        state.score += 1;
        state.avatar.set_color_tier(state.score, &state.tuning);
        outcome.events.push(GameEvent::Scored { score: state.score });

        if state.score % every == 0 {
            let ramped = state.tuning.clamp_speed(state.speed + state.tuning.speed_step);
            // A cap below the current speed must never slow the stream down
            if ramped > state.speed {
                state.speed = ramped;
                outcome.events.push(GameEvent::SpeedUp { speed: state.speed });
            }
        }
    }
}
