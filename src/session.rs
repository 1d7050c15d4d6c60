//! Session lifecycle
//!
//! Owns the game state and the best-score store, turns input events into
//! state transitions (Ready -> Running -> Ended -> Running) and tells the
//! host whether another frame is wanted.

use crate::persistence::{KeyValueStore, load_best, save_best};
use crate::platform::InputEvent;
use crate::sim::{GameEvent, GamePhase, GameState, tick};
use crate::tuning::Tuning;

/// One game plus its best-score persistence
pub struct Session<S: KeyValueStore> {
    pub state: GameState,
    store: S,
}

impl<S: KeyValueStore> Session<S> {
    /// Create a session in the `Ready` phase
    pub fn new(seed: u64, tuning: Tuning, store: S) -> Self {
        let mut state = GameState::new(seed, tuning);
        state.best_score = load_best(&store);
        log::info!(
            "Session created (seed {}, best score {})",
            seed,
            state.best_score
        );
        Self { state, store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// Reinitialize everything and start running at `now`
    pub fn reset(&mut self, now: f64) {
        let best = load_best(&self.store);
        self.state.reset(now, best);
        log::info!("Session started (best score {})", best);
    }

    /// Persist the score if it beats the best; returns true on a new best
    pub fn record_game_over(&mut self) -> bool {
        if self.state.score > self.state.best_score {
            self.state.best_score = self.state.score;
            save_best(&self.store, self.state.best_score);
            true
        } else {
            false
        }
    }

    /// Apply an input event
    ///
    /// Returns true if a session just started and the host must begin
    /// requesting frames.
    pub fn handle_input(&mut self, event: InputEvent, now: f64) -> bool {
        match (event, self.state.phase) {
            (InputEvent::Activate, GamePhase::Running) => {
                self.state.avatar.apply_impulse(&self.state.tuning);
                false
            }
            (_, GamePhase::Ready) | (_, GamePhase::Ended) => {
                self.reset(now);
                true
            }
            // Restart while running would start a second frame chain
            (InputEvent::Restart, GamePhase::Running) => false,
        }
    }

    /// Run one frame's simulation at `now`
    ///
    /// Returns true while the host should keep requesting frames.
    pub fn frame(&mut self, now: f64) -> bool {
        let outcome = tick(&mut self.state, now);

        for event in &outcome.events {
            match event {
                GameEvent::Spawned => log::debug!("Obstacle spawned"),
                GameEvent::Retired(n) => log::debug!("{} obstacle(s) retired", n),
                GameEvent::Scored { score } => log::debug!("Score {}", score),
                GameEvent::SpeedUp { speed } => log::info!("Obstacle speed now {:.1}", speed),
                GameEvent::Died => {}
            }
        }

        if outcome.ended() {
            let new_best = self.record_game_over();
            log::info!(
                "Game over: score {}, best {}{}",
                self.state.score,
                self.state.best_score,
                if new_best { " (new best)" } else { "" }
            );
        }

        self.state.is_running()
    }
}
