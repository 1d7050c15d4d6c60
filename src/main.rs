//! Flap Gates entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, HtmlElement, KeyboardEvent, MouseEvent, TouchEvent};

    use flap_gates::Session;
    use flap_gates::persistence::LocalStorageStore;
    use flap_gates::platform::{Clock, InputEvent, PerformanceClock, event_for_key};
    use flap_gates::renderer::{CanvasSurface, Surface, draw_scene};
    use flap_gates::sim::GamePhase;
    use flap_gates::tuning::Tuning;

    /// Game instance holding all state
    struct Game {
        session: Session<LocalStorageStore>,
        surface: CanvasSurface,
        clock: PerformanceClock,
        restart_btn: Option<HtmlElement>,
    }

    impl Game {
        /// Draw the current state
        fn render(&mut self) {
            let now = self.clock.now_ms();
            draw_scene(&mut self.surface, &self.session.state, now);
        }

        /// Show the restart control only after a session ended
        fn update_restart_button(&self) {
            if let Some(btn) = &self.restart_btn {
                let display = if self.session.phase() == GamePhase::Ended {
                    "block"
                } else {
                    "none"
                };
                let _ = btn.style().set_property("display", display);
            }
        }

        /// Feed an input event; returns true if a frame chain must start
        fn input(&mut self, event: InputEvent) -> bool {
            let now = self.clock.now_ms();
            let started = self.session.handle_input(event, now);
            if started {
                self.update_restart_button();
            }
            started
        }
    }

    /// Tuning from the canvas' `data-tuning` JSON, else defaults sized to the canvas
    fn load_tuning(canvas: &HtmlCanvasElement, surface: &CanvasSurface) -> Tuning {
        let size = surface.size();
        let base = Tuning::for_surface(size.x, size.y);

        let Some(json) = canvas.get_attribute("data-tuning") else {
            return base;
        };
        match Tuning::from_json(&json) {
            Ok(tuning) => Tuning {
                width: size.x,
                height: size.y,
                ..tuning
            },
            Err(e) => {
                log::warn!("Ignoring invalid data-tuning: {}", e);
                base
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Flap Gates starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("c")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let surface = CanvasSurface::new(&canvas).expect("no 2d context");
        let tuning = load_tuning(&canvas, &surface);

        let restart_btn = document
            .get_element_by_id("restartBtn")
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        if restart_btn.is_none() {
            log::warn!("No restart button found");
        }

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game {
            session: Session::new(seed, tuning, LocalStorageStore::open()),
            surface,
            clock: PerformanceClock::new(),
            restart_btn,
        }));

        {
            let mut g = game.borrow_mut();
            g.update_restart_button();
            g.render();
        }

        setup_input_handlers(&canvas, game.clone());
        setup_restart_button(game);

        log::info!("Flap Gates ready (seed {})", seed);
    }

    /// Route an input event and start the frame chain if a session began
    fn dispatch(game: &Rc<RefCell<Game>>, event: InputEvent) {
        let started = game.borrow_mut().input(event);
        if started {
            request_animation_frame(game.clone());
        }
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Keyboard
        {
            let game = game.clone();
            let window = web_sys::window().expect("no window");
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(input) = event_for_key(&event.code()) {
                    event.prevent_default();
                    dispatch(&game, input);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                event.prevent_default();
                dispatch(&game, InputEvent::Activate);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                dispatch(&game, InputEvent::Activate);
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_restart_button(game: Rc<RefCell<Game>>) {
        let btn = game.borrow().restart_btn.clone();
        if let Some(btn) = btn {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                event.prevent_default();
                dispatch(&game, InputEvent::Restart);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// One tick plus one render; re-requests itself only while running
    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let keep_running = {
            let mut g = game.borrow_mut();
            let keep_running = g.session.frame(time);
            g.render();
            if !keep_running {
                g.update_restart_button();
            }
            keep_running
        };

        if keep_running {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Flap Gates (native) starting...");
    log::info!("Native mode runs a headless autopilot session - use `trunk serve` to play");

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });

    let score = autopilot::run(seed);
    println!("Autopilot (seed {}) scored {}", seed, score);
}

#[cfg(not(target_arch = "wasm32"))]
mod autopilot {
    use flap_gates::Session;
    use flap_gates::persistence::MemoryStore;
    use flap_gates::platform::{Clock, InputEvent, ManualClock};
    use flap_gates::sim::GameState;
    use flap_gates::tuning::Tuning;

    /// Frame length at 60 Hz
    const FRAME_MS: f64 = 1000.0 / 60.0;
    /// Stop after ten minutes of game time
    const MAX_FRAMES: u32 = 36_000;

    /// Play one session, flapping whenever the avatar sinks below its target
    pub fn run(seed: u64) -> u32 {
        let clock = ManualClock::new(0.0);
        let mut session = Session::new(seed, Tuning::default(), MemoryStore::new());
        session.handle_input(InputEvent::Activate, clock.now_ms());

        for _ in 0..MAX_FRAMES {
            clock.advance(FRAME_MS);
            if should_flap(&session.state) {
                session.handle_input(InputEvent::Activate, clock.now_ms());
            }
            if !session.frame(clock.now_ms()) {
                break;
            }
        }

        session.state.score
    }

    /// Aim a little below the middle of the next gap
    fn should_flap(state: &GameState) -> bool {
        let avatar = &state.avatar;
        let target = state
            .obstacles()
            .iter()
            .find(|o| o.right_edge() + avatar.radius >= avatar.pos.x)
            .map(|o| (o.top_height + o.bottom_y) / 2.0 + 20.0)
            .unwrap_or(state.tuning.height / 2.0);
        avatar.pos.y > target && avatar.vel_y >= 0.0
    }
}
