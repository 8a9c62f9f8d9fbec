//! Reveal Breakout entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, HtmlElement, KeyboardEvent, PointerEvent, TouchEvent};

    use reveal_breakout::consts::WIN_DELAY_MS;
    use reveal_breakout::platform::{Direction, InputState};
    use reveal_breakout::renderer::{CanvasSurface, render};
    use reveal_breakout::settings::{Settings, preset_from_query};
    use reveal_breakout::sim::{GameEvent, GameState, StepOutcome, step};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        settings: Settings,
        surface: CanvasSurface,
        input: InputState,
        /// An animation frame is scheduled
        loop_running: bool,
    }

    impl Game {
        /// Paint the current state, then advance one frame
        fn frame(&mut self) -> (StepOutcome, Vec<GameEvent>) {
            render(&self.state, &mut self.surface);
            let outcome = step(&mut self.state, &self.input);
            (outcome, self.state.drain_events())
        }

        /// Reset game state for restart
        fn restart(&mut self) {
            self.state.reset();
            self.input.clear();
            log::info!("Game restarted");
        }
    }

    fn document() -> Option<Document> {
        web_sys::window()?.document()
    }

    /// Write the revealed buffer into the message area
    fn update_message_area(text: &str) {
        match document().and_then(|d| d.get_element_by_id("message-area")) {
            Some(el) => el.set_text_content(Some(text)),
            None => log::warn!("#message-area not found"),
        }
    }

    /// Show or hide the restart button
    fn set_restart_visible(visible: bool) {
        let Some(btn) = document()
            .and_then(|d| d.get_element_by_id("restart-btn"))
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            log::warn!("#restart-btn not found");
            return;
        };
        let display = if visible { "block" } else { "none" };
        let _ = btn.style().set_property("display", display);
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Reveal Breakout starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let mut settings = Settings::load();
        if let Some(preset) = window
            .location()
            .search()
            .ok()
            .and_then(|query| preset_from_query(&query))
        {
            settings.apply_preset(preset);
            settings.save();
            log::info!("Preset from URL: {}", preset.as_str());
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let viewport_width = window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or(settings.max_viewport_width as f64) as f32;
        let (width, height) = settings.canvas_size(viewport_width);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let surface = CanvasSurface::new(&canvas).expect("2d context unavailable");
        let state = GameState::new(&settings, width, height);
        log::info!(
            "Canvas {}x{}, {} blocks in {} rows",
            width,
            height,
            state.message.len(),
            state.layout.rows
        );

        update_message_area(&state.revealed_text());
        set_restart_visible(false);

        let game = Rc::new(RefCell::new(Game {
            state,
            settings,
            surface,
            input: InputState::default(),
            loop_running: false,
        }));

        setup_keyboard(game.clone());
        setup_touch_controls(&document, game.clone());
        setup_blur_release(game.clone());
        setup_restart_button(&document, game.clone());

        start_loop(game);

        log::info!("Reveal Breakout running!");
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) {
        let Some(document) = document() else {
            return;
        };

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().input.key_down(&event.key());
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().input.key_up(&event.key());
            });
            let _ = document
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// On-screen arrow buttons: touch and pointer press/release
    fn setup_touch_controls(document: &Document, game: Rc<RefCell<Game>>) {
        for dir in [Direction::Left, Direction::Right] {
            let Some(el) = document.get_element_by_id(dir.affordance_id()) else {
                log::warn!("#{} not found, touch control disabled", dir.affordance_id());
                continue;
            };

            for (name, pressed) in [("touchstart", true), ("touchend", false), ("touchcancel", false)] {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                    event.prevent_default();
                    let mut g = game.borrow_mut();
                    if pressed {
                        g.input.press(dir);
                    } else {
                        g.input.release(dir);
                    }
                });
                let _ = el.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
                closure.forget();
            }

            for (name, pressed) in [("pointerdown", true), ("pointerup", false), ("pointerleave", false)] {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: PointerEvent| {
                    let mut g = game.borrow_mut();
                    if pressed {
                        g.input.press(dir);
                    } else {
                        g.input.release(dir);
                    }
                });
                let _ = el.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
    }

    /// Key-up never arrives after the window loses focus, so drop held intents
    fn setup_blur_release(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            game.borrow_mut().input.clear();
        });
        let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_restart_button(document: &Document, game: Rc<RefCell<Game>>) {
        let Some(btn) = document.get_element_by_id("restart-btn") else {
            log::warn!("#restart-btn not found, restart disabled");
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            let text = {
                let mut g = game.borrow_mut();
                g.restart();
                g.state.revealed_text()
            };
            update_message_area(&text);
            set_restart_visible(false);
            start_loop(game.clone());
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Start the frame loop unless one is already scheduled
    fn start_loop(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            if g.loop_running {
                return;
            }
            g.loop_running = true;
        }
        request_animation_frame(game);
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        let (outcome, events) = game.borrow_mut().frame();

        for event in events {
            match event {
                GameEvent::BlockCleared { .. } => {
                    let text = game.borrow().state.revealed_text();
                    update_message_area(&text);
                }
                GameEvent::AllCleared => schedule_win(game.clone()),
                GameEvent::BallLost => set_restart_visible(true),
                GameEvent::Won => {}
            }
        }

        match outcome {
            StepOutcome::Continue => request_animation_frame(game),
            StepOutcome::Halt => game.borrow_mut().loop_running = false,
        }
    }

    /// Surface the win after a short delay so the last clear gets painted
    fn schedule_win(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move || {
            let notice = {
                let mut g = game.borrow_mut();
                let won = g.state.declare_win();
                g.state.drain_events();
                won.map(|_| g.settings.win_text())
            };
            if let Some(text) = notice {
                if let Some(window) = web_sys::window() {
                    let _ = window.alert_with_message(&text);
                }
                set_restart_visible(true);
            }
        });
        if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            WIN_DELAY_MS as i32,
        ) {
            log::error!("Failed to schedule win notification: {:?}", e);
        }
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Reveal Breakout (native) starting...");
    log::info!("Native mode plays a headless demo - run with `trunk serve` for the web version");

    headless::run(std::env::args().skip(1).collect());
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless demo: the autopilot plays at 60 simulated frames per second
#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use serde::Serialize;

    use reveal_breakout::consts::{FRAME_MS, WIN_DELAY_MS};
    use reveal_breakout::platform::Autopilot;
    use reveal_breakout::renderer::{RecordingSurface, render};
    use reveal_breakout::settings::{Preset, Settings};
    use reveal_breakout::sim::{BlockStatus, GameEvent, GameState, GameStatus, StepOutcome, step};

    /// Five simulated minutes
    const MAX_FRAMES: u64 = 60 * 60 * 5;

    /// Viewport width assumed for the headless canvas
    const VIEWPORT_WIDTH: f32 = 1000.0;

    #[derive(Debug, Serialize)]
    struct Summary {
        preset: Preset,
        frames: u64,
        status: GameStatus,
        won: bool,
        cleared_blocks: usize,
        revealed: String,
    }

    /// Args: `[preset] [message]`
    pub fn run(args: Vec<String>) {
        let mut settings = Settings::load();
        if let Some(preset) = args.first().and_then(|s| Preset::from_str(s)) {
            settings.apply_preset(preset);
        }
        if let Some(message) = args.get(1) {
            settings = settings.with_message(message.as_str());
        }

        let (width, height) = settings.canvas_size(VIEWPORT_WIDTH);
        let mut state = GameState::new(&settings, width, height);
        let mut surface = RecordingSurface::default();
        let pilot = Autopilot::default();

        log::info!(
            "{} preset, canvas {}x{}, {} rows",
            settings.preset.as_str(),
            width,
            height,
            state.layout.rows
        );

        let mut now_ms = 0.0;
        let mut win_due: Option<f64> = None;
        let mut won = false;

        while state.frame < MAX_FRAMES {
            if win_due.is_some_and(|due| now_ms >= due) {
                win_due = None;
                if let Some(message) = state.declare_win() {
                    println!("{}{}", settings.win_prefix, message);
                    won = true;
                }
            }

            surface.clear();
            render(&state, &mut surface);
            let input = pilot.intents(&state);
            let outcome = step(&mut state, &input);

            for event in state.drain_events() {
                match event {
                    GameEvent::BlockCleared { .. } => {
                        log::info!("{}", state.revealed_text());
                    }
                    GameEvent::AllCleared => {
                        win_due = Some(now_ms + WIN_DELAY_MS as f64);
                    }
                    GameEvent::BallLost => log::info!("Game over"),
                    GameEvent::Won => {}
                }
            }

            if outcome == StepOutcome::Halt {
                break;
            }
            now_ms += FRAME_MS;
        }

        let summary = Summary {
            preset: settings.preset,
            frames: state.frame,
            status: state.status,
            won,
            cleared_blocks: state
                .blocks
                .iter()
                .filter(|b| b.char_index.is_some() && b.status == BlockStatus::Cleared)
                .count(),
            revealed: state.revealed_text(),
        };
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{}", json),
            Err(e) => log::error!("Failed to serialize summary: {}", e),
        }
    }
}
