//! Brick Breaker entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use brick_breaker::platform::key_event;
    use brick_breaker::renderer::CanvasRenderer;
    use brick_breaker::{FrameScheduler, Settings};

    type Game = FrameScheduler<CanvasRenderer>;

    pub fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Failed to init logger: {e}").into());
        }

        log::info!("Brick Breaker starting...");

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No document available");
            return;
        };

        let Some(canvas) = document
            .get_element_by_id("canvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("No #canvas element");
            return;
        };

        let ctx = match canvas.get_context("2d") {
            Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
                Ok(ctx) => ctx,
                Err(_) => {
                    log::error!("2d context has an unexpected type");
                    return;
                }
            },
            _ => {
                log::error!("Canvas 2d context unavailable");
                return;
            }
        };

        let settings = Settings::for_surface(canvas.width() as f32, canvas.height() as f32);
        if let Err(e) = settings.validate() {
            log::error!("Canvas too small for the default layout: {}", e);
            return;
        }

        let game = Rc::new(RefCell::new(FrameScheduler::new(
            &settings,
            CanvasRenderer::new(ctx),
        )));
        log::info!(
            "Game initialized on a {} x {} canvas",
            settings.width,
            settings.height
        );

        setup_input_handlers(game.clone());
        setup_rules_overlay();
        setup_restart_button(game.clone());

        request_animation_frame(game);

        log::info!("Brick Breaker running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        for (kind, pressed) in [("keydown", true), ("keyup", false)] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut()
                    .push_input(key_event(&event.key(), pressed));
            });
            if window
                .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
                .is_err()
            {
                log::warn!("Failed to register {} handler", kind);
            }
            closure.forget();
        }
    }

    /// Rules panel: `#rules-btn` shows `#rules`, `#close-btn` hides it
    fn setup_rules_overlay() {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        for (button_id, show) in [("rules-btn", true), ("close-btn", false)] {
            let Some(btn) = document.get_element_by_id(button_id) else {
                log::warn!("No #{} element, rules overlay disabled", button_id);
                continue;
            };
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let rules = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.get_element_by_id("rules"));
                if let Some(rules) = rules {
                    let classes = rules.class_list();
                    let result = if show {
                        classes.add_1("show")
                    } else {
                        classes.remove_1("show")
                    };
                    if result.is_err() {
                        log::warn!("Failed to toggle rules overlay");
                    }
                }
            });
            if btn
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
                .is_err()
            {
                log::warn!("Failed to register #{} click handler", button_id);
            }
            closure.forget();
        }
    }

    fn setup_restart_button(game: Rc<RefCell<Game>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().restart();
            });
            if btn
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
                .is_err()
            {
                log::warn!("Failed to register #restart-btn click handler");
            }
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
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::warn!("Failed to request animation frame: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        game.borrow_mut().on_frame(time);
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::path::Path;

    use anyhow::Context;
    use brick_breaker::renderer::RecordingRenderer;
    use brick_breaker::sim::{InputEvent, Key};
    use brick_breaker::{FrameScheduler, Settings};

    /// Simulated display refresh interval
    const FRAME_MS: f64 = 1000.0 / 60.0;
    /// Frames run when `BRICK_BREAKER_FRAMES` is unset
    const DEFAULT_FRAMES: u64 = 3600;

    pub fn load_settings(path: Option<&Path>) -> anyhow::Result<Settings> {
        let Some(path) = path else {
            return Ok(Settings::default());
        };
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading settings from {}", path.display()))?;
        let settings = Settings::from_json(&json)
            .with_context(|| format!("loading settings from {}", path.display()))?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Sweep the paddle right, then left, every two seconds
    fn scripted_input(frame: u64) -> Option<InputEvent> {
        match frame % 120 {
            0 => Some(InputEvent::pressed(Key::Right)),
            40 => Some(InputEvent::released(Key::Right)),
            60 => Some(InputEvent::pressed(Key::Left)),
            100 => Some(InputEvent::released(Key::Left)),
            _ => None,
        }
    }

    pub fn run(settings: &Settings, frames: u64) -> FrameScheduler<RecordingRenderer> {
        let mut game = FrameScheduler::new(settings, RecordingRenderer::new());
        let mut best: u64 = 0;

        for frame in 0..frames {
            if let Some(event) = scripted_input(frame) {
                game.push_input(event);
            }
            game.on_frame((frame + 1) as f64 * FRAME_MS);
            best = best.max(game.state().score);
        }

        log::info!(
            "Ran {} frames at {} fps, best score {}, final score {}",
            game.frames(),
            game.fps(),
            best,
            game.state().score
        );
        game
    }

    pub fn frame_count() -> anyhow::Result<u64> {
        parse_frame_count(std::env::var("BRICK_BREAKER_FRAMES").ok().as_deref())
    }

    fn parse_frame_count(value: Option<&str>) -> anyhow::Result<u64> {
        match value {
            Some(value) => value
                .parse()
                .with_context(|| format!("BRICK_BREAKER_FRAMES is not a number: {value}")),
            None => Ok(DEFAULT_FRAMES),
        }
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Brick Breaker (native, headless) starting...");
    log::info!("Interactive play runs in the browser - build for wasm32 to play");

    let path = std::env::args().nth(1).map(std::path::PathBuf::from);
    let settings = headless::load_settings(path.as_deref())?;
    let frames = headless::frame_count()?;

    let game = headless::run(&settings, frames);
    println!("{}", serde_json::to_string_pretty(game.state())?);
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
