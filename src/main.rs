//! Bridge Runner entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use bridge_runner::assets::web::load_all;
    use bridge_runner::audio::WebAudio;
    use bridge_runner::render::CanvasSurface;
    use bridge_runner::ui::DomUi;
    use bridge_runner::{FrameDecision, Game, GameConfig, Input};

    type WebGame = Game<CanvasSurface, DomUi, WebAudio>;

    /// Read optional overrides from `<canvas data-config='{...}'>`
    fn load_config(canvas: &HtmlCanvasElement) -> GameConfig {
        let Some(json) = canvas.get_attribute("data-config") else {
            return GameConfig::default();
        };
        match GameConfig::from_json(&json) {
            Ok(config) => {
                log::info!("Loaded config overrides from data-config");
                config
            }
            Err(e) => {
                log::warn!("Ignoring data-config: {e}");
                GameConfig::default()
            }
        }
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Bridge Runner starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .ok_or_else(|| JsValue::from_str("no canvas"))?
            .dyn_into()?;

        let config = load_config(&canvas);
        let surface = CanvasSurface::new(&canvas, config.width, config.height)?;
        let ui = DomUi::new(document.clone());

        // Gameplay stays locked behind the loading screen until every fetch settles
        let loaded = load_all().await;
        ui.set_game_over_image(loaded.game_over_src())?;
        let audio = WebAudio::new(
            loaded.music,
            loaded.scream,
            config.music_volume,
            config.sfx_volume,
        );

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(
            config,
            surface,
            loaded.sprites,
            ui,
            audio,
            seed,
        )));

        log::info!("Game ready with seed: {}", seed);

        setup_buttons(&document, game.clone());
        setup_keyboard(&window, game);

        Ok(())
    }

    /// Forward an input and arm the frame loop if the game asks for it
    fn dispatch(game: &Rc<RefCell<WebGame>>, input: Input) {
        let schedule = game.borrow_mut().handle(input);
        if schedule {
            request_animation_frame(game.clone());
        }
    }

    fn setup_buttons(document: &web_sys::Document, game: Rc<RefCell<WebGame>>) {
        for (id, input) in [
            ("startBtn", Input::StartClicked),
            ("restartBtn", Input::RestartClicked),
        ] {
            let Some(btn) = document.get_element_by_id(id) else {
                log::warn!("Missing #{id} button");
                continue;
            };
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                dispatch(&game, input);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_keyboard(window: &web_sys::Window, game: Rc<RefCell<WebGame>>) {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            if event.code() == "Space" {
                event.prevent_default();
                dispatch(&game, Input::Action);
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<WebGame>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<WebGame>>) {
        let decision = game.borrow_mut().frame();
        match decision {
            FrameDecision::Continue => request_animation_frame(game),
            FrameDecision::Halt => log::debug!("Frame loop halted"),
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run().await
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use bridge_runner::GameConfig;
    use bridge_runner::sim::{GameSession, TickOutcome, tick};

    /// Give up on runs that somehow never fall
    const MAX_TICKS: u64 = 1_000_000;

    env_logger::init();
    log::info!("Bridge Runner (native) starting...");
    log::info!("Native mode runs a headless session - run with `trunk serve` for the web version");

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });

    let mut session = GameSession::new(GameConfig::default(), seed);
    log::info!("Headless run with seed {}", seed);

    while session.score < MAX_TICKS {
        if let TickOutcome::GameOver { distance } = tick(&mut session) {
            println!("seed {seed}: fell after {distance}m ({} ticks)", session.score);
            return;
        }
    }
    println!("seed {seed}: still running after {}", session.distance_label());
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
