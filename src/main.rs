//! Flippy Bird entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, PointerEvent, TouchEvent};

    use flippy_bird::assets::NoAssets;
    use flippy_bird::audio::{AudioManager, WebAudio};
    use flippy_bird::consts::SIM_DT;
    use flippy_bird::platform::{KeyAction, Runner, key_action};
    use flippy_bird::renderer::Renderer;
    use flippy_bird::renderer::canvas::CanvasRenderer;
    use flippy_bird::sim::GameState;
    use flippy_bird::{AssetCatalog, Settings};

    /// Game instance holding all state
    struct Game {
        runner: Runner,
        renderer: CanvasRenderer,
        audio: AudioManager,
        // Kept apart from the manager so gestures can unlock the context
        web_audio: WebAudio,
        assets: AssetCatalog,
        last_time: f64,
    }

    impl Game {
        /// Any activate source: key, click or tap
        fn activate(&mut self) {
            self.web_audio.resume();
            self.runner.queue_activate();
        }

        fn update(&mut self, dt: f32) {
            let events = self.runner.frame(dt);
            self.audio.play_events(&events);
        }

        fn render(&mut self) {
            let view = self.runner.view();
            self.renderer.draw(&view, &self.assets);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Flippy Bird starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let settings = Settings::load();
        let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        let state = GameState::new(seed);

        // Backing store at device resolution, drawn in world units
        let dpr = window.device_pixel_ratio();
        canvas.set_width((state.world.width as f64 * dpr) as u32);
        canvas.set_height((state.world.height as f64 * dpr) as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let web_audio = WebAudio::new();
        let mut runner = Runner::new(state);
        runner.set_autopilot(settings.autopilot);

        let game = Rc::new(RefCell::new(Game {
            runner,
            renderer: CanvasRenderer::new(ctx, dpr),
            audio: AudioManager::with_settings(Box::new(web_audio.clone()), &settings),
            web_audio,
            assets: AssetCatalog::load(&NoAssets),
            last_time: 0.0,
        }));

        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(&canvas, game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Flippy Bird running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Pointer down covers mouse and pen
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: PointerEvent| {
                game.borrow_mut().activate();
            });
            let _ = canvas
                .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start: swallow the synthetic mouse events and scrolling
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard
        {
            let game = game.clone();
            let Some(window) = web_sys::window() else {
                return;
            };
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut g = game.borrow_mut();
                match key_action(&event.key(), event.repeat()) {
                    KeyAction::Activate => {
                        event.prevent_default();
                        g.activate();
                    }
                    KeyAction::ToggleAutopilot => {
                        let on = !g.runner.autopilot();
                        g.runner.set_autopilot(on);
                        log::info!("Autopilot: {}", on);
                    }
                    KeyAction::Ignore => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
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

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            // Calculate delta time
            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt);
            g.render();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::{SystemTime, UNIX_EPOCH};

    use flippy_bird::assets::{AssetResolver, DirResolver, RelativeResolver};
    use flippy_bird::audio::{AudioManager, LogAudio};
    use flippy_bird::platform::native::{FrameBudget, LogRenderer, SleepClock};
    use flippy_bird::platform::{Runner, run};
    use flippy_bird::sim::GameState;
    use flippy_bird::{AssetCatalog, Settings};

    env_logger::init();
    log::info!("Flippy Bird (native) starting...");

    let settings = Settings::load();

    let resolver: Box<dyn AssetResolver> = match &settings.asset_dir {
        Some(dir) => Box::new(DirResolver::new(dir)),
        None => Box::new(RelativeResolver),
    };
    let assets = AssetCatalog::load(resolver.as_ref());

    let seed = settings.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });
    log::info!("Game initialized with seed: {}", seed);

    // No window natively, so nothing can press activate
    log::info!("Running headless with the autopilot");
    let mut runner = Runner::new(GameState::new(seed));
    runner.set_autopilot(true);

    let mut audio = AudioManager::with_settings(Box::new(LogAudio::new(assets.clone())), &settings);
    let mut renderer = LogRenderer::default();

    let frames = run(
        &mut runner,
        &mut FrameBudget::new(settings.demo_frames),
        &mut SleepClock::default(),
        &mut renderer,
        &mut audio,
        &assets,
    );

    log::info!(
        "Played {} runs over {} frames, best score {}",
        renderer.runs(),
        frames,
        runner.state().score.best
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
