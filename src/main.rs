//! Orb Catcher entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Element, HtmlCanvasElement, KeyboardEvent};

    use orb_catcher::platform::{FixedStep, Key, KeyboardState};
    use orb_catcher::renderer::{DrawList, RenderState, TextRun};
    use orb_catcher::sim::{FrameInput, Game, autopilot};
    use orb_catcher::Settings;

    /// Game instance holding all state
    struct App {
        game: Game,
        keyboard: KeyboardState,
        canvas: DrawList,
        render_state: Option<RenderState>,
        last_time: f64,
        /// Autopilot plays instead of the keyboard
        idle_mode: bool,
        /// DOM container for text runs
        overlay: Option<Element>,
        /// CSS pixels per logical pixel
        overlay_scale: f32,
        /// Text runs currently in the DOM
        shown_texts: Vec<TextRun>,
    }

    impl App {
        fn new(game: Game) -> Self {
            Self {
                game,
                keyboard: KeyboardState::new(),
                canvas: DrawList::new(),
                render_state: None,
                last_time: 0.0,
                idle_mode: false,
                overlay: None,
                overlay_scale: 1.0,
                shown_texts: Vec::new(),
            }
        }

        /// Input -> update -> draw for one animation frame
        fn frame(&mut self, time: f64) {
            let dt = if self.last_time > 0.0 {
                ((time - self.last_time) / 1000.0) as f32
            } else {
                FixedStep::SIXTY_HZ.0
            };
            self.last_time = time;
            let clock = FixedStep::measured(dt);

            let input = if self.idle_mode {
                autopilot::plan(&self.game)
            } else {
                FrameInput::poll(&self.keyboard)
            };
            self.game.input(&input, &clock);
            self.game.update(&clock);
            self.keyboard.end_frame();

            self.canvas.begin_frame();
            self.game.draw(&mut self.canvas);
            self.render();
            self.update_overlay();
        }

        /// Render the current frame
        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&self.canvas) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Mirror the draw list's text runs into the DOM overlay
        fn update_overlay(&mut self) {
            let Some(overlay) = self.overlay.as_ref() else {
                return;
            };
            if self.canvas.texts() == self.shown_texts.as_slice() {
                return;
            }
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            overlay.set_inner_html("");
            let scale = self.overlay_scale;
            for run in self.canvas.texts() {
                let Ok(el) = document.create_element("div") else {
                    continue;
                };
                let [r, g, b, a] = run.color;
                let style = format!(
                    "position:absolute;white-space:pre;left:{:.1}px;top:{:.1}px;\
                     font:{:.1}px 'Courier New',Courier,monospace;letter-spacing:{:.1}px;\
                     color:rgba({},{},{},{:.2})",
                    run.pos.x * scale,
                    run.pos.y * scale,
                    run.size * scale,
                    run.spacing * scale,
                    (r * 255.0) as u8,
                    (g * 255.0) as u8,
                    (b * 255.0) as u8,
                    a,
                );
                let _ = el.set_attribute("style", &style);
                el.set_text_content(Some(&run.text));
                let _ = overlay.append_child(&el);
            }
            self.shown_texts = self.canvas.texts().to_vec();
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Orb Catcher starting...");

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

        // Set canvas size
        let dpr = window.device_pixel_ratio();
        let client_w = canvas.client_width();
        let client_h = canvas.client_height();
        let width = (client_w as f64 * dpr) as u32;
        let height = (client_h as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        // Initialize game
        let settings = Settings::load();
        let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        let logical = (settings.screen_width, settings.screen_height);
        let mut app = App::new(Game::new(settings, seed));
        app.overlay = document.get_element_by_id("overlay");
        app.overlay_scale = client_w as f32 / logical.0;
        app.game.start(&mut app.canvas);
        let app = Rc::new(RefCell::new(app));

        log::info!("Game initialized with seed: {}", seed);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        match RenderState::new(surface, &adapter, width, height, logical).await {
            Ok(render_state) => app.borrow_mut().render_state = Some(render_state),
            Err(e) => log::error!("Failed to create device: {}", e),
        }

        setup_input_handlers(app.clone());
        setup_shutdown(app.clone());

        // Start game loop
        request_animation_frame(app);

        log::info!("Orb Catcher running!");
    }

    fn setup_input_handlers(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();

        // Key down
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut a = app.borrow_mut();
                let key = event.key();
                if let Some(k) = Key::from_dom_key(&key) {
                    // Keep arrows and space from scrolling the page
                    event.prevent_default();
                    a.keyboard.key_down(k);
                } else if (key == "i" || key == "I") && !event.repeat() {
                    a.idle_mode = !a.idle_mode;
                    log::info!("Idle mode: {}", a.idle_mode);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(k) = Key::from_dom_key(&event.key()) {
                    app.borrow_mut().keyboard.key_up(k);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur: key-up events are lost while unfocused
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                app.borrow_mut().keyboard.release_all();
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_shutdown(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            app.borrow_mut().game.finish();
        });
        let _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        app.borrow_mut().frame(time);
        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

/// Headless run length: five minutes at 60 fps
#[cfg(not(target_arch = "wasm32"))]
const HEADLESS_FRAMES: u32 = 60 * 60 * 5;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use orb_catcher::platform::FixedStep;
    use orb_catcher::renderer::DrawList;
    use orb_catcher::sim::{Game, GamePhase, autopilot};
    use orb_catcher::Settings;

    env_logger::init();
    log::info!("Orb Catcher (native) starting...");
    log::info!("Native mode plays a headless autopilot match - run with `trunk serve` for the web version");

    let settings = Settings::load();
    let seed = settings.seed.unwrap_or_else(time_seed);
    let mut game = Game::new(settings, seed);
    let mut canvas = DrawList::new();
    let clock = FixedStep::SIXTY_HZ;

    game.start(&mut canvas);
    let mut matches = 0u32;
    for frame in 0..HEADLESS_FRAMES {
        let was_playing = game.phase == GamePhase::Playing;

        let input = autopilot::plan(&game);
        game.input(&input, &clock);
        game.update(&clock);
        canvas.begin_frame();
        game.draw(&mut canvas);

        if !was_playing && game.phase == GamePhase::Playing {
            matches += 1;
        }
        if frame % 600 == 0 {
            log::info!(
                "t={:>3}s phase={:?} score={} orbs={} interval={:.3}s",
                frame / 60,
                game.phase,
                game.score,
                game.orbs.len(),
                game.spawn_interval()
            );
        }
    }

    for run in canvas.texts() {
        log::info!("HUD: {}", run.text);
    }
    log::info!(
        "Headless run done (seed {}): {} match(es), score {}, caught {}, wrong {}, dropped {}",
        game.seed(),
        matches,
        game.score,
        game.stats.caught,
        game.stats.wrong,
        game.stats.dropped
    );
    game.finish();
}

#[cfg(not(target_arch = "wasm32"))]
fn time_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
