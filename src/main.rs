//! Paddle Court entry point
//!
//! Browser: wires the canvas, pointer, keyboard and start/stop button to the
//! game and drives it from an interval timer.
//! Native: plays a headless match on simulated time and prints the score.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use paddle_court::platform::IntervalScheduler;
    use paddle_court::renderer::CanvasSurface;
    use paddle_court::{Game, GameConfig, LoopController};

    /// Canvas element id
    const CANVAS_ID: &str = "pong";
    /// Start/stop button id
    const TOGGLE_BUTTON_ID: &str = "toggle-pong";

    /// Everything the browser callbacks share
    struct App {
        game: Game,
        surface: CanvasSurface,
        controller: LoopController<IntervalScheduler>,
    }

    impl App {
        fn frame(&mut self) {
            self.game.frame(&mut self.surface);
        }

        fn toggle(&mut self) {
            let (w, h) = (self.game.width(), self.game.height());
            self.controller.toggle(&mut self.surface, w, h);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);
        log::info!("Paddle Court starting...");

        let Some(window) = web_sys::window() else {
            log::error!("No window");
            return;
        };
        let Some(document) = window.document() else {
            log::error!("No document");
            return;
        };
        let Some(canvas) = document
            .get_element_by_id(CANVAS_ID)
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("Canvas #{} not found", CANVAS_ID);
            return;
        };

        // Size the drawing buffer to the laid-out canvas once
        let rect = canvas.get_bounding_client_rect();
        let (width, height) = (rect.width() as u32, rect.height() as u32);
        canvas.set_width(width);
        canvas.set_height(height);

        let config = canvas
            .get_attribute("data-config")
            .map(|json| GameConfig::from_json_or_default(&json))
            .unwrap_or_default();

        let Some(surface) = CanvasSurface::new(&canvas) else {
            log::error!("Canvas has no 2D context");
            return;
        };

        let seed = js_sys::Date::now() as u64;
        let game = Game::new(config, width as f32, height as f32, seed);
        let auto_start = game.config.auto_start;

        let app = Rc::new_cyclic(|weak: &Weak<RefCell<App>>| {
            let weak = weak.clone();
            let tick = Closure::<dyn FnMut()>::new(move || {
                if let Some(app) = weak.upgrade() {
                    app.borrow_mut().frame();
                }
            });
            RefCell::new(App {
                game,
                surface,
                controller: LoopController::new(IntervalScheduler::new(window.clone(), tick)),
            })
        });

        setup_pointer(app.clone(), &canvas);
        setup_keyboard(app.clone(), &window);
        setup_toggle_button(app.clone(), &document);

        if auto_start {
            app.borrow_mut().controller.start();
        }

        log::info!("Paddle Court ready ({}x{})", width, height);
    }

    fn setup_pointer(app: Rc<RefCell<App>>, canvas: &HtmlCanvasElement) {
        let target = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let top = target.get_bounding_client_rect().top();
            let y = (event.client_y() as f64 - top) as f32;
            app.borrow_mut().game.pointer_moved(y);
        });
        let _ = canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_keyboard(app: Rc<RefCell<App>>, window: &web_sys::Window) {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            if app.borrow_mut().game.key_pressed(&event.code()) {
                // Keep the spacebar from scrolling the page
                event.prevent_default();
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_toggle_button(app: Rc<RefCell<App>>, document: &web_sys::Document) {
        let Some(btn) = document.get_element_by_id(TOGGLE_BUTTON_ID) else {
            log::info!("No #{} button; start/stop control disabled", TOGGLE_BUTTON_ID);
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            app.borrow_mut().toggle();
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
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

/// Native usage: `paddle-court [config.json] [ticks]`
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::{SystemTime, UNIX_EPOCH};

    use paddle_court::consts::FRAMES_PER_SECOND;
    use paddle_court::renderer::DrawList;
    use paddle_court::{Game, GameConfig};

    /// Court size for headless matches
    const WIDTH: f32 = 800.0;
    const HEIGHT: f32 = 600.0;

    env_logger::init();
    log::info!("Paddle Court (native, headless) starting...");

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => GameConfig::from_path(&path).unwrap_or_else(|e| {
            log::warn!("{e}; using default config");
            GameConfig::default()
        }),
        None => GameConfig::default(),
    };
    let ticks: u64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(60 * FRAMES_PER_SECOND as u64);

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default();

    let mut game = Game::new(config, WIDTH, HEIGHT, seed);
    let mut surface = DrawList::new();
    let played = game.play_headless(&mut surface, ticks);

    let scores = game.scores();
    log::info!("Played {} ticks", played);
    match serde_json::to_string(&scores) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize scores: {e}"),
    }
}
