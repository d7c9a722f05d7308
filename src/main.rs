//! Rally Pong entry point
//!
//! Browser: wires the `#scene` canvas, DOM listeners and a `setInterval`
//! tick. Native: plays one headless match against a scripted pointer and
//! prints the result.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, MouseEvent, Window};

    use rally_pong::consts::TICK_INTERVAL_MS;
    use rally_pong::hud::{DisplaySink, HudReadout};
    use rally_pong::platform::{Clock, FixedInterval, SystemClock};
    use rally_pong::renderer::WebCanvas;
    use rally_pong::sim::GameSession;
    use rally_pong::{Game, InputEvent};

    type WebGame = Game<WebCanvas, DomSink>;

    /// Writes the HUD readout into the score/timer elements
    struct DomSink {
        document: Document,
    }

    impl DomSink {
        fn set_text(&self, id: &str, text: &str) {
            if let Some(el) = self.document.get_element_by_id(id) {
                el.set_text_content(Some(text));
            }
        }
    }

    impl DisplaySink for DomSink {
        fn show(&mut self, readout: &HudReadout) {
            self.set_text("playerScore", &readout.player_score.to_string());
            self.set_text("npcScore", &readout.npc_score.to_string());
            self.set_text("timer", &readout.seconds_remaining.to_string());
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Rally Pong starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("scene")
            .ok_or("no #scene canvas")?
            .dyn_into()?;

        let now = SystemClock.now_ms();
        let seed = now as u64;
        let session = GameSession::new(seed, now);
        let sink = DomSink {
            document: document.clone(),
        };
        let game = Rc::new(RefCell::new(Game::new(
            session,
            WebCanvas::new(canvas.clone())?,
            sink,
        )));

        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(&canvas, &document, game.clone())?;
        start_tick_loop(&window, game.clone())?;
        game.borrow_mut().start();

        Ok(())
    }

    fn setup_input_handlers(
        canvas: &HtmlCanvasElement,
        document: &Document,
        game: Rc<RefCell<WebGame>>,
    ) -> Result<(), JsValue> {
        // Pointer position relative to the canvas origin
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                game.borrow_mut().handle_event(InputEvent::PointerMove {
                    x: event.offset_x() as f32,
                    y: event.offset_y() as f32,
                });
            });
            canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Keyboard
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().handle_event(InputEvent::KeyDown {
                    key: event.key(),
                    at_ms: js_sys::Date::now(),
                });
            });
            document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn start_tick_loop(window: &Window, game: Rc<RefCell<WebGame>>) -> Result<(), JsValue> {
        let mut scheduler = FixedInterval::new(SystemClock, TICK_INTERVAL_MS);
        let token = scheduler.token();
        let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

        let closure = {
            let handle = handle.clone();
            Closure::<dyn FnMut()>::new(move || {
                scheduler.poll(&mut *game.borrow_mut());
                if token.is_cancelled() {
                    if let (Some(id), Some(window)) = (handle.take(), web_sys::window()) {
                        window.clear_interval_with_handle(id);
                        log::info!("Tick loop stopped");
                    }
                }
            })
        };

        let id = window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            TICK_INTERVAL_MS as i32,
        )?;
        handle.set(Some(id));
        closure.forget();

        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_game::run() {
        web_sys::console::error_1(&e);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use rally_pong::consts::TICK_INTERVAL_MS;
    use rally_pong::hud::LogSink;
    use rally_pong::platform::{Clock, FixedInterval, ManualClock, SystemClock};
    use rally_pong::renderer::RecordingCanvas;
    use rally_pong::sim::GameSession;
    use rally_pong::{Game, InputEvent};

    env_logger::init();
    log::info!("Rally Pong (native) starting headless match...");

    let seed = SystemClock.now_ms() as u64;
    let clock = ManualClock::new(0.0);
    let session = GameSession::new(seed, clock.now_ms());
    let mut game = Game::new(session, RecordingCanvas::new(640.0, 480.0), LogSink::new());
    let mut scheduler = FixedInterval::new(clock.clone(), TICK_INTERVAL_MS);

    log::info!("Game initialized with seed: {}", seed);
    game.start();

    let mut pointer_y = game.session().mouse.y;
    while !scheduler.is_cancelled() {
        clock.advance(TICK_INTERVAL_MS);
        pointer_y = follow(pointer_y, game.session().ball.pos.y);
        game.handle_event(InputEvent::PointerMove {
            x: 20.0,
            y: pointer_y,
        });
        scheduler.poll(&mut game);
    }

    match game.summary().map(serde_json::to_string_pretty) {
        Some(Ok(json)) => println!("{}", json),
        Some(Err(e)) => log::error!("Could not serialize match summary: {}", e),
        None => log::warn!("Match stopped without a result"),
    }
}

/// Scripted pointer: chases the ball with a human-ish speed limit
#[cfg(not(target_arch = "wasm32"))]
fn follow(pointer_y: f32, ball_y: f32) -> f32 {
    const MAX_STEP: f32 = 4.0;
    pointer_y + (ball_y - pointer_y).clamp(-MAX_STEP, MAX_STEP)
}
