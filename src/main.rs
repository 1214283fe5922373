//! Lane Runner entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use lane_runner::platform::{command_for_key, is_autopilot_toggle, is_start_key};
    use lane_runner::renderer::{DrawCommand, DrawList, Hud};
    use lane_runner::{HighScores, Session, Tuning};

    /// Game instance holding the session and the page handles
    struct Game {
        session: Session,
        ctx: CanvasRenderingContext2d,
        document: Document,
    }

    impl Game {
        /// Reset and start a new run, returning its loop generation
        fn restart(&mut self) -> u64 {
            let seed = js_sys::Date::now() as u64;
            self.session.start(seed)
        }

        /// Paint the current snapshot and mirror the HUD
        fn render(&self) {
            let snapshot = self.session.snapshot();
            paint(&self.ctx, &DrawList::from_snapshot(&snapshot));

            let hud = Hud::from_snapshot(&snapshot);
            set_text(&self.document, "score", &hud.score);
            set_text(&self.document, "coins", &hud.coins);
            set_text(&self.document, "speed", &hud.speed);
        }

        /// Rebuild the leaderboard list
        fn render_leaderboard(&self) {
            let Some(list) = self.document.get_element_by_id("leaderboard") else {
                return;
            };
            list.set_inner_html("");
            for line in self.session.scores().leaderboard_lines() {
                if let Ok(item) = self.document.create_element("li") {
                    item.set_text_content(Some(&line));
                    let _ = list.append_child(&item);
                }
            }
        }
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    /// Replay a draw list onto the canvas
    fn paint(ctx: &CanvasRenderingContext2d, list: &DrawList) {
        for command in &list.commands {
            match command {
                DrawCommand::FillRect {
                    origin,
                    size,
                    color,
                } => {
                    ctx.set_fill_style_str(color);
                    ctx.fill_rect(
                        origin.x as f64,
                        origin.y as f64,
                        size.x as f64,
                        size.y as f64,
                    );
                }
                DrawCommand::StrokeRect {
                    origin,
                    size,
                    color,
                    line_width,
                } => {
                    ctx.set_stroke_style_str(color);
                    ctx.set_line_width(*line_width as f64);
                    ctx.stroke_rect(
                        origin.x as f64,
                        origin.y as f64,
                        size.x as f64,
                        size.y as f64,
                    );
                }
                DrawCommand::DashedLine {
                    from,
                    to,
                    color,
                    line_width,
                    dash,
                } => {
                    let pattern = js_sys::Array::of2(
                        &JsValue::from_f64(dash.0 as f64),
                        &JsValue::from_f64(dash.1 as f64),
                    );
                    ctx.set_stroke_style_str(color);
                    ctx.set_line_width(*line_width as f64);
                    let _ = ctx.set_line_dash(&pattern);
                    ctx.begin_path();
                    ctx.move_to(from.x as f64, from.y as f64);
                    ctx.line_to(to.x as f64, to.y as f64);
                    ctx.stroke();
                    let _ = ctx.set_line_dash(&js_sys::Array::new());
                }
                DrawCommand::Text {
                    pos,
                    text,
                    font,
                    color,
                } => {
                    ctx.set_fill_style_str(color);
                    ctx.set_font(font);
                    ctx.set_text_align("center");
                    let _ = ctx.fill_text(text, pos.x as f64, pos.y as f64);
                }
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Lane Runner starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        // The canvas decides the play surface
        let mut tuning = Tuning::load();
        tuning.surface_width = canvas.width() as f64;
        tuning.surface_height = canvas.height() as f64;

        let scores = HighScores::load(tuning.max_high_scores);
        let game = Rc::new(RefCell::new(Game {
            session: Session::new(tuning, scores),
            ctx,
            document: document.clone(),
        }));

        setup_keyboard(&document, game.clone());
        setup_start_button(&document, game.clone());

        // Boot: show the idle board until Start
        {
            let g = game.borrow();
            g.render_leaderboard();
            g.render();
        }

        log::info!("Lane Runner ready");
    }

    fn start_game(game: &Rc<RefCell<Game>>) {
        let generation = {
            let mut g = game.borrow_mut();
            let generation = g.restart();
            g.render_leaderboard();
            g.render();
            generation
        };
        request_animation_frame(game.clone(), generation);
    }

    fn setup_keyboard(document: &Document, game: Rc<RefCell<Game>>) {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let key = event.key();
            if let Some(command) = command_for_key(&key) {
                game.borrow_mut().session.handle(command);
            } else if is_autopilot_toggle(&key) {
                let mut g = game.borrow_mut();
                g.session.autopilot = !g.session.autopilot;
                log::info!("Autopilot: {}", g.session.autopilot);
            } else if is_start_key(&key) {
                start_game(&game);
            }
        });
        let _ = document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_start_button(document: &Document, game: Rc<RefCell<Game>>) {
        if let Some(btn) = document.get_element_by_id("start") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                start_game(&game);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>, generation: u64) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game, generation);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, generation: u64) {
        let keep_going = {
            let mut g = game.borrow_mut();
            // A restart superseded this loop
            if !g.session.should_schedule(generation) {
                return;
            }

            g.session.frame();
            g.render();
            if !g.session.is_running() {
                g.render_leaderboard();
            }
            g.session.should_schedule(generation)
        };

        if keep_going {
            request_animation_frame(game, generation);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

/// Frames per headless run (one minute at 60 Hz)
#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_FRAMES: u64 = 3600;

#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_RUNS: u32 = 3;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use lane_runner::renderer::Hud;
    use lane_runner::{HighScores, Session, Tuning};
    use std::time::{SystemTime, UNIX_EPOCH};

    env_logger::init();
    log::info!("Lane Runner (native) starting headless autopilot runs...");

    let mut args = std::env::args().skip(1);
    let frames = args
        .next()
        .and_then(|a| a.parse::<u64>().ok())
        .unwrap_or(DEFAULT_FRAMES);
    let runs = args
        .next()
        .and_then(|a| a.parse::<u32>().ok())
        .unwrap_or(DEFAULT_RUNS);

    let tuning = Tuning::load();
    let scores = HighScores::load(tuning.max_high_scores);
    let mut session = Session::new(tuning, scores);
    session.autopilot = true;

    let base_seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    for run in 0..runs {
        session.start(base_seed.wrapping_add(run as u64));
        let mut frame = 0;
        while session.is_running() && frame < frames {
            session.frame();
            frame += 1;
        }
        session.cancel();

        let snapshot = session.snapshot();
        let hud = Hud::from_snapshot(&snapshot);
        println!(
            "Run {}: {} on tick {} - score {}, coins {}, speed {}",
            run + 1,
            if snapshot.game_over { "crashed" } else { "survived" },
            snapshot.tick,
            hud.score,
            hud.coins,
            hud.speed
        );
    }

    println!("\nLeaderboard:");
    for line in session.scores().leaderboard_lines() {
        println!("  {}", line);
    }
}
