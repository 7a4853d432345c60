//! Flap Gauntlet entry point
//!
//! In the browser this wires the canvas, input and `requestAnimationFrame` to
//! the frame driver. Natively it runs a headless autopilot round.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlCanvasElement, KeyboardEvent, PointerEvent};

    use flap_gauntlet::platform::{FrameHandle, Scheduler};
    use flap_gauntlet::renderer::{
        Color, RenderState, ShapeBatch, TextAlign, TextBaseline, TextRun,
    };
    use flap_gauntlet::sim::Transition;
    use flap_gauntlet::{Game, Session};

    /// Slot holding the closure that `requestAnimationFrame` calls
    type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

    /// Scheduler backed by `requestAnimationFrame`
    struct RafScheduler {
        callback: FrameCallback,
    }

    impl Scheduler for RafScheduler {
        fn request_frame(&mut self) -> FrameHandle {
            let window = web_sys::window().expect("no window");
            let slot = self.callback.borrow();
            let Some(callback) = slot.as_ref() else {
                log::error!("Frame callback not installed");
                return FrameHandle(0);
            };
            match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
                Ok(id) => FrameHandle(id),
                Err(e) => {
                    log::error!("requestAnimationFrame failed: {:?}", e);
                    FrameHandle(0)
                }
            }
        }

        fn cancel_frame(&mut self, handle: FrameHandle) {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(handle.0);
            }
        }
    }

    /// Text runs mirrored into absolutely positioned elements over the canvas
    struct HudLayer {
        document: Document,
        container: Element,
        nodes: Vec<Element>,
    }

    impl HudLayer {
        fn sync(&mut self, runs: &[TextRun]) {
            while self.nodes.len() < runs.len() {
                let Ok(node) = self.document.create_element("div") else {
                    log::error!("Could not create HUD element");
                    return;
                };
                let _ = self.container.append_child(&node);
                self.nodes.push(node);
            }

            for (i, node) in self.nodes.iter().enumerate() {
                match runs.get(i) {
                    Some(run) => {
                        node.set_text_content(Some(&run.text));
                        let _ = node.set_attribute("style", &text_css(run));
                    }
                    None => {
                        let _ = node.set_attribute("style", "display:none");
                    }
                }
            }
        }
    }

    fn css_color([r, g, b, a]: Color) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            (r * 255.0).round() as u8,
            (g * 255.0).round() as u8,
            (b * 255.0).round() as u8,
            a
        )
    }

    fn text_css(run: &TextRun) -> String {
        let shift_x = match run.style.align {
            TextAlign::Left => "0",
            TextAlign::Center => "-50%",
            TextAlign::Right => "-100%",
        };
        let shift_y = match run.style.baseline {
            TextBaseline::Top => "0",
            TextBaseline::Middle => "-50%",
            TextBaseline::Bottom => "-100%",
        };
        format!(
            "position:absolute;left:{}px;top:{}px;transform:translate({},{});\
             font:{} {}px Arial;color:{};white-space:pre;pointer-events:none",
            run.pos.x,
            run.pos.y,
            shift_x,
            shift_y,
            if run.style.bold { "bold" } else { "normal" },
            run.style.size,
            css_color(run.style.color),
        )
    }

    /// Browser game instance holding all state
    struct WebGame {
        game: Game<RafScheduler>,
        batch: ShapeBatch,
        render_state: RenderState,
        hud: HudLayer,
    }

    impl WebGame {
        /// Send the current batch to the GPU and the HUD
        fn present(&mut self) {
            match self.render_state.render(&self.batch) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost) => {
                    let (w, h) = self.render_state.size;
                    self.render_state.resize(w, h);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
            self.hud.sync(&self.batch.text);
        }

        fn redraw(&mut self) {
            self.game.render(&mut self.batch);
            self.present();
        }

        fn on_frame(&mut self, time: f64) {
            if self.game.frame(time, &mut self.batch).is_some() {
                self.present();
            }
        }

        fn on_activate(&mut self) {
            match self.game.activate() {
                Transition::Start | Transition::Restart => self.redraw(),
                _ => {}
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Flap Gauntlet starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        let hud_container = document.get_element_by_id("hud").expect("no hud");

        // Logical size comes from the tuning; the backbuffer follows the DPR
        let seed = js_sys::Date::now() as u64;
        let session = Session::new(seed);
        let (logical_w, logical_h) = (session.tuning.width, session.tuning.height);
        let dpr = window.device_pixel_ratio();
        let width = (logical_w as f64 * dpr) as u32;
        let height = (logical_h as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);
        let _ = canvas.set_attribute(
            "style",
            &format!("width:{}px;height:{}px", logical_w, logical_h),
        );
        let _ = hud_container.set_attribute(
            "style",
            &format!(
                "position:absolute;left:0;top:0;width:{}px;height:{}px;pointer-events:none",
                logical_w, logical_h
            ),
        );

        log::info!("Session created with seed: {}", seed);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state =
            match RenderState::new(surface, &adapter, width, height, (logical_w, logical_h)).await {
                Ok(state) => state,
                Err(e) => {
                    log::error!("Failed to create device: {}", e);
                    return;
                }
            };

        let callback: FrameCallback = Rc::new(RefCell::new(None));
        let web = Rc::new(RefCell::new(WebGame {
            game: Game::new(
                session,
                RafScheduler {
                    callback: callback.clone(),
                },
            ),
            batch: ShapeBatch::new(),
            render_state,
            hud: HudLayer {
                document: document.clone(),
                container: hud_container,
                nodes: Vec::new(),
            },
        }));

        {
            let web = web.clone();
            *callback.borrow_mut() = Some(Closure::new(move |time: f64| {
                web.borrow_mut().on_frame(time);
            }));
        }

        // Title screen
        web.borrow_mut().redraw();

        setup_input_handlers(&canvas, web);

        log::info!("Flap Gauntlet ready");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, web: Rc<RefCell<WebGame>>) {
        // Keyboard: Space activates, I toggles the autopilot
        {
            let web = web.clone();
            let window = web_sys::window().expect("no window");
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                match event.code().as_str() {
                    "Space" => {
                        event.prevent_default();
                        web.borrow_mut().on_activate();
                    }
                    "KeyI" => {
                        let mut w = web.borrow_mut();
                        w.game.autopilot = !w.game.autopilot;
                        log::info!("Autopilot: {}", w.game.autopilot);
                    }
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Pointer (mouse, pen and touch)
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                event.prevent_default();
                web.borrow_mut().on_activate();
            });
            let _ = canvas
                .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use serde::Serialize;

    use flap_gauntlet::consts::TARGET_FRAME_MS;
    use flap_gauntlet::renderer::ShapeBatch;
    use flap_gauntlet::sim::Collision;
    use flap_gauntlet::{Game, ManualScheduler, RoundPhase, Session, Tuning};

    /// Give up after this many simulated frames (ten minutes at 60 Hz)
    const MAX_FRAMES: u32 = 60 * 60 * 10;

    /// Outcome of a headless run, printed as JSON
    #[derive(Debug, Serialize)]
    pub struct RunSummary {
        pub seed: u64,
        pub frames: u32,
        pub score: u32,
        pub phase: RoundPhase,
        pub collision: Option<Collision>,
        pub tuning: Tuning,
    }

    /// Play one autopilot round with synthetic 60 Hz timestamps
    pub fn run(seed: u64) -> RunSummary {
        let mut game = Game::new(Session::new(seed), ManualScheduler::new());
        game.autopilot = true;
        let mut batch = ShapeBatch::new();

        game.render(&mut batch);
        game.activate();

        let mut time = 0.0;
        let mut frames = 0;
        while frames < MAX_FRAMES && game.scheduler.fire().is_some() {
            game.frame(time, &mut batch);
            time += TARGET_FRAME_MS;
            frames += 1;
        }

        if game.session.is_running() {
            log::info!("Stopped after {} frames with the bird still flying", frames);
        }

        RunSummary {
            seed,
            frames,
            score: game.session.score,
            phase: game.session.phase,
            collision: game.session.last_collision,
            tuning: game.session.tuning.clone(),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Flap Gauntlet (native) starting...");
    log::info!("Native mode runs a headless autopilot round - run with `trunk serve` to play");

    let seed: u64 = rand::random();
    let summary = headless::run(seed);

    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Could not encode run summary: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
