use crate::core::Simulation;
use crate::render::CanvasPainter;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const FPS_LOG_INTERVAL_SEC: f32 = 10.0;

pub struct FrameContext {
    pub sim: Rc<RefCell<Simulation>>,
    pub painter: CanvasPainter,
    pub fps_window_start: Instant,
    pub fps_frames: u32,
}

impl FrameContext {
    pub fn new(sim: Rc<RefCell<Simulation>>, painter: CanvasPainter) -> Self {
        Self {
            sim,
            painter,
            fps_window_start: Instant::now(),
            fps_frames: 0,
        }
    }

    /// One animation frame; `timestamp_ms` is the requestAnimationFrame time.
    pub fn frame(&mut self, timestamp_ms: f64) {
        let report = self.sim.borrow_mut().frame(timestamp_ms, &mut self.painter);
        if let Some(fx) = report.transition {
            if fx.progress >= 1.0 {
                log::debug!("[transition] settled at t={:.0}ms", timestamp_ms);
            }
        }
        self.track_fps();
    }

    fn track_fps(&mut self) {
        self.fps_frames += 1;
        let elapsed = self.fps_window_start.elapsed().as_secs_f32();
        if elapsed >= FPS_LOG_INTERVAL_SEC {
            log::debug!("[frame] {:.1} fps", self.fps_frames as f32 / elapsed);
            self.fps_frames = 0;
            self.fps_window_start = Instant::now();
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp_ms: f64| {
        frame_ctx.borrow_mut().frame(timestamp_ms);
        request_frame(&tick_clone);
    }) as Box<dyn FnMut(f64)>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        if let Err(e) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
    }
}
