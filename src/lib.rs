//! Cursor-orbiting tendril swarm with a darkness mood and floating thoughts.
//!
//! All simulation logic lives in [`core`] and builds on any target; the web
//! front-end below only exists on `wasm32`.

pub mod core;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod input;
#[cfg(target_arch = "wasm32")]
mod render;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("shadow-tendrils starting");

    wasm_bindgen_futures::spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

#[cfg(target_arch = "wasm32")]
async fn init() -> anyhow::Result<()> {
    use crate::core::{SimParams, Simulation};
    use std::cell::RefCell;
    use std::rc::Rc;

    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, "app-canvas")?;
    let ctx = dom::context_2d(&canvas)?;
    let (width, height) = dom::sync_canvas_to_viewport(&canvas);

    let sim = Rc::new(RefCell::new(Simulation::new(
        SimParams::default(),
        width as f32,
        height as f32,
        rand::random(),
    )));
    log::info!(
        "[init] canvas {}x{} tendrils={}",
        width,
        height,
        sim.borrow().tendrils().len()
    );

    events::wire_viewport_resize(&canvas, &sim);
    events::wire_input_handlers(&canvas, &sim);
    events::wire_global_keydown(sim.clone());

    let painter = render::CanvasPainter::new(canvas, ctx);
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(sim, painter)));
    frame::start_loop(frame_ctx);
    Ok(())
}
