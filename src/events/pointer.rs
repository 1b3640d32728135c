use crate::core::Simulation;
use crate::dom;
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_input_handlers(canvas: &web::HtmlCanvasElement, sim: &Rc<RefCell<Simulation>>) {
    wire_pointermove(canvas, sim);
    wire_touchmove(canvas, sim);
}

fn wire_pointermove(canvas: &web::HtmlCanvasElement, sim: &Rc<RefCell<Simulation>>) {
    let canvas_move = canvas.clone();
    let sim = sim.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &canvas_move);
        sim.borrow_mut().set_cursor(pos);
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_touchmove(canvas: &web::HtmlCanvasElement, sim: &Rc<RefCell<Simulation>>) {
    let canvas_touch = canvas.clone();
    let sim = sim.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        ev.prevent_default();
        if let Some(pos) = input::touch_canvas_px(&ev, &canvas_touch) {
            sim.borrow_mut().set_cursor(pos);
        }
    }) as Box<dyn FnMut(_)>);
    // prevent_default only suppresses scrolling on a non-passive listener
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    _ = canvas.add_event_listener_with_callback_and_add_event_listener_options(
        "touchmove",
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

pub fn wire_viewport_resize(canvas: &web::HtmlCanvasElement, sim: &Rc<RefCell<Simulation>>) {
    let canvas_resize = canvas.clone();
    let sim = sim.clone();
    let closure = Closure::wrap(Box::new(move || {
        let (w, h) = dom::sync_canvas_to_viewport(&canvas_resize);
        sim.borrow_mut().resize(w as f32, h as f32);
        log::debug!("[resize] {}x{}", w, h);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
