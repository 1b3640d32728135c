use crate::core::{action_for_key, Simulation};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, sim: &Rc<RefCell<Simulation>>) {
    if ev.repeat() {
        return;
    }
    if let Some(action) = action_for_key(&ev.key()) {
        sim.borrow_mut().apply(action);
        ev.prevent_default();
    }
}

pub fn wire_global_keydown(sim: Rc<RefCell<Simulation>>) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &sim);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
