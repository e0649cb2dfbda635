use crate::events::Listener;
use crate::input::{self, PointerState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Track the pointer over `canvas`. The frame loop reads the shared state on
/// its next tick.
pub fn wire_pointermove(canvas: &web::HtmlCanvasElement, pointer: Rc<RefCell<PointerState>>) -> Listener {
    let canvas_for_handler = canvas.clone();
    Listener::attach(canvas, "pointermove", move |ev: web::Event| {
        if let Some(ev) = ev.dyn_ref::<web::PointerEvent>() {
            let pos = input::pointer_canvas_px(ev, &canvas_for_handler);
            pointer.borrow_mut().record(pos);
        }
    })
}
