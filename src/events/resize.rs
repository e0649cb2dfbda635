use crate::core::{with_live, Resize, SurfaceSize};
use crate::events::Listener;
use std::cell::RefCell;
use std::rc::Weak;
use web_sys as web;

pub struct ResizeWiring<T> {
    pub canvas: web::HtmlCanvasElement,
    /// Weak so the listener never keeps a stopped scene alive.
    pub scene: Weak<RefCell<T>>,
    /// Resizes the canvas for the new layout and reports the resulting size.
    pub measure: fn(&web::HtmlCanvasElement) -> SurfaceSize,
}

/// Keep the canvas backing store and the scene's surface size in step with
/// the layout. Scene state other than the size is left alone.
pub fn wire_canvas_resize<T: Resize + 'static>(w: ResizeWiring<T>) -> Option<Listener> {
    let window = web::window()?;
    Some(Listener::attach(&window, "resize", move |_| {
        let canvas = &w.canvas;
        let measure = w.measure;
        with_live(&w.scene, |scene| {
            let size = measure(canvas);
            scene.resize(size);
            log::debug!("[resize] surface {}x{}", size.width, size.height);
        });
    }))
}
