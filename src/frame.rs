use crate::core::{KnotScene, RunFlag, Scene};
use crate::dom;
use crate::events::Listener;
use crate::input::PointerState;
use crate::render::{KnotPainter, Painter};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// One animated hero driven by `start_loop`.
pub trait Frame {
    fn frame(&mut self);
    /// Canvas whose detachment ends the loop.
    fn canvas(&self) -> &web::HtmlCanvasElement;
    /// Element carrying the running marker attribute.
    fn marker(&self) -> &web::Element;
    fn frames(&self) -> u64;
    /// Called once on the stop path, before the context is dropped.
    fn on_stop(&mut self) {}
}

/// Orb hero. Owns the only strong reference to its scene besides short-lived
/// borrows, so dropping it releases the scene and detaches its listeners.
pub struct FrameContext {
    pub scene: Rc<RefCell<Scene>>,
    pub pointer: Rc<RefCell<PointerState>>,
    pub canvas: web::HtmlCanvasElement,
    pub painter: Painter,
    pub started: Instant,
    pub listeners: Vec<Listener>,
}

impl Frame for FrameContext {
    fn frame(&mut self) {
        let pointer = self.pointer.borrow().position;
        let time_sec = self.started.elapsed().as_secs_f64();
        let mut scene = self.scene.borrow_mut();
        scene.step(pointer);
        self.painter.paint_frame(&scene, time_sec);
    }

    fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }

    fn marker(&self) -> &web::Element {
        &self.canvas
    }

    fn frames(&self) -> u64 {
        self.scene.borrow().frames()
    }
}

/// Wireframe torus-knot hero on a canvas it appended to `host`.
pub struct KnotFrameContext {
    pub scene: Rc<RefCell<KnotScene>>,
    pub host: web::Element,
    pub canvas: web::HtmlCanvasElement,
    pub painter: KnotPainter,
    pub listeners: Vec<Listener>,
}

impl Frame for KnotFrameContext {
    fn frame(&mut self) {
        let mut scene = self.scene.borrow_mut();
        scene.step();
        self.painter.paint_frame(&scene);
    }

    fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }

    fn marker(&self) -> &web::Element {
        &self.host
    }

    fn frames(&self) -> u64 {
        self.scene.borrow().frames()
    }

    fn on_stop(&mut self) {
        self.canvas.remove();
    }
}

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Drive `frame_ctx` from `requestAnimationFrame` until `running` is cleared
/// or the canvas is detached. Each callback runs to completion before the next
/// one is requested, so there is at most one pending frame.
pub fn start_loop<F: Frame + 'static>(frame_ctx: F, running: RunFlag) {
    let tick: Tick = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let mut frame_ctx = Some(frame_ctx);
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let Some(ctx) = frame_ctx.as_mut() else {
            return;
        };
        if !(running.is_running() && ctx.canvas().is_connected()) {
            // Only a detached canvas gets here with the flag still set; a
            // handle stop already cleared the marker itself.
            if running.stop() {
                _ = ctx.marker().remove_attribute(dom::RUNNING_ATTR);
            }
            log::info!("hero loop stopped after {} frames", ctx.frames());
            ctx.on_stop();
            // Drops the scene and detaches the listeners.
            frame_ctx = None;
            release_tick(&tick_clone);
            return;
        }
        ctx.frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Tick) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

// The tick closure cannot drop itself while it is running, so the drop is
// deferred to a one-shot timeout.
fn release_tick(tick: &Tick) {
    let owner = tick.clone();
    let release = Closure::once_into_js(move || {
        owner.borrow_mut().take();
    });
    if let Some(w) = web::window() {
        _ = w.set_timeout_with_callback(release.unchecked_ref());
    }
}
