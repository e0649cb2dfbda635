#![cfg(target_arch = "wasm32")]
use crate::constants::{HERO_CANVAS_ID, KNOT_HOST_ID};
use crate::core::{HeroParams, KnotParams, KnotScene, RunFlag, Scene};
use crate::dom::RUNNING_ATTR;
use crate::error::HeroError;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod error;
mod events;
mod frame;
mod input;
mod render;

/// Control handle for a running hero animation.
#[wasm_bindgen]
#[derive(Clone)]
pub struct HeroHandle {
    running: RunFlag,
    marker: web::Element,
}

#[wasm_bindgen]
impl HeroHandle {
    /// Stop the loop. The pending frame, if any, runs the stop path and the
    /// scene is released.
    pub fn stop(&self) {
        if self.running.stop() {
            _ = self.marker.remove_attribute(RUNNING_ATTR);
            log::info!("hero stop requested");
        }
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.running.is_running()
    }
}

thread_local! {
    // Handles for the heroes booted by `start`, so pages can still stop them.
    static DEFAULT_ORB: RefCell<Option<HeroHandle>> = const { RefCell::new(None) };
    static DEFAULT_KNOT: RefCell<Option<HeroHandle>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();

    if let Some(handle) = boot_default("orb", init_orb(HERO_CANVAS_ID)) {
        DEFAULT_ORB.with(|h| *h.borrow_mut() = Some(handle));
    }
    if let Some(handle) = boot_default("knot", init_knot(KNOT_HOST_ID)) {
        DEFAULT_KNOT.with(|h| *h.borrow_mut() = Some(handle));
    }
    Ok(())
}

fn boot_default(kind: &str, result: anyhow::Result<HeroHandle>) -> Option<HeroHandle> {
    match result {
        Ok(handle) => Some(handle),
        // No such hero on this page; the feature is simply off.
        Err(e) if matches!(e.downcast_ref::<HeroError>(), Some(HeroError::MissingElement(_))) => {
            log::debug!("{} hero off: {}", kind, e);
            None
        }
        Err(e) => {
            log::error!("{} hero init error: {:?}", kind, e);
            None
        }
    }
}

/// Handle of the orb hero booted on `#hero-canvas`, if there is one.
#[wasm_bindgen(js_name = defaultHero)]
pub fn default_hero() -> Option<HeroHandle> {
    DEFAULT_ORB.with(|h| h.borrow().clone())
}

/// Handle of the wireframe hero booted inside `#hero-3d`, if there is one.
#[wasm_bindgen(js_name = defaultKnotHero)]
pub fn default_knot_hero() -> Option<HeroHandle> {
    DEFAULT_KNOT.with(|h| h.borrow().clone())
}

/// Attach an orb hero to the canvas with id `canvas_id`.
#[wasm_bindgen(js_name = startHero)]
pub fn start_hero(canvas_id: &str) -> Result<HeroHandle, JsValue> {
    init_orb(canvas_id).map_err(|e| JsValue::from_str(&format!("{:#}", e)))
}

/// Append a wireframe torus-knot hero to the element with id `host_id`.
#[wasm_bindgen(js_name = startKnotHero)]
pub fn start_knot_hero(host_id: &str) -> Result<HeroHandle, JsValue> {
    init_knot(host_id).map_err(|e| JsValue::from_str(&format!("{:#}", e)))
}

fn claim(marker: &web::Element, id: &str) -> anyhow::Result<()> {
    if marker.has_attribute(RUNNING_ATTR) {
        anyhow::bail!("#{} already has a running hero", id);
    }
    marker
        .set_attribute(RUNNING_ATTR, "")
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

fn init_orb(canvas_id: &str) -> anyhow::Result<HeroHandle> {
    let document = dom::window_document().ok_or(HeroError::NoDocument)?;
    let canvas = dom::canvas_by_id(&document, canvas_id)?;
    let ctx = dom::context_2d(&canvas, canvas_id)?;
    claim(&canvas, canvas_id)?;

    let surface = dom::sync_canvas_backing_size(&canvas);
    let scene = Rc::new(RefCell::new(Scene::new(
        HeroParams::default(),
        surface,
        rand::random(),
    )));
    log::info!(
        "orb hero starting on #{} ({}x{}, {} particles)",
        canvas_id,
        surface.width,
        surface.height,
        scene.borrow().particles.len()
    );

    let pointer = Rc::new(RefCell::new(input::PointerState::default()));
    let mut listeners = vec![events::wire_pointermove(&canvas, pointer.clone())];
    listeners.extend(events::wire_canvas_resize(events::ResizeWiring {
        canvas: canvas.clone(),
        scene: Rc::downgrade(&scene),
        measure: dom::sync_canvas_backing_size,
    }));

    let running = RunFlag::running();
    frame::start_loop(
        frame::FrameContext {
            scene,
            pointer,
            canvas: canvas.clone(),
            painter: render::Painter::new(ctx),
            started: Instant::now(),
            listeners,
        },
        running.clone(),
    );

    Ok(HeroHandle {
        running,
        marker: canvas.into(),
    })
}

fn init_knot(host_id: &str) -> anyhow::Result<HeroHandle> {
    let document = dom::window_document().ok_or(HeroError::NoDocument)?;
    let host = document
        .get_element_by_id(host_id)
        .ok_or_else(|| HeroError::MissingElement(host_id.to_string()))?;
    if host.has_attribute(RUNNING_ATTR) {
        anyhow::bail!("#{} already has a running hero", host_id);
    }
    let canvas = dom::append_canvas(&document, &host)?;
    let ctx = dom::context_2d(&canvas, host_id).map_err(|e| {
        canvas.remove();
        e
    })?;
    claim(&host, host_id)?;

    let surface = dom::sync_canvas_to_window(&canvas);
    let scene = Rc::new(RefCell::new(KnotScene::new(KnotParams::default(), surface)));
    log::info!(
        "knot hero starting in #{} ({}x{}, {} edges)",
        host_id,
        surface.width,
        surface.height,
        scene.borrow().mesh.edges.len()
    );

    let listeners: Vec<_> = events::wire_canvas_resize(events::ResizeWiring {
        canvas: canvas.clone(),
        scene: Rc::downgrade(&scene),
        measure: dom::sync_canvas_to_window,
    })
    .into_iter()
    .collect();

    let running = RunFlag::running();
    frame::start_loop(
        frame::KnotFrameContext {
            scene,
            host: host.clone(),
            canvas,
            painter: render::KnotPainter::new(ctx),
            listeners,
        },
        running.clone(),
    );

    Ok(HeroHandle {
        running,
        marker: host,
    })
}
