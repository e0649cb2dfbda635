use crate::core::SurfaceSize;
use crate::error::HeroError;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Marks a canvas or host element that already has a loop attached.
pub const RUNNING_ATTR: &str = "data-hero-running";

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn canvas_by_id(document: &web::Document, id: &str) -> Result<web::HtmlCanvasElement, HeroError> {
    let el = document
        .get_element_by_id(id)
        .ok_or_else(|| HeroError::MissingElement(id.to_string()))?;
    el.dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| HeroError::NotACanvas(id.to_string()))
}

pub fn context_2d(
    canvas: &web::HtmlCanvasElement,
    id: &str,
) -> Result<web::CanvasRenderingContext2d, HeroError> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<web::CanvasRenderingContext2d>().ok())
        .ok_or_else(|| HeroError::NoContext2d(id.to_string()))
}

/// Match the canvas backing store to its on-screen box (CSS pixels) and
/// return the resulting size.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> SurfaceSize {
    let w_px = canvas.offset_width().max(0) as u32;
    let h_px = canvas.offset_height().max(0) as u32;
    if canvas.width() != w_px {
        canvas.set_width(w_px);
    }
    if canvas.height() != h_px {
        canvas.set_height(h_px);
    }
    SurfaceSize::new(w_px as f64, h_px as f64)
}

/// Size the canvas to the window's inner size, both backing store and CSS box.
pub fn sync_canvas_to_window(canvas: &web::HtmlCanvasElement) -> SurfaceSize {
    let (w, h) = web::window()
        .map(|w| {
            let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
                v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0).max(0.0) as u32
            };
            (dim(w.inner_width()), dim(w.inner_height()))
        })
        .unwrap_or((0, 0));
    canvas.set_width(w);
    canvas.set_height(h);
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", w));
    _ = style.set_property("height", &format!("{}px", h));
    SurfaceSize::new(w as f64, h as f64)
}

/// Create a `<canvas>` and append it to `host`.
pub fn append_canvas(
    document: &web::Document,
    host: &web::Element,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    host.append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(canvas)
}
