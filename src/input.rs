use glam::DVec2;
use web_sys as web;

/// Last known pointer position in surface coordinates. Starts at the surface
/// origin until the first move event arrives.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub position: DVec2,
}

impl PointerState {
    #[inline]
    pub fn record(&mut self, position: DVec2) {
        self.position = position;
    }
}

/// Convert viewport client coordinates into coordinates relative to a box
/// whose top-left corner is at `origin`.
#[inline]
pub fn relative_to_origin(client: DVec2, origin: DVec2) -> DVec2 {
    client - origin
}

#[inline]
pub fn pointer_canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> DVec2 {
    let rect = canvas.get_bounding_client_rect();
    relative_to_origin(
        DVec2::new(ev.client_x() as f64, ev.client_y() as f64),
        DVec2::new(rect.left(), rect.top()),
    )
}
