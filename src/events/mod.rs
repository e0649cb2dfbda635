pub mod listener;
pub mod pointer;
pub mod resize;

pub use listener::Listener;
pub use pointer::wire_pointermove;
pub use resize::{wire_canvas_resize, ResizeWiring};
