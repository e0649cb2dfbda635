pub mod color;
pub mod easing;
pub mod knot;
pub mod particle;
pub mod scene;
pub mod shared;

pub use color::*;
pub use easing::*;
pub use knot::*;
pub use particle::*;
pub use scene::*;
pub use shared::*;
