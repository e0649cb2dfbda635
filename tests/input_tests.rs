// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::DVec2;
use input::*;

#[test]
fn pointer_is_relative_to_surface_origin() {
    let p = relative_to_origin(DVec2::new(450.0, 320.0), DVec2::new(50.0, 20.0));
    assert_eq!(p, DVec2::new(400.0, 300.0));
}

#[test]
fn pointer_outside_surface_goes_negative() {
    let p = relative_to_origin(DVec2::new(10.0, 5.0), DVec2::new(50.0, 20.0));
    assert_eq!(p, DVec2::new(-40.0, -15.0));
}

#[test]
fn pointer_state_starts_at_origin_and_keeps_last_position() {
    let mut state = PointerState::default();
    assert_eq!(state.position, DVec2::ZERO);
    state.record(DVec2::new(1.0, 2.0));
    state.record(DVec2::new(3.0, 4.0));
    assert_eq!(state.position, DVec2::new(3.0, 4.0));
}
