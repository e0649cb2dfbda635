// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn per_frame_rates_are_unit_fractions() {
    for rate in [ORB_EASE, ORB_POINTER_PULL, PARTICLE_OPACITY_SPEED, PARTICLE_DRIFT] {
        assert!(rate > 0.0 && rate <= 1.0, "rate {rate}");
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn opacities_stay_in_unit_range() {
    assert!(PARTICLE_TARGET_OPACITY_MIN >= 0.0);
    assert!(PARTICLE_TARGET_OPACITY_MAX <= 1.0);
    assert!(PARTICLE_TARGET_OPACITY_MIN < PARTICLE_TARGET_OPACITY_MAX);
    assert!(PROXIMITY_MIN_OPACITY > 0.0 && PROXIMITY_MIN_OPACITY <= 1.0);
    for (_, _, alpha) in ORB_GRADIENT_STOPS {
        assert!((0.0..=1.0).contains(&alpha));
    }
    assert!((0.0..=1.0).contains(&TRAIL_COLOR.1));
    assert!((0.0..=1.0).contains(&ORB_RING_COLOR.1));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    // Orb follows its target faster than the target follows the pointer.
    assert!(ORB_EASE > ORB_POINTER_PULL);
    // Freshly spawned particles start inside the glow radius.
    assert!(PARTICLE_SPAWN_SPREAD / 2.0 * std::f64::consts::SQRT_2 < PROXIMITY_RADIUS);
    // Light spot stays inside the orb.
    assert!(LIGHT_ORBIT_RADIUS < ORB_RADIUS);
    assert!(ORB_START_FRAC_X > 0.0 && ORB_START_FRAC_X < 1.0);
    assert!(ORB_START_FRAC_Y > 0.0 && ORB_START_FRAC_Y < 1.0);
}

#[test]
fn gradient_stops_are_ordered() {
    let offsets: Vec<f32> = ORB_GRADIENT_STOPS.iter().map(|s| s.0).collect();
    assert_eq!(offsets.first(), Some(&0.0));
    assert_eq!(offsets.last(), Some(&1.0));
    assert!(offsets.windows(2).all(|w| w[0] < w[1]));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_ranges_are_ordered() {
    assert!(PARTICLE_SIZE_MIN > 0.0 && PARTICLE_SIZE_MIN < PARTICLE_SIZE_MAX);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn knot_fits_in_front_of_camera() {
    assert!(KNOT_SPIN_X > 0.0 && KNOT_SPIN_Y > 0.0);
    // Furthest the tube surface reaches from the origin.
    assert!(KNOT_RADIUS * 1.5 + KNOT_TUBE < KNOT_CAMERA_Z);
    assert!(KNOT_ZNEAR > 0.0 && KNOT_ZNEAR < KNOT_ZFAR);
    assert!(KNOT_FOVY_DEG > 0.0 && KNOT_FOVY_DEG < 180.0);
    assert!(KNOT_P > 0 && KNOT_TUBULAR_SEGMENTS > 0 && KNOT_RADIAL_SEGMENTS > 0);
}
