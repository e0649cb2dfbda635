// Host-side tests for the wireframe torus-knot hero.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod easing {
        include!("../src/core/easing.rs");
    }
    pub mod particle {
        include!("../src/core/particle.rs");
    }
    pub mod scene {
        include!("../src/core/scene.rs");
    }
    pub mod knot {
        include!("../src/core/knot.rs");
    }
}

use crate::core::knot::*;
use crate::core::scene::{Resize, SurfaceSize};
use glam::{Vec2, Vec3};

fn make_knot() -> KnotScene {
    KnotScene::new(KnotParams::default(), SurfaceSize::new(1280.0, 720.0))
}

#[test]
fn default_mesh_has_closed_grid_counts() {
    let mesh = torus_knot(8.0, 2.5, 200, 16, 2, 3);
    assert_eq!(mesh.vertices.len(), 201 * 17);
    assert_eq!(mesh.edges.len(), 200 * 16 * 3 + 200 + 16);
    let n = mesh.vertices.len() as u32;
    assert!(mesh.edges.iter().all(|[a, b]| *a < n && *b < n && a != b));
}

#[test]
fn curve_starts_on_positive_x_axis() {
    let p = knot_curve(0.0, 2, 3, 8.0);
    assert!((p - Vec3::new(12.0, 0.0, 0.0)).length() < 1e-5, "{p:?}");
}

#[test]
fn first_ring_wraps_curve_at_tube_radius() {
    let mesh = torus_knot(8.0, 2.5, 200, 16, 2, 3);
    let centre = knot_curve(0.0, 2, 3, 8.0);
    for v in &mesh.vertices[..17] {
        let d = v.distance(centre);
        assert!((d - 2.5).abs() < 1e-3, "ring distance {d}");
    }
}

#[test]
fn degenerate_segment_counts_still_build() {
    let mesh = torus_knot(8.0, 2.5, 0, 0, 0, 3);
    assert_eq!(mesh.vertices.len(), 4);
    assert_eq!(mesh.edges.len(), 5);
}

#[test]
fn rotation_accumulates_per_step() {
    let mut scene = make_knot();
    for _ in 0..100 {
        scene.step();
    }
    assert_eq!(scene.frames(), 100);
    assert!((scene.rotation - Vec2::new(0.5, 0.8)).length() < 1e-4);
}

#[test]
fn origin_projects_to_surface_centre() {
    let mut scene = make_knot();
    for _ in 0..37 {
        scene.step();
    }
    let mvp = scene.model_view_projection();
    let p = scene.project(&mvp, Vec3::ZERO).unwrap();
    assert!((p - Vec2::new(640.0, 360.0)).length() < 1e-3, "{p:?}");
}

#[test]
fn points_behind_camera_are_not_projected() {
    let scene = make_knot();
    let mvp = scene.model_view_projection();
    assert!(scene.project(&mvp, Vec3::new(0.0, 0.0, 40.0)).is_none());
}

#[test]
fn whole_knot_projects_on_screen() {
    let scene = make_knot();
    let mut edges = Vec::new();
    scene.project_edges(&mut edges);
    assert_eq!(edges.len(), scene.mesh.edges.len());
    for [a, b] in &edges {
        for p in [a, b] {
            assert!(p.x >= 0.0 && p.x <= 1280.0, "{p:?}");
            assert!(p.y >= 0.0 && p.y <= 720.0, "{p:?}");
        }
    }

    // Buffer is replaced, not appended to.
    scene.project_edges(&mut edges);
    assert_eq!(edges.len(), scene.mesh.edges.len());
}

#[test]
fn resize_keeps_rotation_and_mesh() {
    let mut scene = make_knot();
    for _ in 0..10 {
        scene.step();
    }
    let rotation = scene.rotation;
    let vertices = scene.mesh.vertices.len();

    scene.resize(SurfaceSize::new(400.0, 800.0));

    assert_eq!(scene.surface, SurfaceSize::new(400.0, 800.0));
    assert_eq!(scene.rotation, rotation);
    assert_eq!(scene.mesh.vertices.len(), vertices);
    assert!((scene.aspect() - 0.5).abs() < 1e-6);
}

#[test]
fn empty_surface_uses_unit_aspect() {
    let scene = KnotScene::new(KnotParams::default(), SurfaceSize::new(0.0, 0.0));
    assert_eq!(scene.aspect(), 1.0);
}
