use crate::constants::*;
use crate::core::scene::{Resize, SurfaceSize};
use glam::{Mat4, Vec2, Vec3};
use std::f32::consts::TAU;

/// Vertex positions plus the line segments that make up a wireframe.
#[derive(Clone, Debug, Default)]
pub struct WireMesh {
    pub vertices: Vec<Vec3>,
    pub edges: Vec<[u32; 2]>,
}

/// Point on the (p, q) torus-knot centre curve at parameter `u`.
pub fn knot_curve(u: f32, p: u32, q: u32, radius: f32) -> Vec3 {
    let qu_over_p = q as f32 / p as f32 * u;
    let cs = qu_over_p.cos();
    Vec3::new(
        radius * (2.0 + cs) * 0.5 * u.cos(),
        radius * (2.0 + cs) * 0.5 * u.sin(),
        radius * qu_over_p.sin() * 0.5,
    )
}

/// Tube of radius `tube` swept along a (p, q) torus knot.
///
/// Vertices form a `(tubular + 1) x (radial + 1)` grid; the last row and
/// column repeat the first so the grid closes. Each grid quad contributes its
/// two triangles' edges, with shared edges emitted once.
pub fn torus_knot(radius: f32, tube: f32, tubular: u32, radial: u32, p: u32, q: u32) -> WireMesh {
    let tubular = tubular.max(1);
    let radial = radial.max(1);
    let p = p.max(1);
    let mut vertices = Vec::with_capacity(((tubular + 1) * (radial + 1)) as usize);
    for i in 0..=tubular {
        let u = i as f32 / tubular as f32 * p as f32 * TAU;
        let p1 = knot_curve(u, p, q, radius);
        let p2 = knot_curve(u + 0.01, p, q, radius);
        let t = p2 - p1;
        let b = t.cross(p2 + p1);
        let n = b.cross(t).normalize_or_zero();
        let b = b.normalize_or_zero();
        for j in 0..=radial {
            let v = j as f32 / radial as f32 * TAU;
            let cx = -tube * v.cos();
            let cy = tube * v.sin();
            vertices.push(p1 + n * cx + b * cy);
        }
    }

    let stride = radial + 1;
    let mut edges = Vec::with_capacity((tubular * radial * 3 + tubular + radial) as usize);
    for j in 1..=tubular {
        for i in 1..=radial {
            let a = stride * (j - 1) + (i - 1);
            let b = stride * j + (i - 1);
            let c = stride * j + i;
            let d = stride * (j - 1) + i;
            edges.push([a, b]);
            edges.push([a, d]);
            edges.push([b, d]);
            if i == radial {
                edges.push([d, c]);
            }
            if j == tubular {
                edges.push([b, c]);
            }
        }
    }
    WireMesh { vertices, edges }
}

/// Tuning for the wireframe hero. `spin` is added to the x/y rotation every
/// frame; the camera sits on +Z looking at the origin.
#[derive(Clone, Debug)]
pub struct KnotParams {
    pub radius: f32,
    pub tube: f32,
    pub tubular_segments: u32,
    pub radial_segments: u32,
    pub p: u32,
    pub q: u32,
    pub spin: Vec2,
    pub camera_z: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for KnotParams {
    fn default() -> Self {
        Self {
            radius: KNOT_RADIUS,
            tube: KNOT_TUBE,
            tubular_segments: KNOT_TUBULAR_SEGMENTS,
            radial_segments: KNOT_RADIAL_SEGMENTS,
            p: KNOT_P,
            q: KNOT_Q,
            spin: Vec2::new(KNOT_SPIN_X, KNOT_SPIN_Y),
            camera_z: KNOT_CAMERA_Z,
            fovy_radians: KNOT_FOVY_DEG.to_radians(),
            znear: KNOT_ZNEAR,
            zfar: KNOT_ZFAR,
        }
    }
}

/// A spinning torus knot seen through a fixed perspective camera.
pub struct KnotScene {
    params: KnotParams,
    pub mesh: WireMesh,
    /// Accumulated rotation about X and Y, in radians.
    pub rotation: Vec2,
    pub surface: SurfaceSize,
    frames: u64,
}

impl Resize for KnotScene {
    fn resize(&mut self, surface: SurfaceSize) {
        self.surface = surface;
    }
}

impl KnotScene {
    pub fn new(params: KnotParams, surface: SurfaceSize) -> Self {
        let mesh = torus_knot(
            params.radius,
            params.tube,
            params.tubular_segments,
            params.radial_segments,
            params.p,
            params.q,
        );
        Self {
            params,
            mesh,
            rotation: Vec2::ZERO,
            surface,
            frames: 0,
        }
    }

    pub fn params(&self) -> &KnotParams {
        &self.params
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn step(&mut self) {
        self.rotation += self.params.spin;
        self.frames += 1;
    }

    pub fn aspect(&self) -> f32 {
        if self.surface.height > 0.0 {
            (self.surface.width / self.surface.height) as f32
        } else {
            1.0
        }
    }

    /// Clip-from-object transform for the current rotation and surface.
    pub fn model_view_projection(&self) -> Mat4 {
        let proj = Mat4::perspective_rh(
            self.params.fovy_radians,
            self.aspect(),
            self.params.znear,
            self.params.zfar,
        );
        let view = Mat4::look_at_rh(Vec3::new(0.0, 0.0, self.params.camera_z), Vec3::ZERO, Vec3::Y);
        let model = Mat4::from_rotation_x(self.rotation.x) * Mat4::from_rotation_y(self.rotation.y);
        proj * view * model
    }

    /// Surface-pixel position of `point`, or None when it is behind the camera.
    pub fn project(&self, mvp: &Mat4, point: Vec3) -> Option<Vec2> {
        let clip = *mvp * point.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        Some(Vec2::new(
            (ndc.x + 1.0) * 0.5 * self.surface.width as f32,
            (1.0 - ndc.y) * 0.5 * self.surface.height as f32,
        ))
    }

    /// Project every edge into surface pixels, replacing the contents of
    /// `out`. Edges with an endpoint behind the camera are skipped.
    pub fn project_edges(&self, out: &mut Vec<[Vec2; 2]>) {
        out.clear();
        let mvp = self.model_view_projection();
        let screen: Vec<Option<Vec2>> = self
            .mesh
            .vertices
            .iter()
            .map(|v| self.project(&mvp, *v))
            .collect();
        for [a, b] in &self.mesh.edges {
            if let (Some(pa), Some(pb)) = (screen[*a as usize], screen[*b as usize]) {
                out.push([pa, pb]);
            }
        }
    }
}
