use crate::constants::*;
use crate::core::{KnotScene, Particle, Rgba, Scene, SurfaceSize};
use glam::{DVec2, Vec2};
use std::f64::consts::TAU;
use web_sys as web;

/// Draws a `Scene` onto a Canvas2D context. Holds only the context and the
/// pre-formatted style strings that never change between frames.
pub struct Painter {
    ctx: web::CanvasRenderingContext2d,
    trail_css: String,
    ring_css: String,
    stop_css: Vec<(f32, String)>,
    particle_rgb: Rgba,
}

impl Painter {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self {
            ctx,
            trail_css: Rgba::from(TRAIL_COLOR).css(),
            ring_css: Rgba::from(ORB_RING_COLOR).css(),
            stop_css: ORB_GRADIENT_STOPS
                .iter()
                .map(|&(offset, rgb, alpha)| (offset, Rgba::new(rgb, alpha).css()))
                .collect(),
            particle_rgb: Rgba::new(PARTICLE_RGB, 1.0),
        }
    }

    /// Paint one frame: fading trail, orb, then particles.
    pub fn paint_frame(&self, scene: &Scene, time_sec: f64) {
        self.paint_trail(scene.surface);
        self.paint_orb(scene, scene.light_position(time_sec));
        for p in &scene.particles {
            self.paint_particle(p);
        }
    }

    /// Low-alpha fill over the whole surface; previous frames decay instead of
    /// being cleared.
    fn paint_trail(&self, surface: SurfaceSize) {
        self.ctx.set_fill_style_str(&self.trail_css);
        self.ctx.fill_rect(0.0, 0.0, surface.width, surface.height);
    }

    fn paint_orb(&self, scene: &Scene, light: DVec2) {
        let orb = &scene.orb;
        let ctx = &self.ctx;
        let gradient = match ctx.create_radial_gradient(
            light.x,
            light.y,
            0.0,
            orb.position.x,
            orb.position.y,
            orb.radius,
        ) {
            Ok(g) => g,
            Err(e) => {
                log::warn!("radial gradient: {:?}", e);
                return;
            }
        };
        for (offset, css) in &self.stop_css {
            _ = gradient.add_color_stop(*offset, css);
        }

        ctx.set_fill_style_canvas_gradient(&gradient);
        ctx.set_shadow_blur(ORB_GLOW_BLUR);
        ctx.set_shadow_color(ORB_GLOW_COLOR);
        ctx.begin_path();
        _ = ctx.arc(orb.position.x, orb.position.y, orb.radius, 0.0, TAU);
        ctx.fill();

        ctx.set_stroke_style_str(&self.ring_css);
        ctx.set_line_width(ORB_RING_WIDTH);
        ctx.stroke();
    }

    fn paint_particle(&self, p: &Particle) {
        let ctx = &self.ctx;
        ctx.set_fill_style_str(&self.particle_rgb.with_alpha(p.opacity).css());
        ctx.begin_path();
        _ = ctx.arc(p.position.x, p.position.y, p.size, 0.0, TAU);
        ctx.fill();
    }
}

/// Strokes the projected wireframe of a `KnotScene`. The edge buffer is
/// reused across frames.
pub struct KnotPainter {
    ctx: web::CanvasRenderingContext2d,
    edges: Vec<[Vec2; 2]>,
}

impl KnotPainter {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self {
            ctx,
            edges: Vec::new(),
        }
    }

    pub fn paint_frame(&mut self, scene: &KnotScene) {
        let ctx = &self.ctx;
        ctx.clear_rect(0.0, 0.0, scene.surface.width, scene.surface.height);
        scene.project_edges(&mut self.edges);
        ctx.set_stroke_style_str(KNOT_LINE_COLOR);
        ctx.set_line_width(KNOT_LINE_WIDTH);
        ctx.begin_path();
        for [a, b] in &self.edges {
            ctx.move_to(a.x as f64, a.y as f64);
            ctx.line_to(b.x as f64, b.y as f64);
        }
        ctx.stroke();
    }
}
