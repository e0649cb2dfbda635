use crate::constants::*;
use crate::core::easing::ease_vec_toward;
use crate::core::particle::{Particle, ParticleRules, UniformRange};
use glam::DVec2;
use rand::prelude::*;

/// Size of the rendering surface in canvas pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceSize {
    pub width: f64,
    pub height: f64,
}

impl SurfaceSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }
}

/// Runtime tuning for a hero scene.
///
/// - `orb_start_frac`: orb spawn point as a fraction of the surface size
/// - `orb_ease`: fraction of the gap between orb and its target closed per frame
/// - `pointer_pull`: fraction of the orb-to-pointer vector added to the target per frame
/// - `light_*`: orbit of the highlight used as the gradient's inner circle
/// - `particle_*`: swarm size, spawn distribution and per-frame rates
#[derive(Clone, Debug)]
pub struct HeroParams {
    pub orb_start_frac: DVec2,
    pub orb_radius: f64,
    pub orb_ease: f64,
    pub pointer_pull: f64,
    pub light_orbit_radius: f64,
    pub light_freq: DVec2,
    pub particle_count: usize,
    pub particle_spawn_spread: f64,
    pub particle_size: UniformRange,
    pub particle_target_opacity: UniformRange,
    pub particle_opacity_speed: f64,
    pub particle_drift: f64,
    pub proximity_radius: f64,
    pub proximity_min_opacity: f64,
}

impl Default for HeroParams {
    fn default() -> Self {
        Self {
            orb_start_frac: DVec2::new(ORB_START_FRAC_X, ORB_START_FRAC_Y),
            orb_radius: ORB_RADIUS,
            orb_ease: ORB_EASE,
            pointer_pull: ORB_POINTER_PULL,
            light_orbit_radius: LIGHT_ORBIT_RADIUS,
            light_freq: DVec2::new(LIGHT_FREQ_X, LIGHT_FREQ_Y),
            particle_count: PARTICLE_COUNT,
            particle_spawn_spread: PARTICLE_SPAWN_SPREAD,
            particle_size: UniformRange::new(PARTICLE_SIZE_MIN, PARTICLE_SIZE_MAX),
            particle_target_opacity: UniformRange::new(
                PARTICLE_TARGET_OPACITY_MIN,
                PARTICLE_TARGET_OPACITY_MAX,
            ),
            particle_opacity_speed: PARTICLE_OPACITY_SPEED,
            particle_drift: PARTICLE_DRIFT,
            proximity_radius: PROXIMITY_RADIUS,
            proximity_min_opacity: PROXIMITY_MIN_OPACITY,
        }
    }
}

impl HeroParams {
    /// Clamp per-frame rates into \[0, 1\] so every easing step stays a
    /// convex combination.
    pub fn sanitized(mut self) -> Self {
        self.orb_ease = self.orb_ease.clamp(0.0, 1.0);
        self.pointer_pull = self.pointer_pull.clamp(0.0, 1.0);
        self.particle_opacity_speed = self.particle_opacity_speed.clamp(0.0, 1.0);
        self.particle_drift = self.particle_drift.clamp(0.0, 1.0);
        self.proximity_min_opacity = self.proximity_min_opacity.clamp(0.0, 1.0);
        self
    }

    fn particle_rules(&self) -> ParticleRules {
        ParticleRules {
            drift: self.particle_drift,
            proximity_radius: self.proximity_radius,
            proximity_min_opacity: self.proximity_min_opacity,
        }
    }
}

/// The focal object. `target` is nudged toward the pointer and `position`
/// follows `target`; there is no velocity state.
#[derive(Clone, Debug, PartialEq)]
pub struct Orb {
    pub position: DVec2,
    pub target: DVec2,
    pub radius: f64,
    pub ease: f64,
}

/// All mutable state of the hero animation.
///
/// Construct with `Scene::new(params, surface, seed)`, then call `step` once
/// per animation frame and read `orb`, `particles` and `light_position` to
/// paint. `resize` only touches the surface size.
pub struct Scene {
    params: HeroParams,
    pub surface: SurfaceSize,
    pub orb: Orb,
    pub particles: Vec<Particle>,
    rules: ParticleRules,
    frames: u64,
}

/// Anything whose layout follows the size of its surface.
pub trait Resize {
    fn resize(&mut self, surface: SurfaceSize);
}

impl Resize for Scene {
    fn resize(&mut self, surface: SurfaceSize) {
        self.surface = surface;
    }
}

impl Scene {
    pub fn new(params: HeroParams, surface: SurfaceSize, seed: u64) -> Self {
        let params = params.sanitized();
        let start = DVec2::new(surface.width, surface.height) * params.orb_start_frac;
        let orb = Orb {
            position: start,
            target: start,
            radius: params.orb_radius,
            ease: params.orb_ease,
        };

        let mut rng = StdRng::seed_from_u64(seed);
        let particles = (0..params.particle_count)
            .map(|_| {
                Particle::spawn(
                    &mut rng,
                    start,
                    params.particle_spawn_spread,
                    params.particle_size,
                    params.particle_target_opacity,
                    params.particle_opacity_speed,
                )
            })
            .collect();

        let rules = params.particle_rules();
        Self {
            params,
            surface,
            orb,
            particles,
            rules,
            frames: 0,
        }
    }

    pub fn params(&self) -> &HeroParams {
        &self.params
    }

    /// Frames stepped since construction.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Move the orb target a small fraction toward the pointer, then ease the
    /// orb toward its target.
    pub fn advance_orb(&mut self, pointer: DVec2) {
        let pull = (pointer - self.orb.position) * self.params.pointer_pull;
        self.orb.target += pull;
        self.orb.position = ease_vec_toward(self.orb.position, self.orb.target, self.orb.ease);
    }

    /// Highlight position orbiting the orb at `time_sec` seconds.
    pub fn light_position(&self, time_sec: f64) -> DVec2 {
        let f = self.params.light_freq;
        self.orb.position
            + DVec2::new((time_sec * f.x).cos(), (time_sec * f.y).sin())
                * self.params.light_orbit_radius
    }

    /// Advance the whole scene by one frame with the pointer at `pointer`.
    pub fn step(&mut self, pointer: DVec2) {
        self.advance_orb(pointer);
        let focus = self.orb.position;
        for p in &mut self.particles {
            p.update(focus, &self.rules);
        }
        self.frames += 1;
    }
}
