use crate::core::easing::{ease_toward, ease_vec_toward};
use glam::DVec2;
use rand::prelude::*;

/// Closed-open sampling interval `[min, max)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UniformRange {
    pub min: f64,
    pub max: f64,
}

impl UniformRange {
    /// Bounds are reordered if given backwards.
    pub fn new(a: f64, b: f64) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    #[inline]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.min + rng.gen::<f64>() * (self.max - self.min)
    }
}

/// Per-particle tuning shared by every particle in a scene.
#[derive(Clone, Copy, Debug)]
pub struct ParticleRules {
    /// Fraction of the gap to the orb closed per frame.
    pub drift: f64,
    /// Distance under which the proximity glow override applies.
    pub proximity_radius: f64,
    /// Opacity floor inside `proximity_radius`.
    pub proximity_min_opacity: f64,
}

/// A small dot that fades toward its own target opacity and slowly falls
/// toward the orb. Particles are never removed.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: DVec2,
    pub size: f64,
    pub opacity: f64,
    pub target_opacity: f64,
    pub speed: f64,
}

impl Particle {
    /// Build a particle; opacity values and speed are clamped into \[0, 1\].
    pub fn new(position: DVec2, size: f64, target_opacity: f64, speed: f64) -> Self {
        Self {
            position,
            size: size.max(0.0),
            opacity: 0.0,
            target_opacity: target_opacity.clamp(0.0, 1.0),
            speed: speed.clamp(0.0, 1.0),
        }
    }

    /// Spawn a particle uniformly inside a `spread`-wide box around `center`.
    pub fn spawn<R: Rng + ?Sized>(
        rng: &mut R,
        center: DVec2,
        spread: f64,
        size: UniformRange,
        target_opacity: UniformRange,
        speed: f64,
    ) -> Self {
        let offset = DVec2::new(rng.gen::<f64>() - 0.5, rng.gen::<f64>() - 0.5) * spread;
        let size = size.sample(rng);
        let target = target_opacity.sample(rng);
        Self::new(center + offset, size, target, speed)
    }

    #[inline]
    pub fn distance_to(&self, point: DVec2) -> f64 {
        self.position.distance(point)
    }

    /// Advance one frame against the orb at `focus`: fade toward the target
    /// opacity, drift toward the orb, then apply the proximity floor against
    /// the drifted position.
    pub fn update(&mut self, focus: DVec2, rules: &ParticleRules) {
        self.opacity = ease_toward(self.opacity, self.target_opacity, self.speed);
        self.position = ease_vec_toward(self.position, focus, rules.drift);
        if self.distance_to(focus) < rules.proximity_radius {
            self.opacity = self.opacity.max(rules.proximity_min_opacity);
        }
        self.opacity = self.opacity.clamp(0.0, 1.0);
    }
}
