// Tuning constants for the hero scene. `HeroParams::default()` is built from
// these, so changing a value here changes the default look of the page.

// Host wiring
pub const HERO_CANVAS_ID: &str = "hero-canvas";
pub const KNOT_HOST_ID: &str = "hero-3d";

// Orb (focal object)
pub const ORB_START_FRAC_X: f64 = 0.3; // fraction of surface width
pub const ORB_START_FRAC_Y: f64 = 0.5; // fraction of surface height
pub const ORB_RADIUS: f64 = 120.0;
pub const ORB_EASE: f64 = 0.05; // position -> target, per frame
pub const ORB_POINTER_PULL: f64 = 0.001; // target -> pointer, per frame

// Orbiting light spot
pub const LIGHT_ORBIT_RADIUS: f64 = 50.0;
pub const LIGHT_FREQ_X: f64 = 1.0; // rad/s
pub const LIGHT_FREQ_Y: f64 = 0.7; // rad/s

// Particles
pub const PARTICLE_COUNT: usize = 30;
pub const PARTICLE_SPAWN_SPREAD: f64 = 200.0; // full width of the spawn box around the orb
pub const PARTICLE_SIZE_MIN: f64 = 1.0;
pub const PARTICLE_SIZE_MAX: f64 = 3.0;
pub const PARTICLE_TARGET_OPACITY_MIN: f64 = 0.2;
pub const PARTICLE_TARGET_OPACITY_MAX: f64 = 0.6;
pub const PARTICLE_OPACITY_SPEED: f64 = 0.02;
pub const PARTICLE_DRIFT: f64 = 0.001; // position -> orb, per frame

// Proximity glow override
pub const PROXIMITY_RADIUS: f64 = 200.0;
pub const PROXIMITY_MIN_OPACITY: f64 = 0.4;

// Painting (rgb, alpha)
pub const TRAIL_COLOR: ([u8; 3], f64) = ([15, 15, 30], 0.05);
pub const ORB_GRADIENT_STOPS: [(f32, [u8; 3], f64); 3] = [
    (0.0, [0, 255, 136], 0.8),
    (0.3, [0, 212, 255], 0.4),
    (1.0, [10, 10, 30], 0.1),
];
pub const ORB_GLOW_BLUR: f64 = 80.0;
pub const ORB_GLOW_COLOR: &str = "#00ff88";
pub const ORB_RING_COLOR: ([u8; 3], f64) = ([0, 255, 136], 0.3);
pub const ORB_RING_WIDTH: f64 = 2.0;
pub const PARTICLE_RGB: [u8; 3] = [0, 255, 136];

// Wireframe torus-knot hero
pub const KNOT_RADIUS: f32 = 8.0;
pub const KNOT_TUBE: f32 = 2.5;
pub const KNOT_TUBULAR_SEGMENTS: u32 = 200;
pub const KNOT_RADIAL_SEGMENTS: u32 = 16;
pub const KNOT_P: u32 = 2; // winds around the axis of symmetry
pub const KNOT_Q: u32 = 3; // winds around the interior circle
pub const KNOT_SPIN_X: f32 = 0.005; // rad per frame
pub const KNOT_SPIN_Y: f32 = 0.008; // rad per frame
pub const KNOT_CAMERA_Z: f32 = 30.0;
pub const KNOT_FOVY_DEG: f32 = 75.0;
pub const KNOT_ZNEAR: f32 = 0.1;
pub const KNOT_ZFAR: f32 = 1000.0;
pub const KNOT_LINE_COLOR: &str = "#00ffea";
pub const KNOT_LINE_WIDTH: f64 = 1.0;
