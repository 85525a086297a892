//! Tumble Box - particles settling in a box that flips over
//!
//! Core modules:
//! - `sim`: Deterministic simulation (box state machine, physics step, collisions)
//! - `renderer`: Vertex data for drawing the box and particles
//! - `hud`: Time counter and box edge labels
//! - `config`: Data-driven physics tuning

pub mod config;
pub mod error;
pub mod hud;
pub mod renderer;
pub mod sim;

pub use config::PhysicsTuning;
pub use error::ConfigError;

use glam::Vec2;

/// Simulation configuration constants
pub mod consts {
    /// Viewport the box is sized against (pixels)
    pub const WINDOW_WIDTH: f32 = 800.0;
    pub const WINDOW_HEIGHT: f32 = 600.0;

    /// Fixed particle population
    pub const PARTICLE_COUNT: usize = 100;
    pub const PARTICLE_RADIUS: f32 = 5.0;

    /// Downward acceleration in world space (pixels/s²)
    pub const GRAVITY: f32 = 20.0;
    /// Fraction of speed kept after a bounce (walls and particles)
    pub const BOUNCE_DAMPENING: f32 = 0.7;

    /// Box rotation speed (radians/s)
    pub const ROTATION_SPEED: f32 = 0.5;
    /// Angle added per flip (180 degrees)
    pub const ROTATION_ANGLE: f32 = std::f32::consts::PI;
    /// Speed below which a particle counts as at rest
    pub const SETTLED_VELOCITY_THRESHOLD: f32 = 1.0;
    /// Seconds everything must stay at rest before the box flips
    pub const SETTLED_CHECK_TIME: f32 = 1.0;

    /// Positional correction: fraction of overlap resolved per step
    pub const CORRECTION_PERCENT: f32 = 0.2;
    /// Overlap tolerated without correction (pixels)
    pub const CORRECTION_SLOP: f32 = 0.01;

    /// Gap between the rotated box and the viewport edge (20px each side)
    pub const BOX_BORDER: f32 = 40.0;
    /// Nominal side length shown on the box labels
    pub const BOX_SIZE_METERS: f32 = 1000.0;

    /// Fixed frame time used by the headless driver (60 Hz)
    pub const FRAME_DT: f32 = 1.0 / 60.0;
}

/// Viewport dimensions in pixels
#[inline]
pub fn viewport() -> Vec2 {
    Vec2::new(consts::WINDOW_WIDTH, consts::WINDOW_HEIGHT)
}
