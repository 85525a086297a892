//! Simulation state and core types
//!
//! Everything the step mutates lives here, owned by [`Simulation`].

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::events::SimObserver;
use super::tick::step;
use crate::config::PhysicsTuning;
use crate::consts::*;

/// A circular particle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    /// World-space position (pixels)
    pub pos: Vec2,
    /// World-space velocity (pixels/s)
    pub vel: Vec2,
    pub radius: f32,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            radius: PARTICLE_RADIUS,
        }
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Spawn somewhere in the upper half of the viewport, drifting sideways
    pub fn random(rng: &mut Pcg32, viewport: Vec2) -> Self {
        let x = rng.random_range(0..viewport.x as u32) as f32;
        let y = rng.random_range(0..(viewport.y as u32 / 2).max(1)) as f32;
        let vx = rng.random_range(-100..100) as f32 / 100.0;
        Self::new(Vec2::new(x, y), Vec2::new(vx, 0.0))
    }
}

/// Phase of the box state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoxPhase {
    /// Box is still; waiting for particles to come to rest
    Settled,
    /// Box is turning toward its target angle
    Rotating,
}

/// Orientation of the box and the bookkeeping that decides when it flips
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoxState {
    /// Current world-frame orientation (radians)
    pub angle: f32,
    /// Destination of the rotation in progress (radians)
    pub target_angle: f32,
    pub is_rotating: bool,
    /// Seconds all particles have been below the settle speed
    pub time_since_last_move: f32,
}

impl BoxState {
    pub fn phase(&self) -> BoxPhase {
        if self.is_rotating {
            BoxPhase::Rotating
        } else {
            BoxPhase::Settled
        }
    }
}

/// Complete simulation context (deterministic for a given seed and dt sequence)
#[derive(Debug, Clone)]
pub struct Simulation {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Fixed-size population, iterated in index order
    pub particles: Vec<Particle>,
    pub box_state: BoxState,
    pub tuning: PhysicsTuning,
    /// Viewport the box is sized against (pixels)
    pub viewport: Vec2,
    /// Simulated seconds since start or last reset
    pub elapsed: f64,
    /// Frames stepped since start or last reset
    pub frame: u64,
    rng: Pcg32,
}

impl Simulation {
    /// Create a simulation with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, PhysicsTuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: PhysicsTuning) -> Self {
        let mut sim = Self {
            seed,
            particles: Vec::with_capacity(PARTICLE_COUNT),
            box_state: BoxState::default(),
            tuning,
            viewport: crate::viewport(),
            elapsed: 0.0,
            frame: 0,
            rng: Pcg32::seed_from_u64(seed),
        };
        sim.spawn_particles(PARTICLE_COUNT);
        sim
    }

    /// Build a simulation from explicit particles (no random spawn)
    ///
    /// The seed is 0, so a later [`reset`](Self::reset) respawns the same
    /// number of particles at seeded random positions rather than restoring
    /// these ones.
    pub fn from_particles(particles: Vec<Particle>, tuning: PhysicsTuning) -> Self {
        Self {
            seed: 0,
            particles,
            box_state: BoxState::default(),
            tuning,
            viewport: crate::viewport(),
            elapsed: 0.0,
            frame: 0,
            rng: Pcg32::seed_from_u64(0),
        }
    }

    fn spawn_particles(&mut self, count: usize) {
        self.particles.clear();
        for _ in 0..count {
            let particle = Particle::random(&mut self.rng, self.viewport);
            self.particles.push(particle);
        }
    }

    /// Respawn particles and return the box and clock to their initial state
    ///
    /// Draws from the continuing RNG stream, so successive resets differ
    /// while the whole run stays reproducible from `seed`. The population
    /// size is kept.
    pub fn reset(&mut self) {
        let count = self.particles.len();
        self.spawn_particles(count);
        self.box_state = BoxState::default();
        self.elapsed = 0.0;
        self.frame = 0;
        log::info!("Simulation reset (seed {})", self.seed);
    }

    /// Advance one frame of `dt` seconds
    pub fn tick(&mut self, dt: f32, observer: &mut impl SimObserver) {
        step(
            &mut self.particles,
            &mut self.box_state,
            dt,
            self.viewport,
            &self.tuning,
            observer,
        );
        self.elapsed += f64::from(dt);
        self.frame += 1;
    }

    /// Elapsed simulated time in whole milliseconds
    pub fn elapsed_ms(&self) -> u64 {
        (self.elapsed * 1000.0) as u64
    }
}
