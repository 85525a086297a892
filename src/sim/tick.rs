//! Per-frame simulation step
//!
//! Advances the box state machine, then moves every particle in index order:
//! gravity, box-local integration and wall bounces, then contacts against
//! every higher-indexed particle.

use glam::Vec2;

use super::collision::{clamp_to_walls, particle_contact, resolve_pair, resolve_walls};
use super::events::{SimEvent, SimObserver};
use super::frame::{box_center, box_half_size, from_local, rotate_vector, to_local};
use super::rotation::RotationChange;
use super::state::{BoxState, Particle};
use crate::config::PhysicsTuning;

/// Advance the box and particles by `dt` seconds
///
/// `viewport` only sizes and centers the box.
pub fn step(
    particles: &mut [Particle],
    box_state: &mut BoxState,
    dt: f32,
    viewport: Vec2,
    tuning: &PhysicsTuning,
    observer: &mut impl SimObserver,
) {
    for change in box_state.update(particles, dt, tuning) {
        observer.on_event(match change {
            RotationChange::Started { from, target } => SimEvent::RotationStarted { from, target },
            RotationChange::Finished { angle } => SimEvent::RotationFinished { angle },
        });
    }

    update_particles(particles, box_state.angle, dt, viewport, tuning, observer);
}

/// Move every particle through one frame against a box at `angle`
///
/// Particle `i` is committed before its contacts with `j > i` are resolved,
/// while `j` has not yet had its own wall pass this frame. The order matters
/// for reproducing runs and is kept as is. Once its contacts are done, `i` is
/// clamped back inside the walls, so every particle ends the frame in the box.
pub fn update_particles(
    particles: &mut [Particle],
    angle: f32,
    dt: f32,
    viewport: Vec2,
    tuning: &PhysicsTuning,
    observer: &mut impl SimObserver,
) {
    let center = box_center(viewport);
    let half = box_half_size(viewport);
    let gravity = Vec2::new(0.0, tuning.gravity);

    for i in 0..particles.len() {
        let previous = particles[i].pos;

        // Gravity always points down in world space
        particles[i].vel += gravity * dt;

        let mut pos = to_local(previous, center, angle);
        let mut vel = rotate_vector(particles[i].vel, -angle);

        pos += vel * dt;
        resolve_walls(&mut pos, &mut vel, half, tuning.restitution);

        let vel = rotate_vector(vel, angle);
        let pos = from_local(pos, center, angle);

        let jump = (pos - previous).abs();
        if jump.x > half || jump.y > half {
            observer.on_event(SimEvent::LargeJump {
                index: i,
                from: previous,
                to: pos,
                angle,
            });
        }

        particles[i].pos = pos;
        particles[i].vel = vel;

        let (head, tail) = particles.split_at_mut(i + 1);
        let current = &mut head[i];
        for other in tail.iter_mut() {
            let contact = particle_contact(current, other);
            if !contact.hit {
                continue;
            }
            resolve_pair(
                current,
                other,
                &contact,
                tuning.restitution,
                tuning.correction_percent,
                tuning.correction_slop,
            );
        }

        // Contacts may have pushed `i` through a wall; no later pass moves it
        let mut local = to_local(current.pos, center, angle);
        if clamp_to_walls(&mut local, half) {
            current.pos = from_local(local, center, angle);
        }
    }
}
