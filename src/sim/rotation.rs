//! Box state machine
//!
//! Settled -> Rotating once every particle has stayed below the settle speed
//! for the settle time; Rotating -> Settled when the target angle is reached.

use super::state::{BoxState, Particle};
use crate::config::PhysicsTuning;

/// Transition taken during an update
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RotationChange {
    Started { from: f32, target: f32 },
    Finished { angle: f32 },
}

/// True when every particle moves slower than the settle speed
pub fn all_settled(particles: &[Particle], settle_speed: f32) -> bool {
    particles.iter().all(|p| p.speed() < settle_speed)
}

impl BoxState {
    /// Advance the state machine by `dt` seconds
    ///
    /// Runs the settle check first, then steps an active rotation. Both can
    /// fire in one update: a rotation that starts this frame also advances.
    pub fn update(
        &mut self,
        particles: &[Particle],
        dt: f32,
        tuning: &PhysicsTuning,
    ) -> Vec<RotationChange> {
        let mut changes = Vec::new();

        if all_settled(particles, tuning.settle_speed) {
            if !self.is_rotating {
                self.time_since_last_move += dt;
                if self.time_since_last_move >= tuning.settle_time {
                    let from = self.angle;
                    self.start_rotation(tuning.rotation_angle);
                    changes.push(RotationChange::Started {
                        from,
                        target: self.target_angle,
                    });
                }
            }
        } else {
            // Keeps a new flip from being scheduled; never interrupts one
            self.time_since_last_move = 0.0;
        }

        if let Some(change) = self.advance_rotation(dt, tuning.rotation_speed) {
            changes.push(change);
        }

        changes
    }

    fn start_rotation(&mut self, rotation_angle: f32) {
        self.is_rotating = true;
        self.target_angle = self.angle + rotation_angle;
    }

    /// Turn toward the target; clamps exactly onto it on arrival
    fn advance_rotation(&mut self, dt: f32, rotation_speed: f32) -> Option<RotationChange> {
        if !self.is_rotating {
            return None;
        }
        self.angle += rotation_speed * dt;
        if self.angle >= self.target_angle {
            self.angle = self.target_angle;
            self.is_rotating = false;
            self.time_since_last_move = 0.0;
            return Some(RotationChange::Finished { angle: self.angle });
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::BoxPhase;
    use glam::Vec2;
    use std::f32::consts::{PI, TAU};

    fn resting() -> Vec<Particle> {
        vec![Particle::new(Vec2::new(400.0, 300.0), Vec2::ZERO)]
    }

    fn moving() -> Vec<Particle> {
        vec![Particle::new(Vec2::new(400.0, 300.0), Vec2::new(0.0, 1.0))]
    }

    #[test]
    fn test_settle_then_rotate() {
        let tuning = PhysicsTuning::default();
        let mut state = BoxState::default();
        let particles = resting();

        // 0.9s of rest: still waiting
        for _ in 0..9 {
            assert!(state.update(&particles, 0.1, &tuning).is_empty());
        }
        assert_eq!(state.phase(), BoxPhase::Settled);

        let changes = state.update(&particles, 0.2, &tuning);
        assert_eq!(state.phase(), BoxPhase::Rotating);
        assert!((state.target_angle - PI).abs() < 1e-6);
        assert!(matches!(changes[0], RotationChange::Started { from, .. } if from == 0.0));
    }

    #[test]
    fn test_speed_at_threshold_resets_timer() {
        let tuning = PhysicsTuning::default();
        let mut state = BoxState::default();
        state.update(&resting(), 0.5, &tuning);
        assert!((state.time_since_last_move - 0.5).abs() < 1e-6);

        state.update(&moving(), 0.5, &tuning);
        assert_eq!(state.time_since_last_move, 0.0);
        assert_eq!(state.phase(), BoxPhase::Settled);
    }

    #[test]
    fn test_motion_does_not_interrupt_rotation() {
        let tuning = PhysicsTuning::default();
        let mut state = BoxState {
            angle: 0.0,
            target_angle: PI,
            is_rotating: true,
            time_since_last_move: 0.0,
        };
        state.update(&moving(), 0.1, &tuning);
        assert!(state.is_rotating);
        assert!((state.angle - 0.05).abs() < 1e-6);
    }

    #[test]
    fn test_timer_does_not_accumulate_while_rotating() {
        let tuning = PhysicsTuning::default();
        let mut state = BoxState {
            angle: 0.0,
            target_angle: PI,
            is_rotating: true,
            time_since_last_move: 0.0,
        };
        state.update(&resting(), 0.5, &tuning);
        assert_eq!(state.time_since_last_move, 0.0);
    }

    #[test]
    fn test_rotation_completes_exactly_on_target() {
        let tuning = PhysicsTuning::default();
        let mut state = BoxState {
            angle: 0.0,
            target_angle: PI,
            is_rotating: true,
            time_since_last_move: 0.0,
        };
        let particles = moving();
        let mut finished = false;
        let mut t = 0.0;
        while t < TAU + 0.1 {
            for change in state.update(&particles, 1.0 / 60.0, &tuning) {
                if let RotationChange::Finished { angle } = change {
                    assert_eq!(angle, PI);
                    finished = true;
                }
            }
            t += 1.0 / 60.0;
        }
        assert!(finished);
        assert_eq!(state.angle, state.target_angle);
        assert!(!state.is_rotating);
        assert_eq!(state.time_since_last_move, 0.0);
    }

    #[test]
    fn test_angle_monotonic_while_rotating() {
        let tuning = PhysicsTuning::default();
        let mut state = BoxState {
            angle: PI,
            target_angle: TAU,
            is_rotating: true,
            time_since_last_move: 0.0,
        };
        let mut last = state.angle;
        while state.is_rotating {
            state.update(&resting(), 0.05, &tuning);
            assert!(state.angle >= last);
            assert!(state.angle <= TAU);
            last = state.angle;
        }
        assert_eq!(state.angle, TAU);
    }
}
