//! Observability hook
//!
//! The step reports noteworthy things as [`SimEvent`]s instead of doing I/O.
//! Drivers pick an observer: [`LogObserver`] forwards to the `log` facade,
//! [`EventLog`] records events for inspection.

use glam::Vec2;

/// Something the simulation wants a collaborator to know about
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimEvent {
    /// A particle moved more than half the box size in one step
    ///
    /// Points at a transform or integration anomaly; the step keeps the
    /// computed values regardless.
    LargeJump {
        index: usize,
        from: Vec2,
        to: Vec2,
        angle: f32,
    },
    /// Every particle came to rest and the box began to flip
    RotationStarted { from: f32, target: f32 },
    /// The box reached its target angle
    RotationFinished { angle: f32 },
}

/// Receiver for [`SimEvent`]s
pub trait SimObserver {
    fn on_event(&mut self, event: SimEvent);
}

/// Forward events to the `log` facade
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl SimObserver for LogObserver {
    fn on_event(&mut self, event: SimEvent) {
        match event {
            SimEvent::LargeJump {
                index,
                from,
                to,
                angle,
            } => log::warn!(
                "Particle {} made large jump: ({:.3},{:.3}) -> ({:.3},{:.3}) at angle {:.3}",
                index,
                from.x,
                from.y,
                to.x,
                to.y,
                angle
            ),
            SimEvent::RotationStarted { from, target } => {
                log::info!("Particles settled, rotating box {:.3} -> {:.3}", from, target)
            }
            SimEvent::RotationFinished { angle } => {
                log::info!("Box rotation finished at {:.3}", angle)
            }
        }
    }
}

/// Record every event in order
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    pub events: Vec<SimEvent>,
}

impl EventLog {
    pub fn large_jumps(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, SimEvent::LargeJump { .. }))
            .count()
    }
}

impl SimObserver for EventLog {
    fn on_event(&mut self, event: SimEvent) {
        self.events.push(event);
    }
}

/// Discard events
impl SimObserver for () {
    fn on_event(&mut self, _event: SimEvent) {}
}
