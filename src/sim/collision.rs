//! Collision detection and response
//!
//! Two kinds of contact: a particle against the box walls (resolved in
//! box-local space, where the walls are axis-aligned) and a particle against
//! another particle (resolved in world space with an impulse along the
//! contact normal plus positional correction).

use glam::Vec2;

use super::state::Particle;

/// Normal used when two centers coincide and the direction is undefined
const FALLBACK_NORMAL: Vec2 = Vec2::X;

/// Which local axes bounced during a boundary check
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallHits {
    pub x: bool,
    pub y: bool,
}

impl WallHits {
    pub fn any(&self) -> bool {
        self.x || self.y
    }
}

/// Clamp a local-space position into the box and reflect the velocity
///
/// Each axis is handled independently, so a corner hit bounces on both.
pub fn resolve_walls(pos: &mut Vec2, vel: &mut Vec2, half: f32, restitution: f32) -> WallHits {
    WallHits {
        x: bounce_axis(&mut pos.x, &mut vel.x, half, restitution),
        y: bounce_axis(&mut pos.y, &mut vel.y, half, restitution),
    }
}

/// Pull a local-space position back inside the box without touching velocity
///
/// Returns whether the position had left the box.
pub fn clamp_to_walls(pos: &mut Vec2, half: f32) -> bool {
    let clamped = pos.clamp(Vec2::splat(-half), Vec2::splat(half));
    let moved = clamped != *pos;
    *pos = clamped;
    moved
}

fn bounce_axis(p: &mut f32, v: &mut f32, half: f32, restitution: f32) -> bool {
    if *p < -half {
        *p = -half;
        *v = -*v * restitution;
        true
    } else if *p > half {
        *p = half;
        *v = -*v * restitution;
        true
    } else {
        false
    }
}

/// Result of a particle-particle contact check
#[derive(Debug, Clone)]
pub struct ContactResult {
    /// Whether the particles overlap
    pub hit: bool,
    /// Unit normal pointing from the first particle toward the second
    pub normal: Vec2,
    /// Overlap depth (sum of radii minus center distance)
    pub penetration: f32,
}

impl ContactResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            normal: Vec2::ZERO,
            penetration: 0.0,
        }
    }
}

/// Overlap test between two particles
pub fn particle_contact(a: &Particle, b: &Particle) -> ContactResult {
    let delta = b.pos - a.pos;
    let dist_sq = delta.length_squared();
    let radius_sum = a.radius + b.radius;

    if dist_sq >= radius_sum * radius_sum {
        return ContactResult::miss();
    }

    let dist = dist_sq.sqrt();
    let normal = if dist > f32::EPSILON {
        delta / dist
    } else {
        FALLBACK_NORMAL
    };

    ContactResult {
        hit: true,
        normal,
        penetration: radius_sum - dist,
    }
}

/// Resolve an overlapping pair of equal-mass particles
///
/// Approaching pairs exchange an equal-and-opposite impulse along the normal,
/// split evenly. Separating pairs keep their velocities. Either way the pair
/// is pushed apart by a fraction of the overlap beyond `slop`.
/// Returns whether an impulse was applied.
pub fn resolve_pair(
    a: &mut Particle,
    b: &mut Particle,
    contact: &ContactResult,
    restitution: f32,
    percent: f32,
    slop: f32,
) -> bool {
    let n = contact.normal;
    let vel_along_normal = (b.vel - a.vel).dot(n);

    let approaching = vel_along_normal < 0.0;
    if approaching {
        let impulse = -(1.0 + restitution) * vel_along_normal / 2.0;
        a.vel -= n * impulse;
        b.vel += n * impulse;
    }

    let correction = (contact.penetration - slop).max(0.0) * percent / 2.0;
    a.pos -= n * correction;
    b.pos += n * correction;

    approaching
}
