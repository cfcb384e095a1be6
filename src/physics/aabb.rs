//! Axis-aligned box collision detection and response
//!
//! Bodies are boxes described by centre and half-extents. Separation always
//! happens along the axis of least penetration, which is what keeps a body
//! resting on a platform instead of being shoved sideways off it.

use glam::Vec2;

use crate::sim::entity::Body;

/// Result of a collision check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionResult {
    /// Whether a collision occurred
    pub hit: bool,
    /// Unit axis pointing from the obstacle toward the body (push direction)
    pub normal: Vec2,
    /// Penetration depth along `normal`
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            normal: Vec2::ZERO,
            penetration: 0.0,
        }
    }
}

/// Strict overlap test (touching edges do not count)
pub fn aabb_overlaps(a: &Body, b: &Body) -> bool {
    let d = (a.pos - b.pos).abs();
    let reach = a.half_size + b.half_size;
    d.x < reach.x && d.y < reach.y
}

/// Check collision of `a` against `b`.
///
/// The normal points from `b` to `a`: moving `a` by `normal * penetration`
/// separates the two boxes.
pub fn aabb_collision(a: &Body, b: &Body) -> CollisionResult {
    let delta = a.pos - b.pos;
    let reach = a.half_size + b.half_size;
    let overlap = reach - delta.abs();

    if overlap.x <= 0.0 || overlap.y <= 0.0 {
        return CollisionResult::miss();
    }

    if overlap.y <= overlap.x {
        // Vertical separation; a body exactly centred is pushed up
        let dir = if delta.y > 0.0 { 1.0 } else { -1.0 };
        CollisionResult {
            hit: true,
            normal: Vec2::new(0.0, dir),
            penetration: overlap.y,
        }
    } else {
        let dir = if delta.x > 0.0 { 1.0 } else { -1.0 };
        CollisionResult {
            hit: true,
            normal: Vec2::new(dir, 0.0),
            penetration: overlap.x,
        }
    }
}

/// Check a body against the playfield edges `[0, width] x [0, height]`.
/// Returns one result per violated axis (at most two).
pub fn world_bounds_collision(body: &Body, width: f32, height: f32) -> [CollisionResult; 2] {
    let min = body.min();
    let max = body.max();

    let horizontal = if min.x < 0.0 {
        CollisionResult {
            hit: true,
            normal: Vec2::X,
            penetration: -min.x,
        }
    } else if max.x > width {
        CollisionResult {
            hit: true,
            normal: Vec2::NEG_X,
            penetration: max.x - width,
        }
    } else {
        CollisionResult::miss()
    };

    let vertical = if min.y < 0.0 {
        CollisionResult {
            hit: true,
            normal: Vec2::Y,
            penetration: -min.y,
        }
    } else if max.y > height {
        CollisionResult {
            hit: true,
            normal: Vec2::NEG_Y,
            penetration: max.y - height,
        }
    } else {
        CollisionResult::miss()
    };

    [horizontal, vertical]
}

/// Velocity after rebounding off a surface with the given normal.
///
/// Only the component moving into the surface is reflected (scaled by
/// `bounce`); rebounds slower than `rest_speed` are zeroed so resting bodies
/// settle instead of jittering.
pub fn rebound(vel: Vec2, normal: Vec2, bounce: Vec2, rest_speed: f32) -> Vec2 {
    let into = vel.dot(normal);
    if into >= 0.0 {
        return vel;
    }
    let axis_bounce = if normal.x != 0.0 { bounce.x } else { bounce.y };
    let mut out = vel - normal * into * (1.0 + axis_bounce);
    let along = out.dot(normal);
    if along.abs() < rest_speed {
        out -= normal * along;
    }
    out
}
