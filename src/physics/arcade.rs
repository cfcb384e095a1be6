//! Arcade physics backend
//!
//! Simple box physics: gravity, explicit Euler integration, world-bound
//! clamping, and minimum-axis separation for solid pairs. Good enough for a
//! single-screen platformer and fully deterministic.

use glam::Vec2;

use super::aabb::{CollisionResult, aabb_collision, aabb_overlaps, rebound, world_bounds_collision};
use super::{BodyGroups, Contact, PhysicsService, Relation, Response};
use crate::config::Tuning;
use crate::sim::entity::{Body, Entity, Touching};

/// Rebounds slower than this (pixels/s) are treated as coming to rest
pub const REST_SPEED: f32 = 10.0;

#[derive(Debug, Clone)]
pub struct ArcadePhysics {
    pub gravity: f32,
    pub width: f32,
    pub height: f32,
    paused: bool,
}

impl ArcadePhysics {
    pub fn new(width: f32, height: f32, gravity: f32) -> Self {
        Self {
            gravity,
            width,
            height,
            paused: false,
        }
    }

    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self::new(tuning.world.width, tuning.world.height, tuning.world.gravity)
    }

    fn integrate(&self, body: &mut Body, dt: f32) {
        body.touching = Touching::none();
        if body.gravity {
            body.vel.y += self.gravity * dt;
        }
        body.pos += body.vel * dt;

        if body.collide_world_bounds {
            for hit in world_bounds_collision(body, self.width, self.height) {
                if hit.hit {
                    push_out(body, &hit, hit.penetration);
                }
            }
        }
    }

    /// Resolve a solid pair. Returns true if they were in contact.
    fn separate(a: &mut Entity, b: &mut Entity) -> bool {
        let hit = aabb_collision(&a.body, &b.body);
        if !hit.hit {
            return false;
        }

        match (a.body.is_static, b.body.is_static) {
            (true, true) => {}
            (false, true) => push_out(&mut a.body, &hit, hit.penetration),
            (true, false) => push_out(&mut b.body, &flipped(&hit), hit.penetration),
            (false, false) => {
                let half = hit.penetration * 0.5;
                push_out(&mut a.body, &hit, half);
                push_out(&mut b.body, &flipped(&hit), half);
            }
        }
        true
    }
}

fn flipped(hit: &CollisionResult) -> CollisionResult {
    CollisionResult {
        normal: -hit.normal,
        ..*hit
    }
}

/// Move a body out along the hit normal, rebound, and record the touching side
fn push_out(body: &mut Body, hit: &CollisionResult, depth: f32) {
    body.pos += hit.normal * depth;
    body.vel = rebound(body.vel, hit.normal, body.bounce, REST_SPEED);

    // Pushed up means something is underneath, and so on
    if hit.normal == Vec2::NEG_Y {
        body.touching.down = true;
    } else if hit.normal == Vec2::Y {
        body.touching.up = true;
    } else if hit.normal == Vec2::X {
        body.touching.left = true;
    } else if hit.normal == Vec2::NEG_X {
        body.touching.right = true;
    }
}

impl PhysicsService for ArcadePhysics {
    fn step(&mut self, mut bodies: BodyGroups<'_>, relations: &[Relation], dt: f32, contacts: &mut Vec<Contact>) {
        if self.paused {
            return;
        }

        for entity in bodies.iter_mut() {
            if entity.active && !entity.body.is_static {
                self.integrate(&mut entity.body, dt);
            }
        }

        for relation in relations {
            let Some((group_a, group_b)) = bodies.pair_mut(relation.a, relation.b) else {
                log::warn!("Skipping relation within a single group: {:?}", relation.a);
                continue;
            };

            for a in group_a.iter_mut().filter(|e| e.active) {
                for b in group_b.iter_mut().filter(|e| e.active) {
                    let touched = match relation.response {
                        Response::Collide => Self::separate(a, b),
                        Response::Overlap => aabb_overlaps(&a.body, &b.body),
                    };
                    if touched && relation.notify {
                        contacts.push(Contact {
                            a: a.id,
                            b: b.id,
                            response: relation.response,
                        });
                    }
                }
            }
        }
    }

    fn pause(&mut self) {
        self.paused = true;
    }

    fn resume(&mut self) {
        self.paused = false;
    }

    fn is_paused(&self) -> bool {
        self.paused
    }
}
