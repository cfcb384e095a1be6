//! Physics service seam
//!
//! Gameplay code never integrates motion itself. It hands the physics service
//! every body grouped by kind plus the declared relations, and gets back the
//! contacts that need a gameplay response.

pub mod aabb;
pub mod arcade;

pub use aabb::{CollisionResult, aabb_collision, aabb_overlaps, world_bounds_collision};
pub use arcade::ArcadePhysics;

use serde::{Deserialize, Serialize};

use crate::sim::entity::{Entity, EntityId, EntityKind};

/// How a pair of kinds interacts
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Response {
    /// Solid: bodies are separated
    Collide,
    /// Permeable: bodies pass through each other
    Overlap,
}

/// A declared interaction between two kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    pub a: EntityKind,
    pub b: EntityKind,
    pub response: Response,
    /// Report contacts for this pair (a handler is bound)
    pub notify: bool,
}

/// A reported contact. `a` and `b` follow the relation's order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Contact {
    pub a: EntityId,
    pub b: EntityId,
    pub response: Response,
}

/// Every body in the world, borrowed per kind for one physics step
pub struct BodyGroups<'a> {
    groups: [&'a mut [Entity]; EntityKind::COUNT],
}

impl<'a> BodyGroups<'a> {
    pub fn new(
        player: &'a mut Entity,
        collectibles: &'a mut [Entity],
        hazards: &'a mut [Entity],
        platforms: &'a mut [Entity],
    ) -> Self {
        Self {
            groups: [std::slice::from_mut(player), collectibles, hazards, platforms],
        }
    }

    /// Two different groups at once. None when `a == b`.
    pub fn pair_mut(&mut self, a: EntityKind, b: EntityKind) -> Option<(&mut [Entity], &mut [Entity])> {
        let (i, j) = (a.index(), b.index());
        if i == j {
            return None;
        }
        let (lo, hi) = (i.min(j), i.max(j));
        let (left, right) = self.groups.split_at_mut(hi);
        let first: &mut [Entity] = &mut *left[lo];
        let second: &mut [Entity] = &mut *right[0];
        if i < j {
            Some((first, second))
        } else {
            Some((second, first))
        }
    }

    /// All bodies, every group
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.groups.iter_mut().flat_map(|g| g.iter_mut())
    }
}

/// Physics collaborator contract
pub trait PhysicsService {
    /// Integrate one step and append contacts for notifying relations.
    /// Does nothing while paused.
    fn step(&mut self, bodies: BodyGroups<'_>, relations: &[Relation], dt: f32, contacts: &mut Vec<Contact>);
    /// Freeze all motion
    fn pause(&mut self);
    fn resume(&mut self);
    fn is_paused(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::{Body, SpriteKey};
    use glam::Vec2;

    fn entity(kind: EntityKind, slot: usize) -> Entity {
        Entity::new(
            EntityId::new(kind, slot),
            SpriteKey::Star,
            Body::dynamic(Vec2::ZERO, Vec2::ONE),
        )
    }

    #[test]
    fn test_pair_mut_preserves_requested_order() {
        let mut player = entity(EntityKind::Player, 0);
        let mut stars = vec![entity(EntityKind::Collectible, 0), entity(EntityKind::Collectible, 1)];
        let mut bombs = vec![entity(EntityKind::Hazard, 0)];
        let mut ground: Vec<Entity> = Vec::new();
        let mut groups = BodyGroups::new(&mut player, &mut stars, &mut bombs, &mut ground);

        let (a, b) = groups.pair_mut(EntityKind::Hazard, EntityKind::Player).unwrap();
        assert_eq!(a[0].id.kind, EntityKind::Hazard);
        assert_eq!(b[0].id.kind, EntityKind::Player);

        let (a, b) = groups.pair_mut(EntityKind::Player, EntityKind::Collectible).unwrap();
        assert_eq!(a.len(), 1);
        assert_eq!(b.len(), 2);

        assert!(groups.pair_mut(EntityKind::Hazard, EntityKind::Hazard).is_none());
        assert_eq!(groups.iter_mut().count(), 4);
    }

    #[test]
    fn test_contacts_sort_by_entity_id() {
        let star = |slot| EntityId::new(EntityKind::Collectible, slot);
        let mut contacts = vec![
            Contact { a: EntityId::PLAYER, b: star(5), response: Response::Overlap },
            Contact { a: EntityId::PLAYER, b: star(2), response: Response::Overlap },
        ];
        contacts.sort();
        assert_eq!(contacts[0].b, star(2));
    }
}
