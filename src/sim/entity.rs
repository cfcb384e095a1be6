//! Entity and physics body types shared by every pool

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Which pool an entity belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Collectible,
    Hazard,
    Platform,
}

impl EntityKind {
    /// Number of kinds (size of per-kind tables)
    pub const COUNT: usize = 4;

    /// Stable index for per-kind tables
    pub const fn index(self) -> usize {
        match self {
            EntityKind::Player => 0,
            EntityKind::Collectible => 1,
            EntityKind::Hazard => 2,
            EntityKind::Platform => 3,
        }
    }
}

/// Entity identity: the owning pool plus the slot inside it.
/// Ordering is (kind, slot), which is the dispatch order for contacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId {
    pub kind: EntityKind,
    pub slot: usize,
}

impl EntityId {
    pub const PLAYER: EntityId = EntityId::new(EntityKind::Player, 0);

    pub const fn new(kind: EntityKind, slot: usize) -> Self {
        Self { kind, slot }
    }
}

/// Texture key the rendering service draws an entity with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpriteKey {
    Dude,
    Star,
    Bomb,
    Ground,
}

impl SpriteKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpriteKey::Dude => "dude",
            SpriteKey::Star => "star",
            SpriteKey::Bomb => "bomb",
            SpriteKey::Ground => "ground",
        }
    }
}

/// Sides of a body currently in contact with something solid.
/// Written by the physics service every step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Touching {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Touching {
    pub fn none() -> Self {
        Self::default()
    }
}

/// Axis-aligned physics body (y grows downward, `pos` is the centre)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub half_size: Vec2,
    /// Fraction of velocity kept when rebounding, per axis
    pub bounce: Vec2,
    pub gravity: bool,
    pub collide_world_bounds: bool,
    /// Static bodies never move and are never pushed
    pub is_static: bool,
    pub touching: Touching,
}

impl Body {
    /// Dynamic body affected by gravity
    pub fn dynamic(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            half_size: size * 0.5,
            bounce: Vec2::ZERO,
            gravity: true,
            collide_world_bounds: false,
            is_static: false,
            touching: Touching::none(),
        }
    }

    /// Immovable body (terrain)
    pub fn fixed(pos: Vec2, size: Vec2) -> Self {
        Self {
            gravity: false,
            is_static: true,
            ..Self::dynamic(pos, size)
        }
    }

    pub fn min(&self) -> Vec2 {
        self.pos - self.half_size
    }

    pub fn max(&self) -> Vec2 {
        self.pos + self.half_size
    }

    pub fn size(&self) -> Vec2 {
        self.half_size * 2.0
    }
}

/// A simulated object: body, visual and active flag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub sprite: SpriteKey,
    pub body: Body,
    /// Inactive entities are skipped by physics and rendering
    pub active: bool,
    /// Highlight colour (0xRRGGBB), None when untinted
    pub tint: Option<u32>,
}

impl Entity {
    pub fn new(id: EntityId, sprite: SpriteKey, body: Body) -> Self {
        Self {
            id,
            sprite,
            body,
            active: true,
            tint: None,
        }
    }

    /// Enable the body at a position with zero velocity (reuse from a pool)
    pub fn enable_at(&mut self, pos: Vec2) {
        self.active = true;
        self.body.pos = pos;
        self.body.vel = Vec2::ZERO;
        self.body.touching = Touching::none();
    }

    /// Remove from physics and rendering
    pub fn disable(&mut self) {
        self.active = false;
        self.body.vel = Vec2::ZERO;
        self.body.touching = Touching::none();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_id_order_is_kind_then_slot() {
        let mut ids = vec![
            EntityId::new(EntityKind::Hazard, 0),
            EntityId::new(EntityKind::Collectible, 3),
            EntityId::new(EntityKind::Collectible, 1),
            EntityId::PLAYER,
        ];
        ids.sort();
        assert_eq!(
            ids,
            vec![
                EntityId::PLAYER,
                EntityId::new(EntityKind::Collectible, 1),
                EntityId::new(EntityKind::Collectible, 3),
                EntityId::new(EntityKind::Hazard, 0),
            ]
        );
    }

    #[test]
    fn test_body_extents() {
        let body = Body::dynamic(Vec2::new(100.0, 50.0), Vec2::new(32.0, 48.0));
        assert_eq!(body.min(), Vec2::new(84.0, 26.0));
        assert_eq!(body.max(), Vec2::new(116.0, 74.0));
        assert_eq!(body.size(), Vec2::new(32.0, 48.0));
    }

    #[test]
    fn test_disable_and_enable() {
        let id = EntityId::new(EntityKind::Collectible, 0);
        let mut e = Entity::new(id, SpriteKey::Star, Body::dynamic(Vec2::ZERO, Vec2::ONE));
        e.body.vel = Vec2::new(5.0, 5.0);
        e.disable();
        assert!(!e.active);
        assert_eq!(e.body.vel, Vec2::ZERO);

        e.enable_at(Vec2::new(12.0, 0.0));
        assert!(e.active);
        assert_eq!(e.body.pos, Vec2::new(12.0, 0.0));
    }

    #[test]
    fn test_fixed_body_has_no_gravity() {
        let body = Body::fixed(Vec2::ZERO, Vec2::new(400.0, 32.0));
        assert!(body.is_static);
        assert!(!body.gravity);
    }
}
