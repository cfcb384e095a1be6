//! Star field: a fixed pool of pickups laid out in one row
//!
//! Stars are never created or destroyed after construction. Picking one up
//! disables it; once the last one is gone the whole row drops back in at the
//! original grid slots.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::entity::{Body, Entity, EntityId, EntityKind, SpriteKey};
use crate::config::StarTuning;
use crate::error::SimError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectibleField {
    stars: Vec<Entity>,
    /// Grid slot each star returns to on refill
    home: Vec<Vec2>,
    /// Bumped on every refill
    generation: u32,
}

impl CollectibleField {
    /// Lay out `tuning.count` stars with a random vertical bounce each
    pub fn new(tuning: &StarTuning, rng: &mut impl Rng) -> Self {
        let size = Vec2::new(tuning.width, tuning.height);
        let mut stars = Vec::with_capacity(tuning.count);
        let mut home = Vec::with_capacity(tuning.count);

        for slot in 0..tuning.count {
            let pos = Vec2::new(tuning.start_x + slot as f32 * tuning.step_x, tuning.start_y);
            let mut body = Body::dynamic(pos, size);
            body.bounce.y = rng.random_range(tuning.bounce_min..=tuning.bounce_max);

            let id = EntityId::new(EntityKind::Collectible, slot);
            stars.push(Entity::new(id, SpriteKey::Star, body));
            home.push(pos);
        }

        Self {
            stars,
            home,
            generation: 0,
        }
    }

    /// Pool size (N)
    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    pub fn count_active(&self) -> usize {
        self.stars.iter().filter(|s| s.active).count()
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn get(&self, slot: usize) -> Option<&Entity> {
        self.stars.get(slot)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.stars.iter()
    }

    pub fn as_mut_slice(&mut self) -> &mut [Entity] {
        &mut self.stars
    }

    /// Take a star out of play
    pub fn deactivate(&mut self, slot: usize) -> Result<(), SimError> {
        let len = self.stars.len();
        let star = self
            .stars
            .get_mut(slot)
            .ok_or(SimError::UnknownCollectible { slot, len })?;
        if !star.active {
            return Err(SimError::CollectibleAlreadyInactive { slot });
        }
        star.disable();
        Ok(())
    }

    /// Put every star back at its grid slot and drop height
    pub fn reactivate_all(&mut self) {
        for (star, home) in self.stars.iter_mut().zip(&self.home) {
            star.enable_at(*home);
        }
        self.generation = self.generation.wrapping_add(1);
    }
}
