//! Bomb spawner
//!
//! Bombs drop in near wherever the player last grabbed a star. The pool starts
//! small and only grows when every bomb is already in play.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::entity::{Body, Entity, EntityId, EntityKind, SpriteKey};
use crate::config::BombTuning;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HazardSpawner {
    bombs: Vec<Entity>,
    tuning: BombTuning,
    world_width: f32,
}

impl HazardSpawner {
    pub fn new(tuning: &BombTuning, world_width: f32) -> Self {
        let mut spawner = Self {
            bombs: Vec::with_capacity(tuning.initial_pool.max(1)),
            tuning: tuning.clone(),
            world_width,
        };
        for _ in 0..tuning.initial_pool {
            let slot = spawner.allocate();
            spawner.bombs[slot].disable();
        }
        spawner
    }

    pub fn len(&self) -> usize {
        self.bombs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bombs.is_empty()
    }

    pub fn count_active(&self) -> usize {
        self.bombs.iter().filter(|b| b.active).count()
    }

    pub fn get(&self, slot: usize) -> Option<&Entity> {
        self.bombs.get(slot)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.bombs.iter()
    }

    pub fn as_mut_slice(&mut self) -> &mut [Entity] {
        &mut self.bombs
    }

    /// Horizontal range a bomb anchored at `anchor_x` may appear in
    pub fn spawn_range(&self, anchor_x: f32) -> (f32, f32) {
        let lo = (anchor_x - self.tuning.spread).clamp(0.0, self.world_width);
        let hi = (anchor_x + self.tuning.spread).clamp(0.0, self.world_width);
        (lo, hi)
    }

    /// Drop a bomb near `anchor_x`. Returns the slot used.
    pub fn spawn(&mut self, anchor_x: f32, rng: &mut impl Rng) -> usize {
        let slot = match self.bombs.iter().position(|b| !b.active) {
            Some(slot) => slot,
            None => self.allocate(),
        };

        let (lo, hi) = self.spawn_range(anchor_x);
        let x = if hi > lo { rng.random_range(lo..=hi) } else { lo };
        let max_vx = self.tuning.max_sideways_speed;
        let vx = if max_vx > 0.0 {
            rng.random_range(-max_vx..=max_vx)
        } else {
            0.0
        };

        let bomb = &mut self.bombs[slot];
        bomb.enable_at(Vec2::new(x, self.tuning.drop_y));
        bomb.body.vel = Vec2::new(vx, self.tuning.fall_speed);

        log::debug!("Bomb {} spawned at x={:.1} (anchor {:.1}, vx {:.1})", slot, x, anchor_x, vx);
        slot
    }

    /// Append a fresh bomb to the pool
    fn allocate(&mut self) -> usize {
        let slot = self.bombs.len();
        let size = Vec2::splat(self.tuning.size);
        let mut body = Body::dynamic(Vec2::new(0.0, self.tuning.drop_y), size);
        body.bounce = Vec2::splat(self.tuning.bounce);
        body.gravity = self.tuning.gravity;
        body.collide_world_bounds = true;

        let id = EntityId::new(EntityKind::Hazard, slot);
        self.bombs.push(Entity::new(id, SpriteKey::Bomb, body));
        if slot >= self.tuning.initial_pool {
            log::debug!("Bomb pool grew to {}", self.bombs.len());
        }
        slot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn spawner() -> HazardSpawner {
        HazardSpawner::new(&BombTuning::default(), 800.0)
    }

    #[test]
    fn test_initial_pool_is_inactive() {
        let spawner = spawner();
        assert_eq!(spawner.len(), 1);
        assert_eq!(spawner.count_active(), 0);
    }

    #[test]
    fn test_spawn_reuses_free_slot() {
        let mut spawner = spawner();
        let mut rng = Pcg32::seed_from_u64(1);
        let slot = spawner.spawn(400.0, &mut rng);
        assert_eq!(slot, 0);
        assert_eq!(spawner.len(), 1);
        assert_eq!(spawner.count_active(), 1);
    }

    #[test]
    fn test_spawn_grows_when_full() {
        let mut spawner = spawner();
        let mut rng = Pcg32::seed_from_u64(1);
        spawner.spawn(400.0, &mut rng);
        let slot = spawner.spawn(400.0, &mut rng);
        assert_eq!(slot, 1);
        assert_eq!(spawner.len(), 2);
        assert_eq!(spawner.count_active(), 2);
    }

    #[test]
    fn test_spawned_bomb_motion() {
        let mut spawner = spawner();
        let mut rng = Pcg32::seed_from_u64(3);
        let slot = spawner.spawn(400.0, &mut rng);
        let bomb = spawner.get(slot).unwrap();
        assert_eq!(bomb.body.pos.y, 16.0);
        assert_eq!(bomb.body.vel.y, 20.0);
        assert!(bomb.body.vel.x.abs() <= 200.0);
        assert_eq!(bomb.body.bounce, Vec2::ONE);
        assert!(bomb.body.gravity);
        assert!(bomb.body.collide_world_bounds);
    }

    #[test]
    fn test_spawn_range_clamps_to_world() {
        let spawner = spawner();
        assert_eq!(spawner.spawn_range(400.0), (200.0, 600.0));
        assert_eq!(spawner.spawn_range(50.0), (0.0, 250.0));
        assert_eq!(spawner.spawn_range(790.0), (590.0, 800.0));
        assert_eq!(spawner.spawn_range(-100.0), (0.0, 100.0));
        assert_eq!(spawner.spawn_range(5000.0), (800.0, 800.0));
    }

    #[test]
    fn test_zero_spread_spawns_at_anchor() {
        let tuning = BombTuning {
            spread: 0.0,
            ..Default::default()
        };
        let mut spawner = HazardSpawner::new(&tuning, 800.0);
        let mut rng = Pcg32::seed_from_u64(9);
        let slot = spawner.spawn(321.0, &mut rng);
        assert_eq!(spawner.get(slot).unwrap().body.pos.x, 321.0);
    }

    proptest! {
        #[test]
        fn prop_spawn_x_within_clamped_spread(anchor in -200.0f32..1000.0, seed in any::<u64>()) {
            let mut spawner = spawner();
            let mut rng = Pcg32::seed_from_u64(seed);
            let slot = spawner.spawn(anchor, &mut rng);
            let x = spawner.get(slot).unwrap().body.pos.x;
            let lo = (anchor - 200.0).clamp(0.0, 800.0);
            let hi = (anchor + 200.0).clamp(0.0, 800.0);
            prop_assert!(x >= lo && x <= hi, "x={} outside [{}, {}]", x, lo, hi);
        }
    }
}
