//! World state and gameplay events
//!
//! The `World` owns every component of a round. A death never rolls state
//! back: the scene throws the whole World away and builds a new one.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collectibles::CollectibleField;
use super::entity::{Entity, EntityId, EntityKind};
use super::hazards::HazardSpawner;
use super::interaction::InteractionDispatcher;
use super::lifecycle::{Lifecycle, Phase};
use super::player::{Player, PlayerController};
use super::score::ScoreTracker;
use super::terrain::Terrain;
use crate::config::Tuning;
use crate::physics::{BodyGroups, Relation};

/// Something noteworthy happened during a tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    StarCollected { slot: usize, score: u64 },
    /// Every star was collected and the row dropped back in
    FieldRefilled { generation: u32 },
    BombSpawned { slot: usize, x: f32, anchor_x: f32 },
    Jumped,
    PlayerHit { bomb: usize, score: u64 },
    RoundReset { round: u32, final_score: u64 },
}

/// Everything in play for one round
#[derive(Debug, Clone)]
pub struct World {
    /// Base seed of the session
    pub seed: u64,
    /// Round number (0-based), part of the RNG seed
    pub round: u32,
    /// Simulation tick counter for this round
    pub time_ticks: u64,
    pub tuning: Tuning,
    pub rng: Pcg32,
    pub lifecycle: Lifecycle,
    pub score: ScoreTracker,
    pub player: Player,
    pub controller: PlayerController,
    pub collectibles: CollectibleField,
    pub hazards: HazardSpawner,
    pub terrain: Terrain,
    pub dispatcher: InteractionDispatcher,
    /// Events raised this tick, drained by the scene
    pub events: Vec<GameEvent>,
}

impl World {
    /// Build a round from initial conditions. `tuning` must have passed
    /// [`Tuning::validate`]; [`Scene`](crate::Scene) checks this before any
    /// world is built.
    pub fn new(tuning: &Tuning, seed: u64, round: u32) -> Self {
        let mut rng = Pcg32::seed_from_u64(round_seed(seed, round));
        let collectibles = CollectibleField::new(&tuning.stars, &mut rng);
        let platform_size = Vec2::new(tuning.platform_width, tuning.platform_height);

        Self {
            seed,
            round,
            time_ticks: 0,
            tuning: tuning.clone(),
            rng,
            lifecycle: Lifecycle::new(),
            score: ScoreTracker::new(),
            player: Player::new(&tuning.player),
            controller: PlayerController::new(&tuning.player),
            collectibles,
            hazards: HazardSpawner::new(&tuning.bombs, tuning.world.width),
            terrain: Terrain::new(&tuning.platforms, platform_size),
            dispatcher: InteractionDispatcher::standard(),
            events: Vec::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.lifecycle.phase()
    }

    /// Bodies and declared relations, borrowed for one physics step
    pub fn physics_view(&mut self) -> (BodyGroups<'_>, &[Relation]) {
        let bodies = BodyGroups::new(
            &mut self.player.entity,
            self.collectibles.as_mut_slice(),
            self.hazards.as_mut_slice(),
            self.terrain.as_mut_slice(),
        );
        (bodies, self.dispatcher.relations())
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        match id.kind {
            EntityKind::Player => (id.slot == 0).then_some(&self.player.entity),
            EntityKind::Collectible => self.collectibles.get(id.slot),
            EntityKind::Hazard => self.hazards.get(id.slot),
            EntityKind::Platform => self.terrain.iter().nth(id.slot),
        }
    }

    pub fn is_active(&self, id: EntityId) -> bool {
        self.entity(id).is_some_and(|e| e.active)
    }

    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

/// Per-round RNG seed derived from the session seed
pub fn round_seed(seed: u64, round: u32) -> u64 {
    seed.wrapping_add((round as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_world_initial_conditions() {
        let world = World::new(&Tuning::default(), 12345, 0);
        assert_eq!(world.phase(), Phase::Playing);
        assert_eq!(world.score.score(), 0);
        assert_eq!(world.collectibles.count_active(), 12);
        assert_eq!(world.hazards.count_active(), 0);
        assert_eq!(world.terrain.len(), 4);
        assert_eq!(world.player.pos(), Vec2::new(100.0, 450.0));
        assert!(world.events.is_empty());
    }

    #[test]
    fn test_entity_lookup() {
        let world = World::new(&Tuning::default(), 1, 0);
        assert!(world.is_active(EntityId::PLAYER));
        assert!(world.is_active(EntityId::new(EntityKind::Collectible, 11)));
        assert!(!world.is_active(EntityId::new(EntityKind::Collectible, 12)));
        assert!(!world.is_active(EntityId::new(EntityKind::Hazard, 0)));
        assert!(world.entity(EntityId::new(EntityKind::Platform, 3)).is_some());
        assert!(world.entity(EntityId::new(EntityKind::Player, 1)).is_none());
    }

    #[test]
    fn test_rounds_get_different_seeds() {
        assert_eq!(round_seed(42, 0), 42);
        assert_ne!(round_seed(42, 1), round_seed(42, 2));

        let a = World::new(&Tuning::default(), 42, 0);
        let b = World::new(&Tuning::default(), 42, 0);
        let bounces = |w: &World| w.collectibles.iter().map(|s| s.body.bounce.y).collect::<Vec<_>>();
        assert_eq!(bounces(&a), bounces(&b));
    }

    #[test]
    fn test_drain_events() {
        let mut world = World::new(&Tuning::default(), 1, 0);
        world.emit(GameEvent::Jumped);
        assert_eq!(world.drain_events(), vec![GameEvent::Jumped]);
        assert!(world.events.is_empty());
    }
}
