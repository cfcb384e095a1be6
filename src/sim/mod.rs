//! Deterministic simulation module
//!
//! All gameplay rules live here. This module must stay deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - Physics and timers only through their service traits

pub mod autopilot;
pub mod collectibles;
pub mod entity;
pub mod handlers;
pub mod hazards;
pub mod interaction;
pub mod lifecycle;
pub mod player;
pub mod score;
pub mod snapshot;
pub mod state;
pub mod terrain;
pub mod tick;

pub use collectibles::CollectibleField;
pub use entity::{Body, Entity, EntityId, EntityKind, SpriteKey, Touching};
pub use hazards::HazardSpawner;
pub use interaction::{ContactHandler, InteractionDispatcher, Services, dispatch};
pub use lifecycle::{Lifecycle, Phase};
pub use player::{Anim, ControlOutcome, Player, PlayerController, TickInput};
pub use score::ScoreTracker;
pub use snapshot::{AnimView, Snapshot, SpriteView};
pub use state::{GameEvent, World, round_seed};
pub use terrain::Terrain;
pub use tick::tick;
