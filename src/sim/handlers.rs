//! Gameplay contact handlers
//!
//! Registered in [`InteractionDispatcher::standard`](super::interaction::InteractionDispatcher::standard).
//! Relations list the player first, so `contact.a` is always the player.

use std::time::Duration;

use glam::Vec2;

use super::interaction::Services;
use super::player::Anim;
use super::state::{GameEvent, World};
use crate::error::SimError;
use crate::physics::Contact;

/// Player overlapped a star: score it, refill the row if it was the last
/// one, and drop a bomb near the player.
pub fn collect_star(world: &mut World, _services: &mut Services<'_>, contact: &Contact) -> Result<(), SimError> {
    if !world.lifecycle.is_playing() {
        return Ok(());
    }

    let slot = contact.b.slot;
    world.collectibles.deactivate(slot)?;
    let score = world.score.increment(world.tuning.stars.points)?;
    log::debug!("Star {} collected, score {}", slot, score);
    world.emit(GameEvent::StarCollected { slot, score });

    if world.collectibles.count_active() == 0 {
        world.collectibles.reactivate_all();
        let generation = world.collectibles.generation();
        log::info!("Star row cleared, refilling (wave {})", generation);
        world.emit(GameEvent::FieldRefilled { generation });
    }

    let anchor_x = world.player.pos().x;
    let bomb = world.hazards.spawn(anchor_x, &mut world.rng);
    let x = world.hazards.get(bomb).map_or(anchor_x, |b| b.body.pos.x);
    world.emit(GameEvent::BombSpawned { slot: bomb, x, anchor_x });

    Ok(())
}

/// Player touched a bomb: freeze the world, mark the player and schedule
/// the round reset.
pub fn hit_bomb(world: &mut World, services: &mut Services<'_>, contact: &Contact) -> Result<(), SimError> {
    let delay = Duration::from_millis(world.tuning.reset_delay_ms);
    if !world.lifecycle.end_round(&mut *services.scheduler, delay) {
        return Ok(());
    }

    services.physics.pause();

    let player = &mut world.player;
    player.entity.tint = Some(world.tuning.damage_tint);
    player.anim = Anim::Turn;
    player.entity.body.vel = Vec2::ZERO;

    let score = world.score.score();
    log::info!("Player hit by bomb {} with {} points", contact.b.slot, score);
    world.emit(GameEvent::PlayerHit {
        bomb: contact.b.slot,
        score,
    });

    Ok(())
}
