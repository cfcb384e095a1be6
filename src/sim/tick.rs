//! Fixed timestep simulation tick
//!
//! One tick: controls, one physics step, then contact handlers in a stable
//! order. Timers are advanced by the scene, not here.

use super::autopilot;
use super::interaction::{Services, dispatch};
use super::lifecycle::Phase;
use super::player::TickInput;
use super::state::{GameEvent, World};
use crate::error::SimError;

/// Advance the world by one fixed timestep
pub fn tick(world: &mut World, services: &mut Services<'_>, input: &TickInput, dt: f32) -> Result<(), SimError> {
    if world.phase() == Phase::Resetting {
        return Ok(());
    }
    world.time_ticks += 1;

    let input = if input.autopilot {
        autopilot::steer(world)
    } else {
        *input
    };

    let phase = world.phase();
    let outcome = world.controller.update(&mut world.player, &input, phase);
    if outcome.is_some_and(|o| o.jumped) {
        world.emit(GameEvent::Jumped);
    }

    let mut contacts = Vec::new();
    {
        let (bodies, relations) = world.physics_view();
        services.physics.step(bodies, relations, dt, &mut contacts);
    }

    dispatch(world, services, &mut contacts)?;
    Ok(())
}
