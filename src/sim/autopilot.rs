//! Demo-mode driver
//!
//! Picks keys for the player: run at the nearest star, jump when it sits
//! above the player, and hop over bombs rolling in at head height.

use std::cmp::Ordering;

use super::player::TickInput;
use super::state::World;

/// Horizontal slack before the autopilot bothers to run
const DEADZONE: f32 = 6.0;
/// A star this far above the player is worth jumping for
const JUMP_FOR_STAR: f32 = 40.0;
/// Bombs closer than this get jumped over
const DANGER_RADIUS: f32 = 70.0;

/// Keys the autopilot would press this tick
pub fn steer(world: &World) -> TickInput {
    let mut input = TickInput::default();
    let player = world.player.pos();

    let target = world
        .collectibles
        .iter()
        .filter(|s| s.active)
        .min_by(|a, b| {
            (a.body.pos - player)
                .length_squared()
                .partial_cmp(&(b.body.pos - player).length_squared())
                .unwrap_or(Ordering::Equal)
        });

    if let Some(star) = target {
        let dx = star.body.pos.x - player.x;
        if dx < -DEADZONE {
            input.left = true;
        } else if dx > DEADZONE {
            input.right = true;
        }
        input.up = player.y - star.body.pos.y > JUMP_FOR_STAR && dx.abs() < DANGER_RADIUS * 2.0;
    }

    // A bomb heading our way at roughly our height: get off the floor
    let threatened = world.hazards.iter().filter(|b| b.active).any(|bomb| {
        let offset = bomb.body.pos - player;
        let closing = offset.x * bomb.body.vel.x < 0.0;
        offset.length() < DANGER_RADIUS && offset.y > -world.player.entity.body.half_size.y && closing
    });
    if threatened {
        input.up = true;
    }

    input
}
