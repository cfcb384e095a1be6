//! Player entity and keyboard controller

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Body, Entity, EntityId, SpriteKey};
use super::lifecycle::Phase;
use crate::config::PlayerTuning;

/// Animation clips on the `dude` sprite sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Anim {
    Left,
    /// Facing the camera; used for idle and death
    #[default]
    Turn,
    Right,
}

impl Anim {
    pub fn key(&self) -> &'static str {
        match self {
            Anim::Left => "left",
            Anim::Turn => "turn",
            Anim::Right => "right",
        }
    }

    /// Sprite sheet frames (inclusive range) for the rendering service
    pub fn frames(&self) -> (u32, u32) {
        match self {
            Anim::Left => (0, 3),
            Anim::Turn => (4, 4),
            Anim::Right => (5, 8),
        }
    }

    pub fn frame_rate(&self) -> u32 {
        match self {
            Anim::Left | Anim::Right => 10,
            Anim::Turn => 20,
        }
    }

    pub fn looping(&self) -> bool {
        !matches!(self, Anim::Turn)
    }
}

/// The player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub entity: Entity,
    pub anim: Anim,
}

impl Player {
    pub fn new(tuning: &PlayerTuning) -> Self {
        let pos = Vec2::new(tuning.spawn_x, tuning.spawn_y);
        let mut body = Body::dynamic(pos, Vec2::new(tuning.width, tuning.height));
        body.bounce = Vec2::splat(tuning.bounce);
        body.collide_world_bounds = true;

        Self {
            entity: Entity::new(EntityId::PLAYER, SpriteKey::Dude, body),
            anim: Anim::Turn,
        }
    }

    pub fn pos(&self) -> Vec2 {
        self.entity.body.pos
    }

    /// Standing on something solid
    pub fn is_supported(&self) -> bool {
        self.entity.body.touching.down
    }
}

/// Directional keys for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// Demo mode - the autopilot picks the keys
    pub autopilot: bool,
}

/// What the controller did this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlOutcome {
    pub anim: Anim,
    pub jumped: bool,
}

/// Maps keys to player velocity and animation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerController {
    /// Run speed (V)
    pub speed: f32,
    /// Jump impulse (J)
    pub jump_speed: f32,
}

impl PlayerController {
    pub fn new(tuning: &PlayerTuning) -> Self {
        Self {
            speed: tuning.speed,
            jump_speed: tuning.jump_speed,
        }
    }

    /// Apply input to the player. Outside `Playing` nothing changes.
    pub fn update(&self, player: &mut Player, input: &TickInput, phase: Phase) -> Option<ControlOutcome> {
        if phase != Phase::Playing {
            return None;
        }

        let body = &mut player.entity.body;
        let anim = match (input.left, input.right) {
            (true, false) => {
                body.vel.x = -self.speed;
                Anim::Left
            }
            (false, true) => {
                body.vel.x = self.speed;
                Anim::Right
            }
            _ => {
                body.vel.x = 0.0;
                Anim::Turn
            }
        };
        player.anim = anim;

        // Support comes from the last physics step, so a jump can't be
        // repeated until the player lands again
        let jumped = input.up && body.touching.down;
        if jumped {
            body.vel.y = -self.jump_speed;
        }

        Some(ControlOutcome { anim, jumped })
    }
}
