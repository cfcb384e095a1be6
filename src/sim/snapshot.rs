//! Render snapshot
//!
//! Everything the rendering service needs to draw one frame. Inactive
//! entities are left out entirely.

use serde::Serialize;

use super::entity::{Entity, EntityId};
use super::lifecycle::Phase;
use super::player::Anim;
use super::state::World;

/// One drawable sprite
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpriteView {
    pub id: EntityId,
    pub texture: &'static str,
    /// Centre position
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Tint as 0xRRGGBB
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tint: Option<u32>,
}

impl SpriteView {
    fn of(entity: &Entity) -> Self {
        let size = entity.body.size();
        Self {
            id: entity.id,
            texture: entity.sprite.as_str(),
            x: entity.body.pos.x,
            y: entity.body.pos.y,
            width: size.x,
            height: size.y,
            tint: entity.tint,
        }
    }
}

/// Clip the `dude` sprite should be playing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnimView {
    pub key: &'static str,
    /// Sprite sheet frames, inclusive
    pub first_frame: u32,
    pub last_frame: u32,
    pub frame_rate: u32,
    pub looping: bool,
}

impl From<Anim> for AnimView {
    fn from(anim: Anim) -> Self {
        let (first_frame, last_frame) = anim.frames();
        Self {
            key: anim.key(),
            first_frame,
            last_frame,
            frame_rate: anim.frame_rate(),
            looping: anim.looping(),
        }
    }
}

/// Frame description for the renderer
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub round: u32,
    pub tick: u64,
    pub phase: Phase,
    pub score: u64,
    pub score_label: String,
    pub player: SpriteView,
    pub anim: AnimView,
    pub platforms: Vec<SpriteView>,
    pub stars: Vec<SpriteView>,
    pub bombs: Vec<SpriteView>,
}

impl Snapshot {
    pub fn capture(world: &World) -> Self {
        let active = |e: &&Entity| e.active;
        Self {
            round: world.round,
            tick: world.time_ticks,
            phase: world.phase(),
            score: world.score.score(),
            score_label: world.score.label().to_string(),
            player: SpriteView::of(&world.player.entity),
            anim: world.player.anim.into(),
            platforms: world.terrain.iter().filter(active).map(SpriteView::of).collect(),
            stars: world.collectibles.iter().filter(active).map(SpriteView::of).collect(),
            bombs: world.hazards.iter().filter(active).map(SpriteView::of).collect(),
        }
    }

    /// Number of sprites to draw, player included
    pub fn sprite_count(&self) -> usize {
        1 + self.platforms.len() + self.stars.len() + self.bombs.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Tuning;

    #[test]
    fn test_capture_initial_world() {
        let world = World::new(&Tuning::default(), 1, 0);
        let snap = Snapshot::capture(&world);

        assert_eq!(snap.phase, Phase::Playing);
        assert_eq!(snap.score_label, "0");
        assert_eq!(snap.anim.key, "turn");
        assert_eq!((snap.anim.first_frame, snap.anim.last_frame), (4, 4));
        assert!(!snap.anim.looping);
        assert_eq!(snap.player.texture, "dude");
        assert_eq!(snap.stars.len(), 12);
        assert!(snap.bombs.is_empty());
        assert_eq!(snap.platforms.len(), 4);
        assert_eq!(snap.sprite_count(), 17);
        // Ground is drawn at double scale
        assert_eq!((snap.platforms[0].width, snap.platforms[0].height), (800.0, 64.0));
    }

    #[test]
    fn test_inactive_entities_are_not_drawn() {
        let mut world = World::new(&Tuning::default(), 1, 0);
        world.collectibles.deactivate(4).unwrap();
        world.player.entity.tint = Some(0xff0000);

        let snap = Snapshot::capture(&world);
        assert_eq!(snap.stars.len(), 11);
        assert!(snap.stars.iter().all(|s| s.id.slot != 4));
        assert_eq!(snap.player.tint, Some(0xff0000));
    }

    #[test]
    fn test_label_and_clip_follow_the_world() {
        let mut world = World::new(&Tuning::default(), 1, 0);
        world.score.increment(30).unwrap();
        world.player.anim = Anim::Left;

        let snap = Snapshot::capture(&world);
        assert_eq!(snap.score_label, world.score.label());
        assert_eq!(snap.score_label, "30");
        assert_eq!(
            snap.anim,
            AnimView {
                key: "left",
                first_frame: 0,
                last_frame: 3,
                frame_rate: 10,
                looping: true,
            }
        );
    }

    #[test]
    fn test_serializes_to_json() {
        let world = World::new(&Tuning::default(), 1, 0);
        let json = serde_json::to_value(Snapshot::capture(&world)).unwrap();
        assert_eq!(json["phase"], "Playing");
        assert_eq!(json["stars"][0]["texture"], "star");
        assert!(json["player"].get("tint").is_none());
        assert_eq!(json["anim"]["key"], "turn");
        assert_eq!(json["anim"]["frame_rate"], 20);
    }
}
