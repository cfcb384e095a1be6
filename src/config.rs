//! Game tuning
//!
//! Every gameplay number lives here so a level can be rebalanced from a JSON
//! file without a rebuild. Missing fields fall back to the defaults in
//! [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Environment variable pointing at a tuning file
pub const CONFIG_ENV: &str = "STAR_CATCHER_CONFIG";
/// Path used when the environment variable is unset
pub const DEFAULT_CONFIG_PATH: &str = "config/tuning.json";

/// Playfield and global physics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldTuning {
    pub width: f32,
    pub height: f32,
    pub gravity: f32,
}

impl Default for WorldTuning {
    fn default() -> Self {
        Self {
            width: WORLD_WIDTH,
            height: WORLD_HEIGHT,
            gravity: GRAVITY,
        }
    }
}

/// Player body and controls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    pub spawn_x: f32,
    pub spawn_y: f32,
    pub width: f32,
    pub height: f32,
    pub bounce: f32,
    /// Horizontal run speed (V)
    pub speed: f32,
    /// Upward impulse on jump (J)
    pub jump_speed: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            spawn_x: PLAYER_SPAWN_X,
            spawn_y: PLAYER_SPAWN_Y,
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            bounce: PLAYER_BOUNCE,
            speed: PLAYER_SPEED,
            jump_speed: PLAYER_JUMP_SPEED,
        }
    }
}

/// Star row layout and scoring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarTuning {
    pub count: usize,
    pub start_x: f32,
    pub start_y: f32,
    pub step_x: f32,
    pub width: f32,
    pub height: f32,
    pub bounce_min: f32,
    pub bounce_max: f32,
    pub points: u32,
}

impl Default for StarTuning {
    fn default() -> Self {
        Self {
            count: STAR_COUNT,
            start_x: STAR_START_X,
            start_y: STAR_START_Y,
            step_x: STAR_STEP_X,
            width: STAR_WIDTH,
            height: STAR_HEIGHT,
            bounce_min: STAR_BOUNCE_MIN,
            bounce_max: STAR_BOUNCE_MAX,
            points: STAR_POINTS,
        }
    }
}

/// Bomb pool and spawn behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BombTuning {
    pub initial_pool: usize,
    pub size: f32,
    /// Spawn x is drawn from anchor ± spread (R)
    pub spread: f32,
    pub drop_y: f32,
    pub max_sideways_speed: f32,
    pub fall_speed: f32,
    pub bounce: f32,
    pub gravity: bool,
}

impl Default for BombTuning {
    fn default() -> Self {
        Self {
            initial_pool: BOMB_INITIAL_POOL,
            size: BOMB_SIZE,
            spread: BOMB_SPREAD,
            drop_y: BOMB_DROP_Y,
            max_sideways_speed: BOMB_MAX_SIDEWAYS_SPEED,
            fall_speed: BOMB_FALL_SPEED,
            bounce: BOMB_BOUNCE,
            gravity: true,
        }
    }
}

/// One platform: centre position and uniform scale of the ground sprite
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlatformSpec {
    pub x: f32,
    pub y: f32,
    #[serde(default = "default_scale")]
    pub scale: f32,
}

fn default_scale() -> f32 {
    1.0
}

impl PlatformSpec {
    pub const fn new(x: f32, y: f32, scale: f32) -> Self {
        Self { x, y, scale }
    }
}

/// Complete game tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub world: WorldTuning,
    pub player: PlayerTuning,
    pub stars: StarTuning,
    pub bombs: BombTuning,

    // === Terrain ===
    pub platform_width: f32,
    pub platform_height: f32,
    pub platforms: Vec<PlatformSpec>,

    // === Lifecycle ===
    /// Delay between death and round reset (D)
    pub reset_delay_ms: u64,
    /// Player tint on death (0xRRGGBB)
    pub damage_tint: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            world: WorldTuning::default(),
            player: PlayerTuning::default(),
            stars: StarTuning::default(),
            bombs: BombTuning::default(),

            platform_width: PLATFORM_WIDTH,
            platform_height: PLATFORM_HEIGHT,
            platforms: vec![
                // Ground, scaled to span the whole floor
                PlatformSpec::new(400.0, 568.0, 2.0),
                PlatformSpec::new(600.0, 400.0, 1.0),
                PlatformSpec::new(50.0, 250.0, 1.0),
                PlatformSpec::new(750.0, 220.0, 1.0),
            ],

            reset_delay_ms: RESET_DELAY_MS,
            damage_tint: DAMAGE_TINT,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Read, parse and validate a tuning file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load tuning from `$STAR_CATCHER_CONFIG` (or the default path).
    /// Falls back to defaults if the file is missing or invalid.
    pub fn load() -> Self {
        let path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        match Self::from_path(&path) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path);
                tuning
            }
            Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No tuning file at {}, using defaults", path);
                Self::default()
            }
            Err(e) => {
                log::warn!("Failed to load {}: {}, using defaults", path, e);
                Self::default()
            }
        }
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.floats().all(f32::is_finite) {
            return Err(ConfigError::Invalid("tuning values must be finite"));
        }
        if self.world.width <= 0.0 || self.world.height <= 0.0 {
            return Err(ConfigError::Invalid("world size must be positive"));
        }
        if self.stars.count == 0 {
            return Err(ConfigError::Invalid("star count must be at least 1"));
        }
        if self.stars.points == 0 {
            return Err(ConfigError::Invalid("star points must be positive"));
        }
        if self.stars.bounce_min > self.stars.bounce_max {
            return Err(ConfigError::Invalid("star bounce range is inverted"));
        }
        if self.bombs.spread < 0.0 {
            return Err(ConfigError::Invalid("bomb spread must not be negative"));
        }
        if self.bombs.max_sideways_speed < 0.0 {
            return Err(ConfigError::Invalid("bomb sideways speed must not be negative"));
        }
        let sizes = [
            self.player.width,
            self.player.height,
            self.stars.width,
            self.stars.height,
            self.bombs.size,
            self.platform_width,
            self.platform_height,
        ];
        if sizes.iter().any(|s| *s <= 0.0) {
            return Err(ConfigError::Invalid("entity sizes must be positive"));
        }
        if self.platforms.iter().any(|p| p.scale <= 0.0) {
            return Err(ConfigError::Invalid("platform scale must be positive"));
        }
        Ok(())
    }

    /// Every float in the tuning, platforms included
    fn floats(&self) -> impl Iterator<Item = f32> + '_ {
        let (w, p, s, b) = (&self.world, &self.player, &self.stars, &self.bombs);
        let scalars = [
            w.width,
            w.height,
            w.gravity,
            p.spawn_x,
            p.spawn_y,
            p.width,
            p.height,
            p.bounce,
            p.speed,
            p.jump_speed,
            s.start_x,
            s.start_y,
            s.step_x,
            s.width,
            s.height,
            s.bounce_min,
            s.bounce_max,
            b.size,
            b.spread,
            b.drop_y,
            b.max_sideways_speed,
            b.fall_speed,
            b.bounce,
            self.platform_width,
            self.platform_height,
        ];
        scalars
            .into_iter()
            .chain(self.platforms.iter().flat_map(|spec| [spec.x, spec.y, spec.scale]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let tuning = Tuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.stars.count, 12);
        assert_eq!(tuning.platforms.len(), 4);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let tuning = Tuning::from_json(r#"{ "player": { "speed": 200.0 }, "reset_delay_ms": 500 }"#)
            .expect("valid tuning");
        assert_eq!(tuning.player.speed, 200.0);
        assert_eq!(tuning.player.jump_speed, PLAYER_JUMP_SPEED);
        assert_eq!(tuning.reset_delay_ms, 500);
        assert_eq!(tuning.stars, StarTuning::default());
    }

    #[test]
    fn test_platform_scale_defaults_to_one() {
        let tuning = Tuning::from_json(r#"{ "platforms": [ { "x": 10.0, "y": 20.0 } ] }"#)
            .expect("valid tuning");
        assert_eq!(tuning.platforms, vec![PlatformSpec::new(10.0, 20.0, 1.0)]);
    }

    #[test]
    fn test_rejects_invalid_values() {
        let err = Tuning::from_json(r#"{ "stars": { "count": 0 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = Tuning::from_json(r#"{ "stars": { "bounce_min": 0.9, "bounce_max": 0.1 } }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = Tuning::from_json("not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_non_finite_values() {
        // 1e39 overflows f32 and parses as infinity
        let err = Tuning::from_json(r#"{ "stars": { "bounce_max": 1e39 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = Tuning::from_json(r#"{ "platforms": [ { "x": 1e39, "y": 20.0 } ] }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let mut tuning = Tuning::default();
        tuning.world.gravity = f32::NAN;
        assert!(matches!(tuning.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Tuning::from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_json_roundtrip_preserves_layout() {
        let tuning = Tuning::default();
        let json = serde_json::to_string(&tuning).expect("serialize");
        assert_eq!(Tuning::from_json(&json).expect("parse"), tuning);
    }
}
