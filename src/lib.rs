//! Star Catcher - a single-screen platformer
//!
//! Core modules:
//! - `sim`: Gameplay rules (pools, scoring, lifecycle, contact handlers)
//! - `physics`: Physics service seam plus the arcade AABB backend
//! - `timer`: One-shot scheduler used for the round reset delay
//! - `scene`: Scene lifecycle runner (setup / tick / restart / teardown)
//! - `config`: Data-driven tuning loaded from JSON
//! - `leaderboard`: In-session round scores

pub mod config;
pub mod error;
pub mod leaderboard;
pub mod physics;
pub mod scene;
pub mod sim;
pub mod timer;

pub use config::Tuning;
pub use error::{ConfigError, SimError};
pub use leaderboard::SessionScores;
pub use scene::Scene;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one tick per rendered frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Frame deltas above this are clamped (tab switches, debugger pauses)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Playfield dimensions
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 600.0;
    /// Downward gravity (pixels/s², y grows downward)
    pub const GRAVITY: f32 = 300.0;

    /// Player defaults
    pub const PLAYER_SPAWN_X: f32 = 100.0;
    pub const PLAYER_SPAWN_Y: f32 = 450.0;
    pub const PLAYER_WIDTH: f32 = 32.0;
    pub const PLAYER_HEIGHT: f32 = 48.0;
    pub const PLAYER_BOUNCE: f32 = 0.2;
    pub const PLAYER_SPEED: f32 = 160.0;
    pub const PLAYER_JUMP_SPEED: f32 = 330.0;

    /// Star field layout
    pub const STAR_COUNT: usize = 12;
    pub const STAR_START_X: f32 = 12.0;
    pub const STAR_START_Y: f32 = 0.0;
    pub const STAR_STEP_X: f32 = 70.0;
    pub const STAR_WIDTH: f32 = 24.0;
    pub const STAR_HEIGHT: f32 = 22.0;
    pub const STAR_BOUNCE_MIN: f32 = 0.4;
    pub const STAR_BOUNCE_MAX: f32 = 0.8;
    pub const STAR_POINTS: u32 = 10;

    /// Bomb defaults
    pub const BOMB_INITIAL_POOL: usize = 1;
    pub const BOMB_SIZE: f32 = 14.0;
    /// Horizontal spread either side of the anchor
    pub const BOMB_SPREAD: f32 = 200.0;
    pub const BOMB_DROP_Y: f32 = 16.0;
    pub const BOMB_MAX_SIDEWAYS_SPEED: f32 = 200.0;
    pub const BOMB_FALL_SPEED: f32 = 20.0;
    pub const BOMB_BOUNCE: f32 = 1.0;

    /// Ground sprite size before scaling
    pub const PLATFORM_WIDTH: f32 = 400.0;
    pub const PLATFORM_HEIGHT: f32 = 32.0;

    /// Delay between death and round reset
    pub const RESET_DELAY_MS: u64 = 1000;
    /// Tint applied to the player on death (0xRRGGBB)
    pub const DAMAGE_TINT: u32 = 0xff0000;
}
