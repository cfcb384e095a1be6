//! Error types
//!
//! `SimError` covers gameplay contract violations (these indicate a bug in the
//! caller, never a recoverable runtime condition). `ConfigError` covers tuning
//! files that cannot be read or make no sense.

use thiserror::Error;

/// A gameplay operation was called in a state that breaks its contract
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimError {
    #[error("collectible slot {slot} is already inactive")]
    CollectibleAlreadyInactive { slot: usize },
    #[error("collectible slot {slot} does not exist (pool size {len})")]
    UnknownCollectible { slot: usize, len: usize },
    #[error("score increment must be positive")]
    ZeroScoreIncrement,
}

/// Tuning could not be loaded or failed validation
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning: {0}")]
    Invalid(&'static str),
}
