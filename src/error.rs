//! Error types
//!
//! Only construction can fail. The per-tick path works on validated entities
//! and never returns an error.

use thiserror::Error;

use crate::sim::EntityKind;

/// Constraint violations raised while building entities, sprites or waves
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error("{kind} must have a positive size, got {width}x{height}")]
    InvalidSize {
        kind: EntityKind,
        width: f32,
        height: f32,
    },
    #[error("{kind} speed must be finite and non-negative, got {speed}")]
    InvalidSpeed { kind: EntityKind, speed: f32 },
    #[error("sprite sheet needs at least one frame of positive size (frames={frames})")]
    InvalidSprite { frames: u32 },
    #[error("a wave of {columns} columns by {rows} rows spawns no enemies")]
    InvalidWave { columns: u32, rows: u32 },
}

/// Failures while reading settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unknown difficulty '{0}'")]
    UnknownDifficulty(String),
}
