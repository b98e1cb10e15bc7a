//! Pixel Invaders - a fixed-tick alien-invasion arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, formation, projectiles, collisions, rounds)
//! - `renderer`: Drawing-surface abstraction plus an in-memory surface
//! - `input`: Player intents latched between ticks
//! - `game_loop`: Fixed-cadence driver wiring clock, intents and the round
//! - `settings`: Data-driven configuration
//! - `autopilot`: Seeded demo player

pub mod autopilot;
pub mod error;
pub mod game_loop;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{SettingsError, SimError};
pub use game_loop::GameLoop;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one logical frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame the clock will account for (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Play area dimensions (origin top-left, y grows downward)
    pub const CANVAS_WIDTH: f32 = 650.0;
    pub const CANVAS_HEIGHT: f32 = 700.0;

    /// Formation moves once per this many milliseconds
    pub const FORMATION_INTERVAL_MS: u64 = 280;
    /// Projectile advances per tick
    pub const PROJECTILE_SUBSTEPS: u32 = 5;

    /// Gap between enemies in the spawn grid, both axes
    pub const TILE_GAP: f32 = 10.0;

    /// Player ship
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const PLAYER_SCALE: f32 = 2.0;

    /// Projectiles
    pub const PROJECTILE_SPEED: f32 = 5.0;
    pub const PROJECTILE_SCALE: f32 = 0.7;

    /// Built-in sprite metrics (one frame each)
    pub const ENEMY_FRAME: (f32, f32) = (20.0, 20.0);
    pub const ENEMY_FRAMES: u32 = 2;
    pub const PLAYER_FRAME: (f32, f32) = (30.0, 25.0);
    pub const PLAYER_FRAMES: u32 = 2;
    pub const PROJECTILE_FRAME: (f32, f32) = (10.0, 20.0);
    pub const PROJECTILE_FRAMES: u32 = 4;
}
