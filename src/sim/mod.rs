//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - No wall-clock or platform access
//! - Stable iteration order (spawn order for enemies, fire order for projectiles)
//! - Rendering only through the injected `Renderer`

pub mod clock;
pub mod collision;
pub mod difficulty;
pub mod entity;
pub mod formation;
pub mod projectile;
pub mod round;
pub mod sprite;
pub mod state;
pub mod tick;

pub use clock::Clock;
pub use collision::{
    BulletHits, Hit, colliding_enemies, overlaps, resolve_bullets_vs_enemies,
    resolve_player_vs_enemies,
};
pub use difficulty::{Difficulty, WaveParams};
pub use entity::{Entity, EntityId, EntityIds, EntityKind, Rect};
pub use formation::{Direction, Formation, GridLayout};
pub use projectile::Projectiles;
pub use round::RoundController;
pub use sprite::{AssetProvider, BuiltinAssets, SpriteSheet, Strip};
pub use state::{RoundEvent, RoundPhase, TickResult};
pub use tick::TickInput;
