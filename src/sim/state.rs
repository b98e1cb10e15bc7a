//! Round phase, events and per-tick results

use serde::{Deserialize, Serialize};

use super::difficulty::WaveParams;
use super::entity::EntityId;

/// Lifecycle of one play session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Constructed, `start_round` not called yet
    Ready,
    /// Ticking
    Active,
    /// An enemy reached the player; the loop stops here
    Terminated,
}

/// Something that happened during a tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RoundEvent {
    /// A new projectile left the ship
    Fired { projectile: EntityId },
    /// Fire intent ignored because the projectile cap is reached
    FireBlocked,
    /// A projectile struck an enemy; both are gone
    EnemyDestroyed {
        enemy: EntityId,
        projectile: EntityId,
    },
    /// A projectile left the top of the play area
    ProjectileExpired { projectile: EntityId },
    /// The formation stepped (sideways, possibly after descending)
    FormationMoved,
    /// The formation emptied and the next wave spawned
    WaveCleared { wave: u32, next: WaveParams },
    /// An enemy touched the player; the round is over
    PlayerHit { enemy: EntityId },
}

/// Outcome of one tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickResult {
    /// Phase after the tick
    pub phase: RoundPhase,
    pub events: Vec<RoundEvent>,
}

impl TickResult {
    pub fn new(phase: RoundPhase) -> Self {
        Self {
            phase,
            events: Vec::new(),
        }
    }

    pub fn terminated(&self) -> bool {
        self.phase == RoundPhase::Terminated
    }

    /// Number of enemies destroyed this tick
    pub fn kills(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, RoundEvent::EnemyDestroyed { .. }))
            .count()
    }
}
