//! Seeded demo player
//!
//! Drives the ship toward the lowest enemy and fires with a fixed chance per
//! frame. Same seed, same round: the demo is reproducible.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::PLAYER_SPEED;
use crate::input::Intent;
use crate::renderer::Renderer;
use crate::sim::{AssetProvider, Entity, RoundController, RoundPhase};

/// Fire chance when lined up with the target
const AIMED_FIRE_CHANCE: f64 = 0.35;
/// Fire chance otherwise
const IDLE_FIRE_CHANCE: f64 = 0.05;

pub struct Autopilot {
    rng: Pcg32,
    /// Wander direction when there is nothing to chase
    wander_right: bool,
}

impl Autopilot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            wander_right: true,
        }
    }

    /// Intents for the next frame
    pub fn intents<R: Renderer, A: AssetProvider>(
        &mut self,
        round: &RoundController<R, A>,
    ) -> Vec<Intent> {
        let mut intents = Vec::new();
        if round.phase() != RoundPhase::Active {
            return intents;
        }
        let Some(player) = round.player() else {
            return intents;
        };

        let aimed = match target(player, round.formation().enemies()) {
            Some(enemy) => {
                let dx = enemy.center_x() - player.center_x();
                if dx < -PLAYER_SPEED {
                    intents.push(Intent::MoveLeft);
                } else if dx > PLAYER_SPEED {
                    intents.push(Intent::MoveRight);
                }
                dx.abs() <= player.size().x / 2.0
            }
            None => {
                let width = round.renderer().dimensions().x;
                let rect = player.rect();
                if rect.right() >= width {
                    self.wander_right = false;
                } else if rect.left() <= 0.0 {
                    self.wander_right = true;
                }
                intents.push(if self.wander_right {
                    Intent::MoveRight
                } else {
                    Intent::MoveLeft
                });
                false
            }
        };

        let chance = if aimed {
            AIMED_FIRE_CHANCE
        } else {
            IDLE_FIRE_CHANCE
        };
        if self.rng.random_bool(chance) {
            intents.push(Intent::Fire);
        }
        intents
    }
}

/// Lowest enemy, nearest to the ship on ties
fn target<'a>(player: &Entity, enemies: &'a [Entity]) -> Option<&'a Entity> {
    enemies.iter().min_by(|a, b| {
        b.rect()
            .bottom()
            .total_cmp(&a.rect().bottom())
            .then_with(|| {
                let da = (a.center_x() - player.center_x()).abs();
                let db = (b.center_x() - player.center_x()).abs();
                da.total_cmp(&db)
            })
    })
}
