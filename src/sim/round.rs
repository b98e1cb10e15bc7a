//! Round controller
//!
//! Owns the player, the enemy formation and the projectiles for one play
//! session and is the only place they are created or destroyed. Each tick
//! runs in a fixed order: input, projectiles, formation, bullet collisions,
//! redraw, player collision, wave progression.

use glam::Vec2;

use super::collision;
use super::difficulty::{Difficulty, WaveParams};
use super::entity::{Entity, EntityId, EntityIds, EntityKind};
use super::formation::Formation;
use super::projectile::Projectiles;
use super::sprite::{AssetProvider, BuiltinAssets};
use super::state::{RoundEvent, RoundPhase, TickResult};
use super::tick::TickInput;
use crate::consts::{PLAYER_SCALE, PLAYER_SPEED};
use crate::error::SimError;
use crate::renderer::Renderer;
use crate::settings::Settings;

pub struct RoundController<R: Renderer, A: AssetProvider = BuiltinAssets> {
    renderer: R,
    assets: A,
    settings: Settings,
    /// Parameters the next round starts from
    baseline: WaveParams,
    /// Parameters of the current wave
    params: WaveParams,
    phase: RoundPhase,
    player: Option<Entity>,
    formation: Formation,
    projectiles: Projectiles,
    ids: EntityIds,
    /// Current wave number (1-based)
    wave: u32,
    /// Seconds since the formation last moved
    since_formation_step: f32,
    ticks: u64,
}

impl<R: Renderer> RoundController<R, BuiltinAssets> {
    pub fn new(renderer: R, settings: Settings) -> Self {
        Self::with_assets(renderer, BuiltinAssets, settings)
    }
}

impl<R: Renderer, A: AssetProvider> RoundController<R, A> {
    pub fn with_assets(renderer: R, assets: A, settings: Settings) -> Self {
        let baseline = settings.difficulty.params();
        Self {
            renderer,
            assets,
            settings,
            baseline,
            params: baseline,
            phase: RoundPhase::Ready,
            player: None,
            formation: Formation::new(),
            projectiles: Projectiles::new(),
            ids: EntityIds::default(),
            wave: 0,
            since_formation_step: 0.0,
            ticks: 0,
        }
    }

    /// Choose the baseline for the next `start_round`
    pub fn select_difficulty(&mut self, difficulty: Difficulty) {
        self.settings.difficulty = difficulty;
        self.baseline = difficulty.params();
        log::info!("Difficulty set to {}", difficulty.as_str());
    }

    /// Use explicit baseline parameters for the next `start_round`
    pub fn set_baseline(&mut self, params: WaveParams) {
        self.baseline = params;
    }

    /// Reset everything and spawn the player and the first wave
    pub fn start_round(&mut self) -> Result<(), SimError> {
        let play = self.renderer.dimensions();
        let mut ids = EntityIds::default();
        let player = self.spawn_player(play, &mut ids)?;
        let mut formation = Formation::new();
        formation.create_wave(
            &self.baseline,
            self.settings.grid,
            self.assets.sprite(EntityKind::Enemy),
            &mut ids,
        )?;

        self.erase_all();

        self.params = self.baseline;
        self.player = Some(player);
        self.formation = formation;
        self.projectiles = Projectiles::new();
        self.ids = ids;
        self.wave = 1;
        // First tick moves the formation right away
        self.since_formation_step = self.settings.formation_interval();
        self.ticks = 0;
        self.phase = RoundPhase::Active;

        if let Some(player) = &self.player {
            self.renderer.draw(player);
        }
        for enemy in self.formation.enemies() {
            self.renderer.draw(enemy);
        }

        log::info!(
            "Round started: {} enemies, speed {}",
            self.formation.len(),
            self.params.speed
        );
        Ok(())
    }

    /// Ship centered at the bottom of the play area
    fn spawn_player(&self, play: Vec2, ids: &mut EntityIds) -> Result<Entity, SimError> {
        let sprite = self.assets.sprite(EntityKind::Player);
        let size = sprite.frame_size() * PLAYER_SCALE;
        let pos = Vec2::new(play.x / 2.0 - size.x / 2.0, play.y - size.y);
        Entity::new(
            ids.next_id(),
            EntityKind::Player,
            pos,
            size,
            Vec2::new(PLAYER_SPEED, 0.0),
            sprite,
        )
    }

    fn erase_all(&mut self) {
        if let Some(player) = &self.player {
            self.renderer.clear(player);
        }
        for enemy in self.formation.enemies() {
            self.renderer.clear(enemy);
        }
        for projectile in self.projectiles.active() {
            self.renderer.clear(projectile);
        }
    }

    /// Advance the round by one tick of `elapsed` seconds
    pub fn tick(&mut self, input: &TickInput, elapsed: f32) -> TickResult {
        if self.phase != RoundPhase::Active {
            return TickResult::new(self.phase);
        }
        let mut result = TickResult::new(RoundPhase::Active);
        self.ticks += 1;
        let play = self.renderer.dimensions();

        self.apply_input(input, play, &mut result.events);

        // 1. Projectiles, several sub-steps per tick
        for projectile in self.projectiles.active() {
            self.renderer.clear(projectile);
        }
        for _ in 0..self.settings.projectile_substeps {
            for expired in self.projectiles.advance() {
                result.events.push(RoundEvent::ProjectileExpired {
                    projectile: expired.id,
                });
            }
        }

        // 2. Formation, gated by elapsed time
        self.since_formation_step += elapsed;
        if self.since_formation_step >= self.settings.formation_interval() {
            for enemy in self.formation.enemies() {
                self.renderer.clear(enemy);
            }
            self.formation.advance(play.x);
            self.since_formation_step = 0.0;
            result.events.push(RoundEvent::FormationMoved);
        }

        // 3. Projectiles against enemies
        let hits = collision::resolve_bullets_vs_enemies(
            self.projectiles.active(),
            self.formation.enemies(),
        );
        if !hits.is_empty() {
            for hit in &hits.hits {
                let enemy = self.formation.enemies()[hit.enemy].id;
                let projectile = self.projectiles.active()[hit.projectile].id;
                log::debug!("{:?} destroyed by {:?}", enemy, projectile);
                result
                    .events
                    .push(RoundEvent::EnemyDestroyed { enemy, projectile });
            }
            for projectile in self.projectiles.remove(&hits.projectiles()) {
                self.renderer.clear(&projectile);
            }
            for enemy in self.formation.remove(&hits.enemies()) {
                self.renderer.clear(&enemy);
            }
        }

        // 4. Redraw survivors
        for enemy in self.formation.enemies() {
            self.renderer.clear(enemy);
            self.renderer.draw(enemy);
        }
        for projectile in self.projectiles.active() {
            self.renderer.draw(projectile);
        }

        // 5. Enemy reached the player
        if self.check_player_collision(&mut result.events) {
            result.phase = RoundPhase::Terminated;
            return result;
        }

        // 6. Wave cleared
        if self.formation.is_cleared() {
            self.next_wave(&mut result.events);
        }

        result
    }

    fn apply_input(&mut self, input: &TickInput, play: Vec2, events: &mut Vec<RoundEvent>) {
        if let Some(player) = self.player.as_mut() {
            let rect = player.rect();
            let left = input.move_left && rect.left() >= 0.0;
            let right = input.move_right && rect.right() <= play.x;
            if left || right {
                self.renderer.clear(player);
                if left {
                    player.next_frame();
                    player.move_left();
                }
                if right {
                    player.next_frame();
                    player.move_right();
                }
                self.renderer.draw(player);
            }
        }

        if input.fire {
            self.fire_into(events);
        }
    }

    /// Fire from the ship; no-op without an active round or player
    pub fn fire(&mut self) -> Option<EntityId> {
        let mut events = Vec::new();
        self.fire_into(&mut events)
    }

    fn fire_into(&mut self, events: &mut Vec<RoundEvent>) -> Option<EntityId> {
        if self.phase != RoundPhase::Active {
            return None;
        }
        let player = self.player.as_ref()?;
        if let Some(cap) = self.settings.max_projectiles {
            if self.projectiles.len() >= cap {
                events.push(RoundEvent::FireBlocked);
                return None;
            }
        }

        let sprite = self.assets.sprite(EntityKind::Projectile);
        let id = self.ids.next_id();
        match self.projectiles.fire(player, sprite, id) {
            Ok(projectile) => {
                self.renderer.draw(projectile);
                events.push(RoundEvent::Fired { projectile: id });
                Some(id)
            }
            Err(err) => {
                log::warn!("Could not fire: {err}");
                None
            }
        }
    }

    /// Check for an enemy touching the player and end the round if so
    ///
    /// Returns true when the round is (now) terminated.
    pub fn resolve_player_collision(&mut self) -> bool {
        match self.phase {
            RoundPhase::Active => {
                let mut events = Vec::new();
                self.check_player_collision(&mut events)
            }
            RoundPhase::Terminated => true,
            RoundPhase::Ready => false,
        }
    }

    fn check_player_collision(&mut self, events: &mut Vec<RoundEvent>) -> bool {
        let Some(player) = self.player.as_ref() else {
            return false;
        };
        let colliding = collision::colliding_enemies(player, self.formation.enemies());
        if colliding.is_empty() {
            return false;
        }

        for &index in &colliding {
            let enemy = &self.formation.enemies()[index];
            self.renderer.clear(enemy);
            events.push(RoundEvent::PlayerHit { enemy: enemy.id });
        }
        self.renderer.clear(player);
        self.phase = RoundPhase::Terminated;
        log::info!(
            "Round over on wave {} after {} ticks",
            self.wave,
            self.ticks
        );
        true
    }

    fn next_wave(&mut self, events: &mut Vec<RoundEvent>) {
        let next = self.params.next_wave();
        let sprite = self.assets.sprite(EntityKind::Enemy);
        match self
            .formation
            .create_wave(&next, self.settings.grid, sprite, &mut self.ids)
        {
            Ok(_) => {
                events.push(RoundEvent::WaveCleared {
                    wave: self.wave,
                    next,
                });
                log::info!("Wave {} cleared", self.wave);
                self.params = next;
                self.wave += 1;
                for enemy in self.formation.enemies() {
                    self.renderer.draw(enemy);
                }
            }
            Err(err) => log::error!("Could not spawn wave {}: {err}", self.wave + 1),
        }
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn wave(&self) -> u32 {
        self.wave
    }

    /// Parameters of the current wave
    pub fn params(&self) -> WaveParams {
        self.params
    }

    pub fn baseline(&self) -> WaveParams {
        self.baseline
    }

    pub fn player(&self) -> Option<&Entity> {
        self.player.as_ref()
    }

    pub fn formation(&self) -> &Formation {
        &self.formation
    }

    pub fn projectiles(&self) -> &Projectiles {
        &self.projectiles
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[cfg(test)]
    pub(crate) fn replace_formation(&mut self, formation: Formation) {
        self.formation = formation;
    }
}
