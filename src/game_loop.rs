//! Fixed-cadence game loop
//!
//! Turns frame times into fixed ticks and feeds each tick the intents that
//! arrived since the previous one. Pause toggles are applied before the
//! clock is consulted so that a paused loop can still be resumed.

use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::error::SimError;
use crate::input::{Intent, IntentLatch};
use crate::renderer::Renderer;
use crate::sim::{AssetProvider, BuiltinAssets, Clock, RoundController, RoundEvent, RoundPhase};

/// What happened during one frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    /// Ticks run this frame
    pub ticks: u32,
    pub events: Vec<RoundEvent>,
    pub phase: RoundPhase,
    pub paused: bool,
}

pub struct GameLoop<R: Renderer, A: AssetProvider = BuiltinAssets> {
    round: RoundController<R, A>,
    clock: Clock,
    intents: IntentLatch,
}

impl<R: Renderer, A: AssetProvider> GameLoop<R, A> {
    pub fn new(round: RoundController<R, A>) -> Self {
        Self::with_clock(round, Clock::new(SIM_DT, MAX_SUBSTEPS))
    }

    pub fn with_clock(round: RoundController<R, A>, clock: Clock) -> Self {
        Self {
            round,
            clock,
            intents: IntentLatch::new(),
        }
    }

    /// Start (or restart) the round and the clock
    pub fn start(&mut self) -> Result<(), SimError> {
        self.round.start_round()?;
        self.intents = IntentLatch::new();
        self.clock.start();
        Ok(())
    }

    pub fn push_intent(&mut self, intent: Intent) {
        self.intents.record(intent);
    }

    /// Run every tick due after `frame_dt` seconds
    pub fn frame(&mut self, frame_dt: f32) -> FrameReport {
        if self.intents.take_pause() && self.clock.is_running() {
            let paused = self.clock.toggle_pause();
            log::info!("Game {}", if paused { "paused" } else { "resumed" });
        }

        let due = self.clock.advance(frame_dt);
        let mut report = FrameReport {
            ticks: 0,
            events: Vec::new(),
            phase: self.round.phase(),
            paused: self.clock.is_paused(),
        };

        for _ in 0..due {
            let input = self.intents.take_tick_input();
            let result = self.round.tick(&input, self.clock.step());
            report.ticks += 1;
            report.phase = result.phase;
            report.events.extend(result.events);
            if report.phase == RoundPhase::Terminated {
                self.clock.stop();
                log::info!("Clock stopped on wave {}", self.round.wave());
                break;
            }
        }
        report
    }

    pub fn is_running(&self) -> bool {
        self.clock.is_running()
    }

    pub fn is_paused(&self) -> bool {
        self.clock.is_paused()
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    pub fn round(&self) -> &RoundController<R, A> {
        &self.round
    }

    pub fn round_mut(&mut self) -> &mut RoundController<R, A> {
        &mut self.round
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::Surface;
    use crate::settings::Settings;
    use crate::sim::{Entity, EntityId, EntityKind, Formation};

    const STEP: f32 = 1.0 / 64.0;

    fn game() -> GameLoop<Surface> {
        let round = RoundController::new(Surface::default(), Settings::default());
        let mut game = GameLoop::with_clock(round, Clock::new(STEP, MAX_SUBSTEPS));
        game.start().unwrap();
        game
    }

    #[test]
    fn test_frame_runs_due_ticks() {
        let mut game = game();
        let report = game.frame(STEP * 2.5);
        assert_eq!(report.ticks, 2);
        assert_eq!(report.phase, RoundPhase::Active);
        assert_eq!(game.round().ticks(), 2);
    }

    #[test]
    fn test_intents_wait_for_next_tick() {
        let mut game = game();
        game.push_intent(Intent::Fire);
        // Not enough time for a tick: the intent stays latched
        assert_eq!(game.frame(STEP * 0.5).ticks, 0);
        assert!(game.round().projectiles().is_empty());

        let report = game.frame(STEP * 0.6);
        assert_eq!(report.ticks, 1);
        assert!(
            report
                .events
                .iter()
                .any(|e| matches!(e, RoundEvent::Fired { .. }))
        );
        assert_eq!(game.round().projectiles().len(), 1);
    }

    #[test]
    fn test_pause_preserves_state() {
        let mut game = game();
        game.push_intent(Intent::Fire);
        game.frame(STEP * 1.5);

        let formation = game.round().formation().clone();
        let projectiles = game.round().projectiles().clone();
        let player = game.round().player().cloned();

        game.push_intent(Intent::PauseToggle);
        game.push_intent(Intent::MoveLeft);
        for _ in 0..30 {
            let report = game.frame(STEP);
            assert!(report.paused);
            assert_eq!(report.ticks, 0);
        }
        assert_eq!(game.round().formation(), &formation);
        assert_eq!(game.round().projectiles(), &projectiles);
        assert_eq!(game.round().player().cloned(), player);

        game.push_intent(Intent::PauseToggle);
        let report = game.frame(STEP * 1.5);
        assert!(!report.paused);
        // Half a step was left over from before the pause
        assert_eq!(report.ticks, 2);
        // Latched move applies on the first tick after resuming
        assert_eq!(
            game.round().player().unwrap().pos.x,
            player.unwrap().pos.x - 5.0
        );
    }

    #[test]
    fn test_termination_stops_clock() {
        let mut game = game();
        let player = game.round().player().unwrap().clone();
        let sprite = *player.sprite();
        let intruder = Entity::new(
            EntityId(9_999),
            EntityKind::Enemy,
            player.pos,
            player.size(),
            glam::Vec2::ZERO,
            sprite,
        )
        .unwrap();
        game.round_mut()
            .replace_formation(Formation::with_enemies(vec![intruder]));

        let report = game.frame(STEP * 3.5);
        assert_eq!(report.ticks, 1);
        assert_eq!(report.phase, RoundPhase::Terminated);
        assert!(!game.is_running());

        // Nothing more happens, and pause is ignored
        game.push_intent(Intent::PauseToggle);
        let report = game.frame(STEP * 3.0);
        assert_eq!(report.ticks, 0);
        assert!(!game.is_paused());
    }

    #[test]
    fn test_restart_after_termination() {
        let mut game = game();
        game.round_mut()
            .replace_formation(Formation::with_enemies(Vec::new()));
        game.start().unwrap();
        assert!(game.is_running());
        assert_eq!(game.round().wave(), 1);
        assert_eq!(game.round().formation().len(), 36);
    }
}
