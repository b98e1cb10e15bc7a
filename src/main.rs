//! Pixel Invaders entry point
//!
//! Runs a headless demo round: the autopilot plays against the in-memory
//! surface at a fixed 60 Hz frame rate until the round ends or time runs out.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use pixel_invaders::autopilot::Autopilot;
use pixel_invaders::consts::SIM_DT;
use pixel_invaders::renderer::Surface;
use pixel_invaders::sim::{RoundController, RoundEvent, RoundPhase};
use pixel_invaders::{GameLoop, Settings};

#[derive(Parser, Debug)]
#[command(name = "pixel-invaders", about = "Headless alien-invasion demo round")]
struct Args {
    /// Settings JSON file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Difficulty: easy, medium or hard (overrides the config file)
    #[arg(long)]
    level: Option<String>,

    /// Simulated seconds to play
    #[arg(long, default_value_t = 60)]
    seconds: u32,

    /// Autopilot seed
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Print the final surface as ASCII
    #[arg(long)]
    snapshot: bool,
}

fn load_settings(args: &Args) -> Result<Settings> {
    let mut settings = match &args.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            Settings::from_json(&json)
                .with_context(|| format!("invalid settings in {}", path.display()))?
        }
        None => Settings::default(),
    };
    if let Some(level) = &args.level {
        settings.set_difficulty_name(level)?;
    }
    Ok(settings)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    log::info!("Pixel Invaders (headless) starting...");

    let settings = load_settings(&args)?;
    let round = RoundController::new(Surface::default(), settings);
    let mut game = GameLoop::new(round);
    game.start().context("failed to start round")?;

    let mut pilot = Autopilot::new(args.seed);
    let frames = args.seconds as u64 * 60;
    let mut kills = 0usize;

    for _ in 0..frames {
        for intent in pilot.intents(game.round()) {
            game.push_intent(intent);
        }
        let report = game.frame(SIM_DT);
        for event in &report.events {
            match event {
                RoundEvent::EnemyDestroyed { .. } => kills += 1,
                RoundEvent::WaveCleared { wave, next } => {
                    log::info!(
                        "Wave {wave} cleared; next {}x{} at speed {}",
                        next.columns,
                        next.rows,
                        next.speed
                    );
                }
                RoundEvent::PlayerHit { enemy } => log::info!("Ship hit by {enemy:?}"),
                _ => log::trace!("{event:?}"),
            }
        }
        if !game.is_running() {
            break;
        }
    }

    let round = game.round();
    let outcome = match round.phase() {
        RoundPhase::Terminated => "destroyed",
        _ => "survived",
    };
    println!(
        "{outcome} on wave {} after {} ticks: {kills} enemies destroyed, {} remaining",
        round.wave(),
        round.ticks(),
        round.formation().len()
    );
    if args.snapshot {
        println!("{}", round.renderer().to_ascii(10.0));
    }
    Ok(())
}
