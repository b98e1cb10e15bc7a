//! Difficulty levels and wave escalation

use serde::{Deserialize, Serialize};

/// Spawn parameters for one wave
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveParams {
    /// Enemies per row, before grid-layout adjustment
    pub columns: u32,
    /// Enemy rows, before grid-layout adjustment
    pub rows: u32,
    /// Horizontal enemy speed per formation step
    pub speed: f32,
}

/// Columns added per cleared wave
pub const COLUMNS_PER_WAVE: u32 = 1;
/// Enemy speed added per cleared wave
pub const SPEED_PER_WAVE: f32 = 2.0;

impl WaveParams {
    pub const fn new(columns: u32, rows: u32, speed: f32) -> Self {
        Self {
            columns,
            rows,
            speed,
        }
    }

    /// Parameters for the wave after this one is cleared
    pub fn next_wave(&self) -> Self {
        Self {
            columns: self.columns + COLUMNS_PER_WAVE,
            rows: self.rows,
            speed: self.speed + SPEED_PER_WAVE,
        }
    }
}

impl Default for WaveParams {
    fn default() -> Self {
        Difficulty::default().params()
    }
}

/// Selectable difficulty level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" | "med" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Baseline wave parameters for this level
    pub fn params(&self) -> WaveParams {
        match self {
            Difficulty::Easy => WaveParams::new(8, 3, 10.0),
            Difficulty::Medium => WaveParams::new(16, 5, 15.0),
            Difficulty::Hard => WaveParams::new(20, 8, 20.0),
        }
    }
}
