//! Game settings
//!
//! Read from JSON when supplied; never written back.

use serde::{Deserialize, Serialize};

use crate::consts::{FORMATION_INTERVAL_MS, PROJECTILE_SUBSTEPS};
use crate::error::SettingsError;
use crate::sim::{Difficulty, GridLayout};

/// Tunables applied when a round starts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Baseline wave parameters
    pub difficulty: Difficulty,

    // === Timing ===
    /// Milliseconds between formation steps
    pub formation_interval_ms: u64,
    /// Projectile advances per tick
    pub projectile_substeps: u32,

    // === Rules ===
    /// Cap on simultaneous projectiles (None = unlimited)
    pub max_projectiles: Option<usize>,
    /// Spawn grid dimensions rule
    pub grid: GridLayout,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Easy,
            formation_interval_ms: FORMATION_INTERVAL_MS,
            projectile_substeps: PROJECTILE_SUBSTEPS,
            max_projectiles: None,
            grid: GridLayout::Inclusive,
        }
    }
}

impl Settings {
    /// Defaults with a chosen difficulty
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            ..Self::default()
        }
    }

    /// Parse settings JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        log::info!(
            "Loaded settings (difficulty {})",
            settings.difficulty.as_str()
        );
        Ok(settings)
    }

    /// Select a difficulty by name
    pub fn set_difficulty_name(&mut self, name: &str) -> Result<(), SettingsError> {
        self.difficulty = Difficulty::from_str(name)
            .ok_or_else(|| SettingsError::UnknownDifficulty(name.to_string()))?;
        Ok(())
    }

    /// Formation step interval in seconds
    pub fn formation_interval(&self) -> f32 {
        self.formation_interval_ms as f32 / 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.difficulty, Difficulty::Easy);
        assert_eq!(settings.projectile_substeps, 5);
        assert_eq!(settings.max_projectiles, None);
        assert_eq!(settings.grid, GridLayout::Inclusive);
        assert!((settings.formation_interval() - 0.28).abs() < 1e-6);
    }

    #[test]
    fn test_partial_json() {
        let settings =
            Settings::from_json(r#"{ "difficulty": "Hard", "max_projectiles": 3 }"#).unwrap();
        assert_eq!(settings.difficulty, Difficulty::Hard);
        assert_eq!(settings.max_projectiles, Some(3));
        assert_eq!(settings.formation_interval_ms, FORMATION_INTERVAL_MS);
    }

    #[test]
    fn test_bad_json() {
        let err = Settings::from_json("{ difficulty: ").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_difficulty_by_name() {
        let mut settings = Settings::default();
        settings.set_difficulty_name("medium").unwrap();
        assert_eq!(settings.difficulty, Difficulty::Medium);
        assert!(matches!(
            settings.set_difficulty_name("insane"),
            Err(SettingsError::UnknownDifficulty(_))
        ));
    }
}
