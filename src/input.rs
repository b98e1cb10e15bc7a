//! Player intents
//!
//! Key presses arrive between ticks. The latch keeps only the latest state
//! per intent kind until the next tick drains it.

use serde::{Deserialize, Serialize};

use crate::sim::TickInput;

/// Discrete player intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    MoveLeft,
    MoveRight,
    Fire,
    PauseToggle,
}

impl Intent {
    /// Default key binding name
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "Left" => Some(Intent::MoveLeft),
            "ArrowRight" | "Right" => Some(Intent::MoveRight),
            " " | "Space" => Some(Intent::Fire),
            "Escape" | "Esc" => Some(Intent::PauseToggle),
            _ => None,
        }
    }
}

/// Latest pending intents
#[derive(Debug, Clone, Default)]
pub struct IntentLatch {
    pending: TickInput,
}

impl IntentLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, intent: Intent) {
        match intent {
            Intent::MoveLeft => self.pending.move_left = true,
            Intent::MoveRight => self.pending.move_right = true,
            Intent::Fire => self.pending.fire = true,
            Intent::PauseToggle => self.pending.pause = true,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_idle()
    }

    /// Consume a pending pause toggle
    pub fn take_pause(&mut self) -> bool {
        std::mem::take(&mut self.pending.pause)
    }

    /// Consume movement and fire intents for one tick
    pub fn take_tick_input(&mut self) -> TickInput {
        let input = TickInput {
            pause: false,
            ..self.pending
        };
        self.pending = TickInput {
            pause: self.pending.pause,
            ..TickInput::default()
        };
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_state_only() {
        let mut latch = IntentLatch::new();
        latch.record(Intent::Fire);
        latch.record(Intent::Fire);
        latch.record(Intent::MoveLeft);

        let input = latch.take_tick_input();
        assert!(input.fire && input.move_left && !input.move_right);
        assert!(latch.is_empty());
        assert!(latch.take_tick_input().is_idle());
    }

    #[test]
    fn test_pause_is_separate() {
        let mut latch = IntentLatch::new();
        latch.record(Intent::PauseToggle);
        latch.record(Intent::MoveRight);

        let input = latch.take_tick_input();
        assert!(input.move_right && !input.pause);
        assert!(latch.take_pause());
        assert!(!latch.take_pause());
    }

    #[test]
    fn test_key_bindings() {
        assert_eq!(Intent::from_key("ArrowLeft"), Some(Intent::MoveLeft));
        assert_eq!(Intent::from_key("Space"), Some(Intent::Fire));
        assert_eq!(Intent::from_key("Escape"), Some(Intent::PauseToggle));
        assert_eq!(Intent::from_key("q"), None);
    }
}
