//! Per-tick input

/// Intents consumed at the start of a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    pub fire: bool,
    /// Pause toggle (handled by the clock, not the round)
    pub pause: bool,
}

impl TickInput {
    pub fn is_idle(&self) -> bool {
        !(self.move_left || self.move_right || self.fire || self.pause)
    }
}
