//! Fixed-timestep clock
//!
//! Converts variable frame times into a whole number of fixed ticks. The
//! remainder carries over to the next frame. Pausing freezes the accumulator;
//! stopping ends the session for good.

use serde::{Deserialize, Serialize};

use crate::consts::MAX_FRAME_DT;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Clock {
    step: f32,
    max_substeps: u32,
    accumulator: f32,
    paused: bool,
    running: bool,
    ticks: u64,
}

impl Clock {
    pub fn new(step: f32, max_substeps: u32) -> Self {
        Self {
            step,
            max_substeps: max_substeps.max(1),
            accumulator: 0.0,
            paused: false,
            running: false,
            ticks: 0,
        }
    }

    /// Length of one tick in seconds
    #[inline]
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Ticks issued so far
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Start (or restart) ticking from a clean accumulator
    pub fn start(&mut self) {
        self.running = true;
        self.paused = false;
        self.accumulator = 0.0;
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.accumulator = 0.0;
    }

    /// Flip pause state; returns true if now paused
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        log::debug!("Clock {}", if self.paused { "paused" } else { "resumed" });
        self.paused
    }

    /// Account for `frame_dt` seconds and return how many ticks are due
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        if !self.running || self.paused {
            return 0;
        }
        self.accumulator += frame_dt.clamp(0.0, MAX_FRAME_DT);

        let mut due = 0;
        while self.accumulator >= self.step && due < self.max_substeps {
            self.accumulator -= self.step;
            due += 1;
        }
        self.ticks += due as u64;
        due
    }
}
