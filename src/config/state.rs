// src/config/state.rs
use std::time::Duration;

use super::consts::{POLL_INTERVAL_MS, WINDOW_H, WINDOW_W};

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: f32,
    pub window_h: f32,

    /// Time between automatic fetches while polling
    pub interval: Duration,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: WINDOW_W,
            window_h: WINDOW_H,
            interval: Duration::from_millis(POLL_INTERVAL_MS),
        }
    }
}
