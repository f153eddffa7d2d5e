//! Stage Configuration
//!
//! Fixed constants for a stage session: category volumes, pulse timing, the
//! ghost-click window, the hit goal, and the reveal visibility thresholds.
//! Hosts usually run the defaults; JSON helpers exist for tooling.

use crate::error::{HsError, HsResult};
use serde::{Deserialize, Serialize};

/// Stage configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StageConfig {
    /// Noise playback volume (0.0 - 1.0)
    pub noise_volume: f32,
    /// Voice playback volume (0.0 - 1.0)
    pub voice_volume: f32,
    /// Goal sting playback volume (0.0 - 1.0)
    pub sting_volume: f32,
    /// Flash marker duration before self-clear (ms)
    pub flash_duration_ms: u64,
    /// Glitch marker duration before self-clear on goal reached (ms)
    pub glitch_duration_ms: u64,
    /// Window after a touch during which synthetic click/context-menu
    /// events are suppressed (ms)
    pub ghost_window_ms: u64,
    /// Hit count at which the reveal machine is armed
    pub hit_goal: u64,
    /// Visibility ratio at which hidden reveal content enters view
    pub reveal_enter_ratio: f64,
    /// Visibility ratio at which the reveal counts as adequately seen
    pub reveal_confirm_ratio: f64,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            noise_volume: 0.2,
            voice_volume: 0.8,
            sting_volume: 0.6,
            flash_duration_ms: 80,
            glitch_duration_ms: 2_000,
            ghost_window_ms: 400,
            hit_goal: 100,
            reveal_enter_ratio: 0.15,
            reveal_confirm_ratio: 0.5,
        }
    }
}

impl StageConfig {
    /// Parse from a JSON string; missing fields fall back to defaults
    pub fn from_json_str(json: &str) -> HsResult<Self> {
        serde_json::from_str(json).map_err(|e| HsError::Config(e.to_string()))
    }

    /// Serialize to pretty JSON
    pub fn to_json_string(&self) -> HsResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| HsError::Config(e.to_string()))
    }
}
