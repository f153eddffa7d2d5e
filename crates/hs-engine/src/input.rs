//! Input Normalization
//!
//! Taps, left clicks, and right clicks all coalesce into one semantic
//! trigger. Touch input arrives first on mobile; the browser then
//! synthesizes a click (sometimes a context-menu) for the same gesture, so
//! a short window after each touch suppresses those ghosts.

use serde::{Deserialize, Serialize};

/// Where a primary activation came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationSource {
    /// Touch start (mobile; reacts before the synthetic click)
    Touch,
    /// Left click
    Click,
    /// Right click / context menu
    ContextMenu,
}

/// Ghost-click suppression gate
#[derive(Debug, Clone)]
pub struct InputGate {
    window_ms: u64,
    touch_open_until: Option<u64>,
}

impl InputGate {
    /// Create a gate with the given ghost window
    pub fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            touch_open_until: None,
        }
    }

    /// Decide whether an activation is a real trigger
    ///
    /// Touch always admits and opens the window; click and context-menu
    /// inside an open window are synthetic echoes of the touch and are
    /// dropped.
    pub fn admit(&mut self, source: ActivationSource, now_ms: u64) -> bool {
        match source {
            ActivationSource::Touch => {
                self.touch_open_until = Some(now_ms + self.window_ms);
                true
            }
            ActivationSource::Click | ActivationSource::ContextMenu => {
                !self.in_ghost_window(now_ms)
            }
        }
    }

    #[inline]
    fn in_ghost_window(&self, now_ms: u64) -> bool {
        self.touch_open_until.is_some_and(|until| now_ms < until)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_source_admits_when_idle() {
        let mut gate = InputGate::new(400);
        assert!(gate.admit(ActivationSource::Click, 0));
        assert!(gate.admit(ActivationSource::ContextMenu, 10));
        assert!(gate.admit(ActivationSource::Touch, 20));
    }

    #[test]
    fn test_ghost_click_after_touch_is_suppressed() {
        let mut gate = InputGate::new(400);
        assert!(gate.admit(ActivationSource::Touch, 1_000));
        assert!(!gate.admit(ActivationSource::Click, 1_050));
        assert!(!gate.admit(ActivationSource::ContextMenu, 1_399));
    }

    #[test]
    fn test_click_after_window_admits() {
        let mut gate = InputGate::new(400);
        gate.admit(ActivationSource::Touch, 1_000);
        assert!(gate.admit(ActivationSource::Click, 1_400));
    }

    #[test]
    fn test_touch_inside_window_reopens_it() {
        let mut gate = InputGate::new(400);
        gate.admit(ActivationSource::Touch, 0);
        assert!(gate.admit(ActivationSource::Touch, 300));
        assert!(!gate.admit(ActivationSource::Click, 500));
        assert!(gate.admit(ActivationSource::Click, 700));
    }
}
