//! Progressive Reveal State Machine
//!
//! Consumes a visibility-ratio feed for one observed region once the hit
//! goal arms it. Phases only move forward; the terminal phase is absorbing
//! and signals the feed owner to disconnect.

use hs_core::{StageConfig, StagePresenter};
use serde::{Deserialize, Serialize};

/// Reveal phase, ordered by progress
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum RevealPhase {
    /// Goal not reached; visibility samples are ignored
    #[default]
    Dormant,
    /// Armed, reveal content not yet shown
    Hidden,
    /// Reveal content swapped in, awaiting adequate exposure
    Revealing,
    /// Majority of the region was in view
    ConfirmedSeen,
    /// Region scrolled fully out after confirmation; permanent
    Dismissed,
}

impl RevealPhase {
    /// Whether this phase is terminal
    #[inline]
    pub fn is_terminal(&self) -> bool {
        *self == RevealPhase::Dismissed
    }
}

/// Four-phase progressive reveal driven by visibility-ratio samples
///
/// The reveal is a use-once experience per session, not a toggle: once the
/// region has been seen and scrolled away, the machine dismisses forever.
#[derive(Debug, Clone)]
pub struct RevealMachine {
    phase: RevealPhase,
    enter_ratio: f64,
    confirm_ratio: f64,
}

impl RevealMachine {
    /// Create a dormant machine with thresholds from config
    pub fn new(config: &StageConfig) -> Self {
        Self {
            phase: RevealPhase::Dormant,
            enter_ratio: config.reveal_enter_ratio,
            confirm_ratio: config.reveal_confirm_ratio,
        }
    }

    /// Current phase
    #[inline]
    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    /// Whether the feed owner should keep delivering samples
    #[inline]
    pub fn wants_samples(&self) -> bool {
        !self.phase.is_terminal()
    }

    /// Arm the machine: `Dormant → Hidden`. No-op in any later phase.
    pub fn arm(&mut self) -> bool {
        if self.phase != RevealPhase::Dormant {
            return false;
        }
        self.phase = RevealPhase::Hidden;
        log::info!("Reveal armed");
        true
    }

    /// Consume one visibility-ratio sample (0.0 - 1.0)
    ///
    /// The three threshold checks are independent conditions evaluated on
    /// every sample, not exclusive branches: a sample that jumps straight
    /// past two thresholds takes both steps at once.
    pub fn on_visibility_sample(
        &mut self,
        ratio: f64,
        presenter: &mut dyn StagePresenter,
    ) -> RevealPhase {
        if self.phase == RevealPhase::Hidden && ratio >= self.enter_ratio {
            self.phase = RevealPhase::Revealing;
            presenter.set_reveal_visible(true);
            log::info!("Reveal entering view (ratio {ratio:.2})");
        }

        if self.phase == RevealPhase::Revealing && ratio >= self.confirm_ratio {
            self.phase = RevealPhase::ConfirmedSeen;
            log::debug!("Reveal confirmed seen (ratio {ratio:.2})");
        }

        if self.phase == RevealPhase::ConfirmedSeen && ratio == 0.0 {
            self.phase = RevealPhase::Dismissed;
            presenter.set_reveal_visible(false);
            log::info!("Reveal dismissed");
        }

        self.phase
    }
}
