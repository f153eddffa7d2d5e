//! Hit Pulse
//!
//! One-shot shake/flash feedback fired on every trigger. Both markers are
//! removed and the presentation flushed before re-application so that a
//! rapid re-trigger restarts the animation instead of silently continuing
//! the previous one.

use hs_core::{StageMarker, StagePresenter};

/// Shake/flash marker state for one stage
#[derive(Debug, Default)]
pub struct HitPulse {
    /// Flash self-clears when the clock reaches this timestamp (ms)
    flash_clear_at: Option<u64>,
    /// Shake self-clears on the next animation-end notification
    shake_active: bool,
}

impl HitPulse {
    /// Create an idle pulse
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire the pulse: remove-then-reapply both markers
    ///
    /// The flush between clear and apply is the animation-restart boundary;
    /// without it a re-trigger while markers are still set is a no-op.
    pub fn fire(&mut self, presenter: &mut dyn StagePresenter, now_ms: u64, flash_ms: u64) {
        presenter.clear_marker(StageMarker::Shake);
        presenter.clear_marker(StageMarker::Flash);
        presenter.flush();

        presenter.apply_marker(StageMarker::Shake);
        presenter.apply_marker(StageMarker::Flash);

        self.shake_active = true;
        self.flash_clear_at = Some(now_ms + flash_ms);
    }

    /// Advance the clock; clears the flash marker once its deadline passes
    pub fn tick(&mut self, presenter: &mut dyn StagePresenter, now_ms: u64) {
        if self.flash_clear_at.is_some_and(|deadline| now_ms >= deadline) {
            presenter.clear_marker(StageMarker::Flash);
            self.flash_clear_at = None;
        }
    }

    /// The shake animation reached its natural end
    ///
    /// One-shot: a stale notification after the marker already cleared is
    /// ignored, so repeated triggers never accumulate clears.
    pub fn on_animation_end(&mut self, presenter: &mut dyn StagePresenter) {
        if self.shake_active {
            presenter.clear_marker(StageMarker::Shake);
            self.shake_active = false;
        }
    }

    /// Whether the flash marker is still pending its self-clear
    #[inline]
    pub fn flash_pending(&self) -> bool {
        self.flash_clear_at.is_some()
    }

    /// Whether the shake marker is currently applied
    #[inline]
    pub fn shake_active(&self) -> bool {
        self.shake_active
    }
}
