//! Goal Burst
//!
//! One-shot celebration on the hit that reaches the goal: the counter fill
//! is marked complete, a dedicated sting clip plays, and a glitch overlay
//! fires with the same remove-then-reapply restart boundary as the hit
//! pulse, self-clearing after a longer fixed delay.

use hs_core::{ClipId, MediaBackend, StageConfig, StageMarker, StagePresenter};

/// Goal-reached sting + glitch overlay
///
/// Fired once per session — the counter's single-fire goal signal is the
/// only caller.
#[derive(Debug)]
pub struct GoalBurst {
    sting: ClipId,
    sting_volume: f32,
    glitch_ms: u64,
    /// Glitch self-clears when the clock reaches this timestamp (ms)
    glitch_clear_at: Option<u64>,
}

impl GoalBurst {
    /// Create an idle goal burst for the given sting clip
    pub fn new(sting: ClipId, config: &StageConfig) -> Self {
        Self {
            sting,
            sting_volume: config.sting_volume,
            glitch_ms: config.glitch_duration_ms,
            glitch_clear_at: None,
        }
    }

    /// Fire the celebration
    ///
    /// Sting rejection is swallowed like every other play request; the
    /// glitch and the counter marker do not depend on it.
    pub fn fire(
        &mut self,
        media: &mut dyn MediaBackend,
        presenter: &mut dyn StagePresenter,
        now_ms: u64,
    ) {
        presenter.apply_marker(StageMarker::CounterComplete);

        media.seek(self.sting, 0.0);
        media.set_volume(self.sting, self.sting_volume);
        if let Err(err) = media.play(self.sting) {
            log::debug!("Sting clip play rejected: {err}");
        }

        presenter.clear_marker(StageMarker::Glitch);
        presenter.flush();
        presenter.apply_marker(StageMarker::Glitch);
        self.glitch_clear_at = Some(now_ms + self.glitch_ms);
    }

    /// Advance the clock; clears the glitch marker once its deadline passes
    pub fn tick(&mut self, presenter: &mut dyn StagePresenter, now_ms: u64) {
        if self.glitch_clear_at.is_some_and(|deadline| now_ms >= deadline) {
            presenter.clear_marker(StageMarker::Glitch);
            self.glitch_clear_at = None;
        }
    }

    /// Whether the glitch marker is still pending its self-clear
    #[inline]
    pub fn glitch_pending(&self) -> bool {
        self.glitch_clear_at.is_some()
    }
}
