//! Burst Controller
//!
//! Owns the visual hit clip and the per-category audio tracking for one
//! stage. Every trigger is an unconditional stop-then-restart: whatever is
//! still playing is halted and rewound before the new burst starts, so
//! rapid re-triggering feels instantaneous and effects never stack.

use hs_core::{AudioCategory, ClipId, ClipSet, MediaBackend, StageConfig, StagePresenter};
use rand::prelude::*;

use crate::pulse::HitPulse;

/// Media Burst Controller
///
/// Tracks at most one playing clip per category (visual, noise, voice).
/// Restart semantics: `trigger()` while playing stops and rewinds the
/// tracked clips first, never overlaps or queues.
pub struct BurstController {
    clips: ClipSet,
    noise_volume: f32,
    voice_volume: f32,
    flash_ms: u64,
    /// Audio currently owned for restart bookkeeping. The clip may keep
    /// ringing out after natural visual completion; only the tracking is
    /// cleared then.
    current_noise: Option<ClipId>,
    current_voice: Option<ClipId>,
    playing: bool,
    pulse: HitPulse,
    rng: StdRng,
}

impl BurstController {
    /// Create a controller with an OS-seeded RNG
    pub fn new(clips: ClipSet, config: &StageConfig) -> Self {
        Self::with_rng(clips, config, StdRng::from_os_rng())
    }

    /// Create a controller with a fixed seed (deterministic selection)
    pub fn with_seed(clips: ClipSet, config: &StageConfig, seed: u64) -> Self {
        Self::with_rng(clips, config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(clips: ClipSet, config: &StageConfig, rng: StdRng) -> Self {
        Self {
            clips,
            noise_volume: config.noise_volume,
            voice_volume: config.voice_volume,
            flash_ms: config.flash_duration_ms,
            current_noise: None,
            current_voice: None,
            playing: false,
            pulse: HitPulse::new(),
            rng,
        }
    }

    /// Whether the visual clip is between a trigger and its natural end
    #[inline]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// The clip roster this controller plays
    #[inline]
    pub fn clips(&self) -> &ClipSet {
        &self.clips
    }

    /// Currently tracked audio clip for a category, if any
    #[inline]
    pub fn current_audio(&self, category: AudioCategory) -> Option<ClipId> {
        match category {
            AudioCategory::Noise => self.current_noise,
            AudioCategory::Voice => self.current_voice,
        }
    }

    /// Fire one burst: restart the visual clip, reselect and play both
    /// audio layers, pulse the stage
    ///
    /// Runs synchronously and in a fixed order; because everything lives on
    /// one thread a second trigger can only begin after this returns.
    pub fn trigger(
        &mut self,
        media: &mut dyn MediaBackend,
        presenter: &mut dyn StagePresenter,
        now_ms: u64,
    ) {
        // Halt anything still playing, rewound to zero. No fade, no queue.
        if self.playing {
            media.stop(self.clips.visual);
            media.seek(self.clips.visual, 0.0);
            self.stop_tracked_audio(media);
        }

        // Restart the visual clip. A rejected play request (autoplay
        // policy) is non-fatal; the burst degrades to visual-only.
        media.seek(self.clips.visual, 0.0);
        presenter.set_clip_active(true);
        if let Err(err) = media.play(self.clips.visual) {
            log::debug!("Visual clip play rejected: {err}");
        }

        // Fresh uniform pick per category, independent of each other and
        // of the visual clip's outcome.
        self.current_noise =
            Some(self.start_audio(media, AudioCategory::Noise, self.noise_volume));
        self.current_voice =
            Some(self.start_audio(media, AudioCategory::Voice, self.voice_volume));

        // Shake + flash, unconditionally.
        self.pulse.fire(presenter, now_ms, self.flash_ms);

        self.playing = true;
    }

    /// The visual clip reached its natural end
    ///
    /// Clears the playing flag and the audio tracking (the audio may still
    /// ring out) and returns the stage to its idle representation. A
    /// notification while already idle is a stale clip and is ignored.
    pub fn on_clip_ended(&mut self, presenter: &mut dyn StagePresenter) {
        if !self.playing {
            log::warn!("Clip-ended notification while idle; ignoring");
            return;
        }
        self.playing = false;
        self.current_noise = None;
        self.current_voice = None;
        presenter.set_clip_active(false);
    }

    /// Advance the pulse clock (flash self-clear)
    pub fn tick(&mut self, presenter: &mut dyn StagePresenter, now_ms: u64) {
        self.pulse.tick(presenter, now_ms);
    }

    /// The shake animation completed
    pub fn on_animation_end(&mut self, presenter: &mut dyn StagePresenter) {
        self.pulse.on_animation_end(presenter);
    }

    fn stop_tracked_audio(&mut self, media: &mut dyn MediaBackend) {
        for clip in [self.current_noise.take(), self.current_voice.take()]
            .into_iter()
            .flatten()
        {
            media.stop(clip);
            media.seek(clip, 0.0);
        }
    }

    fn start_audio(
        &mut self,
        media: &mut dyn MediaBackend,
        category: AudioCategory,
        volume: f32,
    ) -> ClipId {
        let candidates = self.clips.candidates(category);
        let clip = candidates[self.rng.random_range(0..candidates.len())];

        media.seek(clip, 0.0);
        media.set_volume(clip, volume);
        if let Err(err) = media.play(clip) {
            log::debug!("{} clip play rejected: {err}", category.as_str());
        }
        clip
    }
}
