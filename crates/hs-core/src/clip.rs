//! Clip Handles
//!
//! Opaque handles for the media a stage owns: one looping hit clip plus a
//! fixed roster of three noises and three voices. The host maps handles to
//! actual media elements; the core only addresses them.

use serde::{Deserialize, Serialize};

/// Opaque handle for a media clip (visual or audio)
pub type ClipId = u32;

/// Number of clips per audio category
pub const CLIPS_PER_CATEGORY: usize = 3;

/// Audio clip category
///
/// The two audio layers of a burst are selected and tracked independently
/// so they stay decorrelated across triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AudioCategory {
    /// Impact sound effect
    Noise,
    /// Character voice line
    Voice,
}

impl AudioCategory {
    /// Category name for logging
    pub fn as_str(&self) -> &'static str {
        match self {
            AudioCategory::Noise => "noise",
            AudioCategory::Voice => "voice",
        }
    }
}

/// The fixed set of clips a stage plays
///
/// One visual hit clip, three noises, three voices, and the goal sting
/// played once when the hit goal is reached. The roster never changes
/// after construction; every trigger reselects from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipSet {
    /// The looping visual hit clip (exclusive, one instance system-wide)
    pub visual: ClipId,
    /// Noise candidates (one picked uniformly per trigger)
    pub noises: [ClipId; CLIPS_PER_CATEGORY],
    /// Voice candidates (one picked uniformly per trigger)
    pub voices: [ClipId; CLIPS_PER_CATEGORY],
    /// Sting played on the hit that reaches the goal
    pub sting: ClipId,
}

impl ClipSet {
    /// Create a clip set
    pub fn new(
        visual: ClipId,
        noises: [ClipId; CLIPS_PER_CATEGORY],
        voices: [ClipId; CLIPS_PER_CATEGORY],
        sting: ClipId,
    ) -> Self {
        Self {
            visual,
            noises,
            voices,
            sting,
        }
    }

    /// Candidate clips for a category
    #[inline]
    pub fn candidates(&self, category: AudioCategory) -> &[ClipId; CLIPS_PER_CATEGORY] {
        match category {
            AudioCategory::Noise => &self.noises,
            AudioCategory::Voice => &self.voices,
        }
    }

    /// Iterate every clip in the set (for preload)
    pub fn all(&self) -> impl Iterator<Item = ClipId> + '_ {
        std::iter::once(self.visual)
            .chain(self.noises.iter().copied())
            .chain(self.voices.iter().copied())
            .chain(std::iter::once(self.sting))
    }
}
