//! Stage Seams
//!
//! The two trait seams between the core and the host page. The core never
//! touches markup, media elements, or observers directly; it addresses
//! opaque clip handles and marker/content toggles through these traits and
//! the host maps them onto whatever UI layer it runs in.

use crate::clip::ClipId;
use crate::error::HsResult;
use serde::{Deserialize, Serialize};

/// Presentation marker toggled on the stage region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageMarker {
    /// Screen-shake animation marker (cleared on animation end)
    Shake,
    /// White-flash marker (cleared after a fixed short delay)
    Flash,
    /// Glitch overlay shown once when the hit goal is reached
    Glitch,
    /// Counter-fill-complete marker, applied permanently at the goal
    CounterComplete,
}

/// Host media layer
///
/// Play requests are fire-and-forget: a rejected request (autoplay policy,
/// missing resource) comes back as `Err` and the core swallows it — the
/// burst degrades to visual-only feedback, never to a user-visible error.
pub trait MediaBackend {
    /// Hint the host to load a clip ahead of first playback
    fn preload(&mut self, clip: ClipId);

    /// Request playback from the current position
    fn play(&mut self, clip: ClipId) -> HsResult<()>;

    /// Halt playback immediately (no fade)
    fn stop(&mut self, clip: ClipId);

    /// Move the playhead (seconds)
    fn seek(&mut self, clip: ClipId, position_secs: f32);

    /// Set playback volume (0.0 - 1.0)
    fn set_volume(&mut self, clip: ClipId, volume: f32);
}

/// Host presentation layer
///
/// Two mutually exclusive content blocks (normal vs. reveal) plus the
/// shake/flash markers, consumed as opaque apply/clear operations.
pub trait StagePresenter {
    /// Apply a marker to the stage region
    fn apply_marker(&mut self, marker: StageMarker);

    /// Clear a marker from the stage region
    fn clear_marker(&mut self, marker: StageMarker);

    /// Force the presentation layer to observe previously cleared markers
    /// before any re-application, so a rapid re-trigger restarts the
    /// animation instead of becoming a no-op on unchanged state.
    fn flush(&mut self);

    /// Switch between the visual hit clip (true) and the idle
    /// representation (false)
    fn set_clip_active(&mut self, active: bool);

    /// Switch the observed region between its reveal (true) and normal
    /// (false) content block
    fn set_reveal_visible(&mut self, reveal: bool);
}
