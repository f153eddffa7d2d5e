//! Error types for HitStage

use crate::clip::ClipId;
use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum HsError {
    /// A play request was rejected by the host media layer (autoplay policy,
    /// missing resource). Callers swallow this; the burst degrades silently.
    #[error("Play request rejected for clip {clip}")]
    PlaybackRejected { clip: ClipId },

    #[error("Config error: {0}")]
    Config(String),
}

/// Result type alias
pub type HsResult<T> = Result<T, HsError>;
