//! Stage Event Queue
//!
//! Event sources (input dispatcher, media layer, visibility observer,
//! clock) push `StageEvent`s through a clonable `EventSender`; the one
//! consuming thread drains them with `InteractionEngine::pump()`. The
//! queue is the only boundary between sources and the engine, so handler
//! execution is always serialized.

use crossbeam_channel::{Receiver, Sender, unbounded};
use serde::{Deserialize, Serialize};

use crate::input::ActivationSource;

/// One discrete occurrence delivered to the engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum StageEvent {
    /// Primary activation (tap / click / context menu)
    Activation {
        source: ActivationSource,
        at_ms: u64,
    },
    /// The visual hit clip reached its natural end
    ClipEnded,
    /// The shake animation completed
    AnimationEnd,
    /// Visibility-ratio sample for the observed region (0.0 - 1.0)
    VisibilitySample { ratio: f64 },
    /// Clock advance (drives marker deadlines)
    Tick { at_ms: u64 },
}

/// Clonable producer handle for event sources
#[derive(Debug, Clone)]
pub struct EventSender {
    tx: Sender<StageEvent>,
}

impl EventSender {
    /// Push an event; dropped silently if the engine is gone
    pub fn send(&self, event: StageEvent) {
        if self.tx.send(event).is_err() {
            log::debug!("Engine gone; dropping {event:?}");
        }
    }
}

/// Create the queue pair
pub(crate) fn stage_channel() -> (EventSender, Receiver<StageEvent>) {
    let (tx, rx) = unbounded();
    (EventSender { tx }, rx)
}
