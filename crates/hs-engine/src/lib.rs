//! HitStage Interaction Engine
//!
//! Top of the stack: wires the burst controller, hit counter, and reveal
//! machine behind one event-driven surface.
//!
//! ## Architecture
//!
//! ```text
//!   Event sources (input, media, observer, clock)
//!        │  EventSender (clonable)
//!        ▼
//!   ┌──────────────┐  pump() on the one consuming thread
//!   │ StageEvent   │──────────────────────────────────────┐
//!   │ queue        │                                      ▼
//!   └──────────────┘                     ┌─────────────────────────────┐
//!                                        │ InteractionEngine           │
//!                                        │  InputGate (ghost window)   │
//!                                        │  BurstController  trigger() │
//!                                        │  HitCounter     increment() │
//!                                        │  RevealMachine   samples    │
//!                                        └──────┬───────────────┬──────┘
//!                                               ▼               ▼
//!                                         MediaBackend    StagePresenter
//! ```
//!
//! Everything the engine does runs on the single thread that calls
//! `pump()` (or the handler methods directly), so one trigger's
//! stop-then-restart sequence can never interleave with another.

mod engine;
mod input;
mod queue;

pub use engine::InteractionEngine;
pub use input::{ActivationSource, InputGate};
pub use queue::{EventSender, StageEvent};
