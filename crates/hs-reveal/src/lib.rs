//! HitStage Reveal System
//!
//! The counter-gated progressive reveal:
//! - `HitCounter`: monotonic counter with a single-fire goal latch
//! - `RevealMachine`: four forward-only phases driven by visibility-ratio
//!   samples, with an absorbing terminal state
//!
//! ## Phase flow
//!
//! ```text
//!   Dormant ──goal──▶ Hidden ──ratio ≥ 0.15──▶ Revealing
//!       ──ratio ≥ 0.5──▶ ConfirmedSeen ──ratio == 0──▶ Dismissed
//! ```
//!
//! Threshold checks are independent per sample, so one sample may take
//! two steps. `Dismissed` is permanent; the feed owner disconnects there.

mod counter;
mod machine;

pub use counter::{HitCounter, HitProgress};
pub use machine::{RevealMachine, RevealPhase};
