//! HitStage Media Burst Controller
//!
//! Drives the coordinated visual + two-audio burst a trigger fires:
//! - Unconditional stop-then-restart of anything still playing (no fade,
//!   no queuing, no overlap)
//! - Independent uniform reselection of noise and voice per trigger
//! - One-shot shake/flash pulse with self-clearing markers
//! - Completion bookkeeping when the visual clip reaches natural end
//! - The goal-reached sting + glitch celebration
//!
//! ## Control flow
//!
//! ```text
//!   input event ──▶ trigger() ──┬─▶ MediaBackend  (stop / seek / play)
//!                               └─▶ StagePresenter (markers, clip active)
//!   "clip ended"  ──▶ on_clip_ended()      back to idle
//!   "anim ended"  ──▶ on_animation_end()   shake marker clears
//!   clock         ──▶ tick(now)            flash marker clears
//! ```

mod controller;
mod goal;
mod pulse;

pub use controller::BurstController;
pub use goal::GoalBurst;
pub use pulse::HitPulse;
