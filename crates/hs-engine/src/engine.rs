//! Interaction Engine
//!
//! One instance per page session. Owns the burst controller, hit counter,
//! reveal machine, and input gate, plus the host's media and presentation
//! seams. Constructed dormant; the hit goal arms the reveal machine and the
//! visibility feed carries it to dismissal.

use crossbeam_channel::Receiver;
use hs_burst::{BurstController, GoalBurst};
use hs_core::{ClipSet, MediaBackend, StageConfig, StagePresenter};
use hs_reveal::{HitCounter, RevealMachine, RevealPhase};

use crate::input::{ActivationSource, InputGate};
use crate::queue::{EventSender, StageEvent, stage_channel};

/// The composed interaction engine
pub struct InteractionEngine<M: MediaBackend, P: StagePresenter> {
    media: M,
    presenter: P,
    burst: BurstController,
    goal: GoalBurst,
    counter: HitCounter,
    reveal: RevealMachine,
    gate: InputGate,
    events: Receiver<StageEvent>,
}

impl<M: MediaBackend, P: StagePresenter> InteractionEngine<M, P> {
    /// Create an engine and its event sender; preloads every clip
    pub fn new(config: &StageConfig, clips: ClipSet, media: M, presenter: P) -> (Self, EventSender) {
        let burst = BurstController::new(clips, config);
        Self::build(config, clips, burst, media, presenter)
    }

    /// Create with a fixed RNG seed for deterministic clip selection
    pub fn with_seed(
        config: &StageConfig,
        clips: ClipSet,
        media: M,
        presenter: P,
        seed: u64,
    ) -> (Self, EventSender) {
        let burst = BurstController::with_seed(clips, config, seed);
        Self::build(config, clips, burst, media, presenter)
    }

    fn build(
        config: &StageConfig,
        clips: ClipSet,
        burst: BurstController,
        mut media: M,
        presenter: P,
    ) -> (Self, EventSender) {
        for clip in clips.all() {
            media.preload(clip);
        }

        let (sender, events) = stage_channel();
        let engine = Self {
            media,
            presenter,
            burst,
            goal: GoalBurst::new(clips.sting, config),
            counter: HitCounter::new(config.hit_goal),
            reveal: RevealMachine::new(config),
            gate: InputGate::new(config.ghost_window_ms),
            events,
        };
        (engine, sender)
    }

    /// Drain and handle every queued event; returns how many were handled
    pub fn pump(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(event) = self.events.try_recv() {
            self.dispatch(event);
            handled += 1;
        }
        handled
    }

    fn dispatch(&mut self, event: StageEvent) {
        match event {
            StageEvent::Activation { source, at_ms } => {
                self.on_activation(source, at_ms);
            }
            StageEvent::ClipEnded => self.on_clip_ended(),
            StageEvent::AnimationEnd => self.on_animation_end(),
            StageEvent::VisibilitySample { ratio } => self.on_visibility_sample(ratio),
            StageEvent::Tick { at_ms } => self.tick(at_ms),
        }
    }

    /// Handle one primary activation; returns whether it was admitted
    ///
    /// An admitted activation fires the burst and counts the hit; the hit
    /// that reaches the goal fires the goal celebration and arms the
    /// reveal machine.
    pub fn on_activation(&mut self, source: ActivationSource, now_ms: u64) -> bool {
        if !self.gate.admit(source, now_ms) {
            log::debug!("Suppressed ghost {source:?} at {now_ms}ms");
            return false;
        }

        self.burst
            .trigger(&mut self.media, &mut self.presenter, now_ms);

        let progress = self.counter.increment();
        log::debug!("Hit {}/{}", progress.count, self.counter.goal());
        if progress.goal_reached {
            log::info!("Hit goal reached ({})", progress.count);
            self.goal
                .fire(&mut self.media, &mut self.presenter, now_ms);
            self.reveal.arm();
        }
        true
    }

    /// The visual hit clip reached its natural end
    pub fn on_clip_ended(&mut self) {
        self.burst.on_clip_ended(&mut self.presenter);
    }

    /// The shake animation completed
    pub fn on_animation_end(&mut self) {
        self.burst.on_animation_end(&mut self.presenter);
    }

    /// Visibility-ratio sample for the observed region
    ///
    /// Samples after dismissal are dropped; the feed owner should have
    /// disconnected (see [`RevealMachine::wants_samples`]) but late
    /// deliveries are harmless.
    pub fn on_visibility_sample(&mut self, ratio: f64) {
        if !self.reveal.wants_samples() {
            return;
        }
        self.reveal.on_visibility_sample(ratio, &mut self.presenter);
    }

    /// Advance the clock (flash and glitch marker self-clears)
    pub fn tick(&mut self, now_ms: u64) {
        self.burst.tick(&mut self.presenter, now_ms);
        self.goal.tick(&mut self.presenter, now_ms);
    }

    /// Hits recorded this session
    #[inline]
    pub fn hit_count(&self) -> u64 {
        self.counter.count()
    }

    /// Current reveal phase
    #[inline]
    pub fn reveal_phase(&self) -> RevealPhase {
        self.reveal.phase()
    }

    /// Whether the visibility feed should keep delivering samples
    #[inline]
    pub fn wants_visibility_samples(&self) -> bool {
        self.reveal.wants_samples()
    }

    /// Whether the visual clip is currently playing
    #[inline]
    pub fn is_playing(&self) -> bool {
        self.burst.is_playing()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hs_core::{ClipId, HsResult, StageMarker};
    use std::collections::HashSet;

    #[derive(Default)]
    struct FakeMedia {
        preloaded: Vec<ClipId>,
        playing: HashSet<ClipId>,
        plays: usize,
    }

    impl MediaBackend for FakeMedia {
        fn preload(&mut self, clip: ClipId) {
            self.preloaded.push(clip);
        }
        fn play(&mut self, clip: ClipId) -> HsResult<()> {
            self.plays += 1;
            self.playing.insert(clip);
            Ok(())
        }
        fn stop(&mut self, clip: ClipId) {
            self.playing.remove(&clip);
        }
        fn seek(&mut self, _clip: ClipId, _position_secs: f32) {}
        fn set_volume(&mut self, _clip: ClipId, _volume: f32) {}
    }

    #[derive(Default)]
    struct FakeStage {
        clip_active: bool,
        reveal_visible: bool,
        markers: Vec<String>,
    }

    impl StagePresenter for FakeStage {
        fn apply_marker(&mut self, marker: StageMarker) {
            self.markers.push(format!("apply:{marker:?}"));
        }
        fn clear_marker(&mut self, marker: StageMarker) {
            self.markers.push(format!("clear:{marker:?}"));
        }
        fn flush(&mut self) {}
        fn set_clip_active(&mut self, active: bool) {
            self.clip_active = active;
        }
        fn set_reveal_visible(&mut self, reveal: bool) {
            self.reveal_visible = reveal;
        }
    }

    fn clips() -> ClipSet {
        ClipSet::new(1, [10, 11, 12], [20, 21, 22], 30)
    }

    fn engine() -> (InteractionEngine<FakeMedia, FakeStage>, EventSender) {
        InteractionEngine::with_seed(
            &StageConfig::default(),
            clips(),
            FakeMedia::default(),
            FakeStage::default(),
            42,
        )
    }

    #[test]
    fn test_construction_preloads_every_clip() {
        let (engine, _sender) = engine();
        assert_eq!(engine.media.preloaded, vec![1, 10, 11, 12, 20, 21, 22, 30]);
    }

    #[test]
    fn test_goal_arms_reveal_on_exactly_the_goal_hit() {
        let (mut engine, _sender) = engine();

        for i in 0..99 {
            engine.on_activation(ActivationSource::Click, i * 1_000);
            assert_eq!(engine.reveal_phase(), RevealPhase::Dormant);
        }

        engine.on_activation(ActivationSource::Click, 99_000);
        assert_eq!(engine.hit_count(), 100);
        assert_eq!(engine.reveal_phase(), RevealPhase::Hidden);
    }

    #[test]
    fn test_goal_hit_fires_sting_and_glitch() {
        let (mut engine, _sender) = engine();

        for i in 0..99 {
            engine.on_activation(ActivationSource::Click, i * 1_000);
        }
        assert!(!engine.media.playing.contains(&30));
        assert!(!engine.presenter.markers.contains(&"apply:Glitch".to_string()));

        engine.on_activation(ActivationSource::Click, 99_000);

        assert!(engine.media.playing.contains(&30));
        assert!(engine.presenter.markers.contains(&"apply:Glitch".to_string()));
        assert!(
            engine
                .presenter
                .markers
                .contains(&"apply:CounterComplete".to_string())
        );

        // Glitch self-clears two seconds after the goal hit
        engine.tick(101_000);
        assert_eq!(engine.presenter.markers.last().unwrap(), "clear:Glitch");

        // Later hits never refire the celebration
        engine.media.playing.remove(&30);
        engine.presenter.markers.clear();
        engine.on_activation(ActivationSource::Click, 102_000);
        assert!(!engine.media.playing.contains(&30));
        assert!(!engine.presenter.markers.contains(&"apply:Glitch".to_string()));
    }

    #[test]
    fn test_ghost_click_does_not_count_a_hit() {
        let (mut engine, _sender) = engine();

        assert!(engine.on_activation(ActivationSource::Touch, 0));
        assert!(!engine.on_activation(ActivationSource::Click, 100));
        assert_eq!(engine.hit_count(), 1);
        assert_eq!(engine.media.plays, 3); // visual + noise + voice, once

        assert!(engine.on_activation(ActivationSource::Click, 400));
        assert_eq!(engine.hit_count(), 2);
    }

    #[test]
    fn test_full_reveal_scenario_through_queue() {
        let (mut engine, sender) = engine();

        for i in 0..100 {
            sender.send(StageEvent::Activation {
                source: ActivationSource::Click,
                at_ms: i * 1_000,
            });
        }
        sender.send(StageEvent::VisibilitySample { ratio: 0.2 });
        sender.send(StageEvent::VisibilitySample { ratio: 0.6 });
        sender.send(StageEvent::VisibilitySample { ratio: 0.0 });

        assert_eq!(engine.pump(), 103);
        assert_eq!(engine.reveal_phase(), RevealPhase::Dismissed);
        assert!(!engine.presenter.reveal_visible);
        assert!(!engine.wants_visibility_samples());
    }

    #[test]
    fn test_samples_before_goal_are_ignored() {
        let (mut engine, _sender) = engine();

        engine.on_visibility_sample(0.9);
        assert_eq!(engine.reveal_phase(), RevealPhase::Dormant);
        assert!(!engine.presenter.reveal_visible);
    }

    #[test]
    fn test_samples_after_dismissal_are_dropped() {
        let (mut engine, _sender) = engine();
        for i in 0..100 {
            engine.on_activation(ActivationSource::Click, i * 1_000);
        }
        engine.on_visibility_sample(0.6);
        engine.on_visibility_sample(0.0);
        assert_eq!(engine.reveal_phase(), RevealPhase::Dismissed);

        engine.on_visibility_sample(0.6);
        assert_eq!(engine.reveal_phase(), RevealPhase::Dismissed);
        assert!(!engine.presenter.reveal_visible);
    }

    #[test]
    fn test_clip_ended_returns_stage_to_idle() {
        let (mut engine, _sender) = engine();

        engine.on_activation(ActivationSource::Click, 0);
        assert!(engine.is_playing());
        assert!(engine.presenter.clip_active);

        engine.on_clip_ended();
        assert!(!engine.is_playing());
        assert!(!engine.presenter.clip_active);
    }

    #[test]
    fn test_tick_clears_flash_after_deadline() {
        let (mut engine, sender) = engine();

        sender.send(StageEvent::Activation {
            source: ActivationSource::Click,
            at_ms: 0,
        });
        sender.send(StageEvent::Tick { at_ms: 80 });
        engine.pump();

        assert_eq!(engine.presenter.markers.last().unwrap(), "clear:Flash");
    }

    #[test]
    fn test_rapid_retrigger_never_overlaps_media() {
        let (mut engine, _sender) = engine();

        let noise_clips = clips().noises;
        for i in 0..30 {
            engine.on_activation(ActivationSource::Click, i * 5);
            let noises = engine
                .media
                .playing
                .iter()
                .copied()
                .filter(|c| noise_clips.contains(c))
                .count();
            assert_eq!(noises, 1);
        }
    }
}
