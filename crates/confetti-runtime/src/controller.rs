//! Overlay controller: owns the live bursts and drives them frame by frame

use crate::clock::FrameClock;
use crate::event::OverlayEvent;
use crate::event_bus::{EventBus, EventSender};
use crate::trigger::{TriggerEvent, TriggerKind, TriggerOutcome};
use confetti_core::{ConfigOverride, ParticleConfig, Result, Settings, Vector};
use confetti_particles::{Burst, ParticleRng};
use confetti_render::{Screen, Surface};

/// What one tick did
#[derive(Debug, Clone, Default)]
pub struct FrameReport {
    /// Seconds since the previous tick
    pub dt: f64,
    /// Particles removed for leaving the screen
    pub culled: usize,
    /// Bursts removed after their last particle was culled
    pub finished_bursts: usize,
    /// Outcomes of triggers drained from the event queue
    pub outcomes: Vec<TriggerOutcome>,
}

pub struct Controller {
    config: ParticleConfig,
    bursts: Vec<Burst>,
    clock: FrameClock,
    /// Surface size in device pixels
    viewport: (u32, u32),
    /// Device pixels per logical pixel
    scale_factor: f64,
    visible: bool,
    events: EventBus,
    rng: ParticleRng,
}

impl Controller {
    pub fn new(config: ParticleConfig, width: u32, height: u32) -> Self {
        Self::with_rng(config, width, height, ParticleRng::from_entropy())
    }

    /// Deterministic controller for headless renders and tests
    pub fn with_seed(config: ParticleConfig, width: u32, height: u32, seed: u64) -> Self {
        Self::with_rng(config, width, height, ParticleRng::new(seed))
    }

    fn with_rng(config: ParticleConfig, width: u32, height: u32, rng: ParticleRng) -> Self {
        Self {
            config,
            bursts: Vec::new(),
            clock: FrameClock::new(),
            viewport: (width, height),
            scale_factor: 1.0,
            visible: true,
            events: EventBus::new(),
            rng,
        }
    }

    /// Handle for queueing events from other threads
    pub fn sender(&self) -> EventSender {
        self.events.sender()
    }

    /// Queue an event for the next tick
    pub fn push_event(&self, event: OverlayEvent) {
        self.events.push(event);
    }

    /// Advance one frame: apply queued events, update every burst, drop
    /// finished ones, then redraw the surface.
    pub fn tick<S: Surface + ?Sized>(
        &mut self,
        timestamp_ms: f64,
        mut surface: Option<&mut S>,
    ) -> FrameReport {
        let outcomes = self.process_events();

        let dt = self.clock.tick(timestamp_ms);
        let viewport_height = self.logical_height();
        let mut culled = 0;
        for burst in &mut self.bursts {
            culled += burst.update(dt as f32, &self.config, viewport_height, &mut self.rng);
        }

        let before = self.bursts.len();
        self.bursts.retain(|burst| !burst.is_empty());
        let finished_bursts = before - self.bursts.len();
        if finished_bursts > 0 {
            tracing::trace!(finished_bursts, remaining = self.bursts.len(), "bursts finished");
        }

        Screen::clear(surface.as_deref_mut());
        if self.visible {
            for burst in &self.bursts {
                burst.draw(surface.as_deref_mut());
            }
        }

        FrameReport {
            dt,
            culled,
            finished_bursts,
            outcomes,
        }
    }

    /// Drain the event queue in arrival order
    pub fn process_events(&mut self) -> Vec<TriggerOutcome> {
        let mut outcomes = Vec::new();
        for event in self.events.drain() {
            match event {
                OverlayEvent::Trigger(trigger) => outcomes.push(self.handle_trigger(&trigger)),
                OverlayEvent::SettingsChanged(settings) => self.apply_settings(&settings),
                OverlayEvent::SetVisible(visible) => self.set_visible(visible),
                OverlayEvent::Resized { width, height } => self.resize(width, height),
                OverlayEvent::ScaleFactorChanged(scale_factor) => self.set_scale_factor(scale_factor),
            }
        }
        outcomes
    }

    /// Spawn a burst from a merged copy of the config. The shared config is
    /// left untouched. Returns the new burst's index.
    pub fn spawn_burst(&mut self, origin: Vector, overrides: Option<&ConfigOverride>) -> usize {
        let burst = match overrides {
            Some(overrides) => {
                let effective = self.config.with_override(overrides);
                Burst::spawn(origin, &effective, &mut self.rng)
            }
            None => Burst::spawn(origin, &self.config, &mut self.rng),
        };
        tracing::debug!(x = origin.x, y = origin.y, particles = burst.len(), "spawned burst");
        self.bursts.push(burst);
        self.bursts.len() - 1
    }

    /// Spawn a burst for a click or keystroke using that trigger's policy
    pub fn handle_trigger(&mut self, event: &TriggerEvent) -> TriggerOutcome {
        let overrides = event.kind.override_for(&self.config, &mut self.rng);
        let burst_index = self.spawn_burst(event.origin, Some(&overrides));
        let hide_target = event.kind == TriggerKind::Click
            && event.on_target
            && self.config.destroy_target;

        TriggerOutcome {
            kind: event.kind,
            burst_index,
            particles: self.bursts[burst_index].len(),
            hide_target,
        }
    }

    pub fn set_count(&mut self, value: impl Into<toml::Value>) -> Result<()> {
        self.config.set_count(value)
    }

    pub fn set_power(&mut self, value: impl Into<toml::Value>) -> Result<()> {
        self.config.set_power(value)
    }

    pub fn set_size(&mut self, value: impl Into<toml::Value>) -> Result<()> {
        self.config.set_size(value)
    }

    pub fn set_gravity(&mut self, value: impl Into<toml::Value>) -> Result<()> {
        self.config.set_gravity(value)
    }

    pub fn set_fade(&mut self, value: impl Into<toml::Value>) -> Result<()> {
        self.config.set_fade(value)
    }

    pub fn set_fade_speed(&mut self, value: impl Into<toml::Value>) -> Result<()> {
        self.config.set_fade_speed(value)
    }

    pub fn set_destroy_target(&mut self, value: impl Into<toml::Value>) -> Result<()> {
        self.config.set_destroy_target(value)
    }

    /// Copy persisted settings into the live config. `enabled` maps onto
    /// visibility; bursts keep simulating while hidden.
    pub fn apply_settings(&mut self, settings: &Settings) {
        settings.apply_to(&mut self.config);
        self.visible = settings.enabled;
        tracing::info!(
            enabled = settings.enabled,
            particle_count = settings.particle_count,
            explosion_power = settings.explosion_power,
            "applied settings"
        );
    }

    /// Surface size in device pixels
    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport = (width, height);
    }

    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    /// Ignores non-positive factors
    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        if scale_factor > 0.0 && scale_factor.is_finite() {
            self.scale_factor = scale_factor;
        }
    }

    /// Viewport height in logical pixels. Particles are culled against
    /// twice this, which is the full surface at the usual 2x density.
    pub fn logical_height(&self) -> f32 {
        (self.viewport.1 as f64 / self.scale_factor) as f32
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }

    pub fn bursts(&self) -> &[Burst] {
        &self.bursts
    }

    pub fn clear_bursts(&mut self) {
        self.bursts.clear();
    }

    pub fn burst_count(&self) -> usize {
        self.bursts.len()
    }

    pub fn particle_count(&self) -> usize {
        self.bursts.iter().map(Burst::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use confetti_core::ConfettiError;
    use confetti_render::RotatedRect;

    #[derive(Default)]
    struct Recorder {
        clears: usize,
        rects: Vec<RotatedRect>,
    }

    impl Surface for Recorder {
        fn size(&self) -> (u32, u32) {
            (1600, 1200)
        }
        fn clear(&mut self) {
            self.clears += 1;
            self.rects.clear();
        }
        fn fill_rect(&mut self, rect: &RotatedRect) {
            self.rects.push(*rect);
        }
    }

    fn controller() -> Controller {
        Controller::with_seed(ParticleConfig::default(), 1600, 1200, 7)
    }

    #[test]
    fn plain_spawn_uses_config_count() {
        let mut c = controller();
        let index = c.spawn_burst(Vector::new(100.0, 100.0), None);
        assert_eq!(index, 0);
        assert_eq!(c.bursts()[0].len(), 75);
        assert_eq!(c.bursts()[0].origin, Vector::new(100.0, 100.0));
    }

    #[test]
    fn first_tick_draws_every_particle() {
        let mut c = controller();
        c.spawn_burst(Vector::new(100.0, 100.0), None);
        let mut surface = Recorder::default();
        let report = c.tick(16.0, Some(&mut surface));
        assert_eq!(report.dt, 0.0);
        assert_eq!(surface.clears, 1);
        assert_eq!(surface.rects.len(), 75);
    }

    #[test]
    fn triggers_leave_config_untouched() {
        let mut c = controller();
        let before = c.config().clone();
        for i in 0..50 {
            let origin = Vector::new(i as f32, 10.0);
            c.handle_trigger(&TriggerEvent::click(origin));
            c.handle_trigger(&TriggerEvent::keystroke(origin));
        }
        assert_eq!(c.config(), &before);
        assert_eq!(c.burst_count(), 100);
    }

    #[test]
    fn click_burst_within_policy() {
        let mut c = controller();
        for _ in 0..200 {
            let outcome = c.handle_trigger(&TriggerEvent::click(Vector::new(10.0, 10.0)));
            assert_eq!(outcome.kind, TriggerKind::Click);
            assert!(outcome.particles >= 15);

            let spawn = c.bursts()[outcome.burst_index].spawn_config();
            assert!(spawn.explosion_power >= 0.3 * 25.0 - 1e-4);
            assert!(spawn.explosion_power <= 0.9 * 25.0 + 1e-4);
        }
    }

    #[test]
    fn keystroke_burst_with_defaults() {
        let mut c = controller();
        let outcome = c.handle_trigger(&TriggerEvent::keystroke(Vector::new(10.0, 10.0)));
        assert_eq!(outcome.particles, 6);
        let spawn = c.bursts()[outcome.burst_index].spawn_config();
        assert_eq!(spawn.particle_count, 6);
        assert_eq!(spawn.explosion_power, 5.0);
    }

    #[test]
    fn destroy_target_only_for_target_clicks() {
        let mut c = controller();
        let origin = Vector::new(5.0, 5.0);
        assert!(!c.handle_trigger(&TriggerEvent::click(origin).on_target()).hide_target);

        c.set_destroy_target(true).unwrap();
        assert!(c.handle_trigger(&TriggerEvent::click(origin).on_target()).hide_target);
        assert!(!c.handle_trigger(&TriggerEvent::click(origin)).hide_target);
        assert!(!c.handle_trigger(&TriggerEvent::keystroke(origin).on_target()).hide_target);
    }

    #[test]
    fn setter_type_mismatch() {
        let mut c = controller();
        let err = c.set_count("lots").unwrap_err();
        assert!(matches!(err, ConfettiError::ConfigTypeMismatch { field: "particle_count", .. }));
        assert_eq!(c.config().particle_count, 75);

        c.set_count(0).unwrap();
        c.spawn_burst(Vector::ZERO, None);
        assert_eq!(c.bursts()[0].len(), 0);
    }

    #[test]
    fn empty_bursts_removed_on_tick() {
        let mut c = controller();
        c.set_count(0).unwrap();
        c.spawn_burst(Vector::ZERO, None);
        let report = c.tick::<Recorder>(0.0, None);
        assert_eq!(report.finished_bursts, 1);
        assert_eq!(c.burst_count(), 0);
    }

    #[test]
    fn offscreen_particles_culled() {
        let mut c = Controller::with_seed(ParticleConfig::default(), 100, 100, 8);
        c.spawn_burst(Vector::new(50.0, 50.0), None);
        for p in c.bursts[0].particles_mut() {
            p.position.y = 10_000.0;
        }
        let report = c.tick::<Recorder>(0.0, None);
        assert_eq!(report.culled, 75);
        assert_eq!(c.burst_count(), 0);
        assert_eq!(c.particle_count(), 0);
    }

    #[test]
    fn queued_events_applied_next_tick() {
        let mut c = controller();
        let sender = c.sender();
        std::thread::spawn(move || {
            sender.send(OverlayEvent::Trigger(TriggerEvent::keystroke(Vector::new(1.0, 1.0))));
            let settings = Settings {
                particle_count: 40,
                ..Settings::default()
            };
            sender.send(OverlayEvent::SettingsChanged(settings));
        })
        .join()
        .unwrap();

        // Nothing happens until the frame loop drains the queue
        assert_eq!(c.burst_count(), 0);
        assert_eq!(c.config().particle_count, 75);

        let report = c.tick::<Recorder>(0.0, None);
        assert_eq!(report.outcomes.len(), 1);
        assert_eq!(report.outcomes[0].particles, 6);
        assert_eq!(c.config().particle_count, 40);
    }

    #[test]
    fn hidden_overlay_clears_but_keeps_simulating() {
        let mut c = controller();
        c.spawn_burst(Vector::new(800.0, 600.0), None);
        c.apply_settings(&Settings {
            enabled: false,
            ..Settings::default()
        });
        assert!(!c.is_visible());

        let mut surface = Recorder::default();
        c.tick(0.0, Some(&mut surface));
        let start = c.bursts()[0].particles()[0].position;
        c.tick(16.0, Some(&mut surface));
        assert_eq!(surface.clears, 2);
        assert!(surface.rects.is_empty());
        assert_ne!(c.bursts()[0].particles()[0].position, start);

        c.push_event(OverlayEvent::SetVisible(true));
        c.tick(32.0, Some(&mut surface));
        assert_eq!(surface.rects.len(), c.particle_count());
    }

    #[test]
    fn fading_never_draws_negative_alpha() {
        let mut c = Controller::with_seed(ParticleConfig::default(), 100_000, 100_000, 9);
        c.set_fade(true).unwrap();
        c.set_fade_speed(50).unwrap();
        c.spawn_burst(Vector::new(500.0, 500.0), None);

        let mut surface = Recorder::default();
        for frame in 0..10 {
            c.tick(frame as f64 * 16.0, Some(&mut surface));
            for rect in &surface.rects {
                assert!(rect.color.a > 0.0 && rect.color.a <= 1.0);
            }
        }
        // lifetime * 50 >= 12.5 per tick, so every particle is transparent by now
        assert!(c.bursts()[0].particles().iter().all(|p| p.opacity < 0.0));
        assert!(surface.rects.is_empty());
    }

    #[test]
    fn resize_changes_cull_height() {
        let mut c = Controller::with_seed(ParticleConfig::default(), 100, 100, 10);
        c.spawn_burst(Vector::new(50.0, 50.0), None);
        for p in c.bursts[0].particles_mut() {
            p.velocity = Vector::ZERO;
            p.position.y = 1_000.0;
        }
        c.resize(100, 10_000);
        assert_eq!(c.viewport(), (100, 10_000));
        c.tick::<Recorder>(0.0, None);
        assert_eq!(c.particle_count(), 75);

        c.clear_bursts();
        assert_eq!(c.burst_count(), 0);
    }

    #[test]
    fn cull_height_uses_logical_viewport() {
        let still = |c: &mut Controller| {
            c.spawn_burst(Vector::new(100.0, 100.0), None);
            for p in c.bursts[0].particles_mut() {
                p.velocity = Vector::ZERO;
                p.size.x = 10.0;
                // position.y - 2 * size.x == 300
                p.position.y = 320.0;
            }
        };

        // 200 device px at 2x is 100 logical px, so the cull line sits at 200
        let mut hidpi = Controller::with_seed(ParticleConfig::default(), 200, 200, 11);
        hidpi.push_event(OverlayEvent::ScaleFactorChanged(2.0));
        still(&mut hidpi);
        let report = hidpi.tick::<Recorder>(0.0, None);
        assert_eq!(hidpi.logical_height(), 100.0);
        assert_eq!(report.culled, 75);
        assert_eq!(hidpi.particle_count(), 0);

        // The same surface at 1x keeps them (300 <= 400)
        let mut lowdpi = Controller::with_seed(ParticleConfig::default(), 200, 200, 11);
        still(&mut lowdpi);
        lowdpi.tick::<Recorder>(0.0, None);
        assert_eq!(lowdpi.particle_count(), 75);

        lowdpi.set_scale_factor(0.0);
        assert_eq!(lowdpi.logical_height(), 200.0);
    }
}
