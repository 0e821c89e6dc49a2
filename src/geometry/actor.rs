//! The geometry actor component and its colour-timer state machine.

use std::time::Duration;

use bevy::prelude::*;
use rand::Rng;

use crate::components::{GeometryConfig, MovementKind};
use crate::constants::MAX_TIMER_COUNT;
use crate::rng::random_color;

/// Lifecycle of a geometry actor.
#[derive(Reflect, Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryState {
    /// Spawned but not yet started.
    #[default]
    Unstarted,
    /// Started; the colour timer may still be running.
    Active,
    /// The colour timer ran out and was disarmed. Terminal.
    Finished,
}

/// Result of one colour timer fire.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimerOutcome {
    /// A new colour was drawn and should be applied and announced.
    ColorChanged(LinearRgba),
    /// The tick limit was exceeded; the timer is now disarmed.
    Finished,
    /// The actor is not active, nothing happened.
    Ignored,
}

/// A recolourable, optionally oscillating world object with a bounded
/// colour-changing lifetime.
///
/// Transitions: [`GeometryState::Unstarted`] to [`GeometryState::Active`] on
/// [`GeometryActor::begin_play`], then to [`GeometryState::Finished`] on the
/// first timer fire after [`MAX_TIMER_COUNT`] colour changes.
#[derive(Component, Reflect, Debug, Clone)]
#[reflect(Component)]
pub struct GeometryActor {
    config: GeometryConfig,
    initial_location: Option<Vec3>,
    #[reflect(ignore)]
    timer: Option<Timer>,
    /// Set when the timer is armed; the frame delta seen next predates it.
    arming_frame: bool,
    timer_count: u32,
    max_timer_count: u32,
    state: GeometryState,
}

impl GeometryActor {
    /// Creates an unstarted actor with the given configuration.
    #[must_use]
    pub const fn new(config: GeometryConfig) -> Self {
        Self {
            config,
            initial_location: None,
            timer: None,
            arming_frame: false,
            timer_count: 0,
            max_timer_count: MAX_TIMER_COUNT,
            state: GeometryState::Unstarted,
        }
    }

    /// Current configuration.
    #[must_use]
    pub const fn config(&self) -> &GeometryConfig {
        &self.config
    }

    /// Replaces the configuration wholesale.
    ///
    /// Takes effect for movement immediately. Colour and timer period are read
    /// only by [`GeometryActor::begin_play`], so a replacement after start
    /// does not recolour the actor or re-arm its timer.
    pub const fn set_config(&mut self, config: GeometryConfig) {
        self.config = config;
    }

    /// Lifecycle state.
    #[must_use]
    pub const fn state(&self) -> GeometryState {
        self.state
    }

    /// Location captured at start, if started.
    #[must_use]
    pub const fn initial_location(&self) -> Option<Vec3> {
        self.initial_location
    }

    /// Number of timer fires handled so far.
    #[must_use]
    pub const fn timer_count(&self) -> u32 {
        self.timer_count
    }

    /// Whether the colour timer is currently armed.
    #[must_use]
    pub const fn is_timer_armed(&self) -> bool {
        self.timer.is_some()
    }

    /// Starts the actor.
    ///
    /// Records `location` as the movement baseline, arms the repeating colour
    /// timer and returns the base colour to apply to the mesh. A period that
    /// is not a positive finite number leaves the timer disarmed. Returns
    /// `None` if the actor was already started.
    pub fn begin_play(&mut self, location: Vec3) -> Option<LinearRgba> {
        if self.state != GeometryState::Unstarted {
            return None;
        }

        self.initial_location = Some(location);
        self.timer = timer_for_period(self.config.timer_period_secs);
        self.arming_frame = self.timer.is_some();
        self.state = GeometryState::Active;
        Some(self.config.color)
    }

    /// Advances the colour timer by `delta` and returns how many times it fired.
    ///
    /// The first call after [`GeometryActor::begin_play`] belongs to the frame
    /// the timer was armed in; its delta elapsed before arming and is dropped.
    pub fn tick_timer(&mut self, delta: Duration) -> u32 {
        if std::mem::take(&mut self.arming_frame) {
            return 0;
        }
        self.timer
            .as_mut()
            .map_or(0, |timer| timer.tick(delta).times_finished_this_tick())
    }

    /// Handles one fire of the colour timer.
    ///
    /// The counter is incremented first. While it stays within the limit a
    /// fresh random colour is returned; on the fire that exceeds the limit the
    /// timer is disarmed and the actor finishes. Fires on an actor that is not
    /// active are ignored and leave the counter untouched.
    pub fn fire_timer<R: Rng + ?Sized>(&mut self, rng: &mut R) -> TimerOutcome {
        if self.state != GeometryState::Active {
            return TimerOutcome::Ignored;
        }

        self.timer_count = self.timer_count.saturating_add(1);
        if self.timer_count <= self.max_timer_count {
            return TimerOutcome::ColorChanged(random_color(rng));
        }

        self.timer = None;
        self.state = GeometryState::Finished;
        TimerOutcome::Finished
    }

    /// Height the actor should have at `elapsed_secs` of world time.
    ///
    /// Only started sinusoidal actors move; the result is absolute, so the
    /// same elapsed time always yields the same height.
    #[must_use]
    pub fn sinusoidal_height(&self, elapsed_secs: f32) -> Option<f32> {
        let baseline = self.initial_location?;
        match self.config.movement {
            MovementKind::Sinusoidal => Some(
                baseline.z + self.config.amplitude * (self.config.frequency * elapsed_secs).sin(),
            ),
            MovementKind::Static => None,
        }
    }
}

fn timer_for_period(period_secs: f32) -> Option<Timer> {
    if !period_secs.is_finite() || period_secs <= 0.0 {
        return None;
    }

    Duration::try_from_secs_f32(period_secs)
        .ok()
        .map(|period| Timer::new(period, TimerMode::Repeating))
}
