//! Shared fixture for hub behavioural tests.
//!
//! Owns a headless app with one hub and the notification capture installed,
//! and exposes the queries the scenarios assert on.

use std::sync::MutexGuard;

use bevy::prelude::*;
use geometry_hub::components::{GeometryClass, GeometryConfig, Placement};
use geometry_hub::{GeometryActor, GeometryHub, GeometryState, HubMember, HubStats, SpawnPayload};
use test_utils::{
    headless_app, install_notification_capture, Notification, NotificationLog, DEFAULT_STEP,
};

use crate::thread_safe_app::{lock_app, share, SharedApp, ThreadSafeApp};

/// Updates per second of virtual time at [`DEFAULT_STEP`].
pub const FRAMES_PER_SEC: u32 = 10;

/// A hub app shared across the examples of one suite.
#[derive(Debug, Clone)]
pub struct HubFixture {
    app: SharedApp,
    hub: Entity,
}

impl HubFixture {
    /// Builds an app whose hub subscribes to one payload actor per period.
    pub fn with_payload_periods(periods: &[f32]) -> Self {
        let mut app = headless_app(DEFAULT_STEP, 17);
        install_notification_capture(&mut app);
        let payloads = periods
            .iter()
            .enumerate()
            .map(|(i, period)| SpawnPayload {
                geometry_class: Some(GeometryClass::new(format!("Payload{i}"))),
                config: GeometryConfig {
                    timer_period_secs: *period,
                    ..GeometryConfig::default()
                },
                placement: Placement::at(Vec3::new(-800.0, 300.0 * i as f32, 400.0)),
            })
            .collect();
        let hub = app
            .world_mut()
            .spawn(GeometryHub::default().with_payloads(payloads))
            .id();
        Self {
            app: share(app),
            hub,
        }
    }

    fn app_guard(&self) -> MutexGuard<'_, ThreadSafeApp> {
        lock_app(&self.app)
    }

    /// Advances the app by `frames` updates.
    pub fn tick(&self, frames: u32) {
        let mut app = self.app_guard();
        for _ in 0..frames {
            app.update();
        }
    }

    /// Advances the app by whole seconds of virtual time.
    pub fn run_secs(&self, secs: u32) {
        self.tick(secs * FRAMES_PER_SEC);
    }

    /// Counters of the fixture's hub.
    pub fn stats(&self) -> HubStats {
        let app = self.app_guard();
        app.world()
            .get::<HubStats>(self.hub)
            .copied()
            .unwrap_or_default()
    }

    /// Payload actors still alive.
    pub fn members(&self) -> Vec<Entity> {
        let mut app = self.app_guard();
        let world = app.world_mut();
        world
            .query_filtered::<Entity, With<HubMember>>()
            .iter(world)
            .collect()
    }

    /// States of the actors the hub does not observe.
    pub fn unobserved_states(&self) -> Vec<GeometryState> {
        let mut app = self.app_guard();
        let world = app.world_mut();
        world
            .query_filtered::<&GeometryActor, Without<HubMember>>()
            .iter(world)
            .map(GeometryActor::state)
            .collect()
    }

    fn emitters(log: &NotificationLog) -> Vec<Entity> {
        let mut emitters: Vec<Entity> = log.0.iter().map(Notification::entity).collect();
        emitters.sort();
        emitters.dedup();
        emitters
    }

    /// Finished notifications seen so far, per emitting entity.
    pub fn finish_counts(&self) -> Vec<usize> {
        let app = self.app_guard();
        let log = app.world().resource::<NotificationLog>();
        Self::emitters(log)
            .into_iter()
            .map(|e| log.finishes(e))
            .collect()
    }

    /// Whether every finished emitter fell silent after its finish.
    pub fn finishes_are_last(&self) -> bool {
        let app = self.app_guard();
        let log = app.world().resource::<NotificationLog>();
        Self::emitters(log).into_iter().all(|e| {
            log.finishes(e) == 0
                || matches!(
                    log.for_entity(e).last(),
                    Some(Notification::TimerFinished { .. })
                )
        })
    }
}
