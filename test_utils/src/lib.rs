//! Utility helpers for tests.
//!
//! Integration tests drive a headless `App` whose virtual clock advances by a
//! fixed step per update, so timer fires land on predictable frames.

mod notifications;

pub use notifications::{install_notification_capture, Notification, NotificationLog};

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use geometry_hub::components::{GeometryConfig, GeometryMesh, MeshShape};
use geometry_hub::{GeometryActor, GeometryRng, HubPlugin};

/// Frame step used by most tests.
pub const DEFAULT_STEP: Duration = Duration::from_millis(100);

/// Builds a headless app running the hub and geometry systems.
///
/// Each update advances virtual time by `step`. The very first update only
/// starts the clock and sees a zero delta.
#[must_use]
pub fn headless_app(step: Duration, seed: u64) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(GeometryRng::seeded(seed));
    app.add_plugins(HubPlugin);
    app.insert_resource(TimeUpdateStrategy::ManualDuration(step));
    app.world_mut()
        .resource_mut::<Time<Virtual>>()
        .set_max_delta(step.max(Duration::from_millis(250)));
    app.finish();
    app.cleanup();
    app
}

/// Runs `frames` updates.
pub fn step_frames(app: &mut App, frames: u32) {
    for _ in 0..frames {
        app.update();
    }
}

/// Runs updates until virtual time has advanced by at least `secs` since the
/// clock started, counting the clock-starting update.
///
/// # Panics
/// Panics if the app does not use [`TimeUpdateStrategy::ManualDuration`] or
/// `secs` is negative.
pub fn run_for_secs(app: &mut App, secs: f32) {
    let Some(TimeUpdateStrategy::ManualDuration(step)) =
        app.world().get_resource::<TimeUpdateStrategy>()
    else {
        panic!("run_for_secs needs a manual time step");
    };
    let total = Duration::from_secs_f32(secs).as_nanos();
    let frames = u32::try_from(total.div_ceil(step.as_nanos()))
        .unwrap_or_else(|_| panic!("{secs}s is too many frames"));
    step_frames(app, frames + 1);
}

/// Spawns an unstarted actor with a cube mesh; it starts on the next update.
pub fn spawn_actor(app: &mut App, config: GeometryConfig, transform: Transform) -> Entity {
    app.world_mut()
        .spawn((
            GeometryActor::new(config),
            transform,
            GeometryMesh::new(MeshShape::Cube),
        ))
        .id()
}

/// Returns a copy of the actor component on `entity`, if it still exists.
#[must_use]
pub fn actor(app: &App, entity: Entity) -> Option<GeometryActor> {
    app.world().get::<GeometryActor>(entity).cloned()
}

/// Counts the geometry actors currently alive.
pub fn actor_count(app: &mut App) -> usize {
    let world = app.world_mut();
    world.query::<&GeometryActor>().iter(world).count()
}
