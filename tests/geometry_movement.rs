//! Integration tests for sinusoidal movement of geometry actors.

use approx::assert_relative_eq;
use bevy::prelude::*;
use geometry_hub::components::{GeometryConfig, MovementKind};
use rstest::rstest;
use test_utils::{headless_app, spawn_actor, step_frames, DEFAULT_STEP};

fn translation(app: &App, entity: Entity) -> Vec3 {
    app.world()
        .get::<Transform>(entity)
        .map(|t| t.translation)
        .unwrap_or_else(|| panic!("transform missing on {entity}"))
}

fn elapsed(app: &App) -> f32 {
    app.world().resource::<Time>().elapsed_secs()
}

#[rstest]
#[case::default_wave(50.0, 2.0)]
#[case::slow_wide_wave(120.0, 0.5)]
#[case::inverted_wave(-30.0, 3.0)]
fn sinusoidal_actor_follows_the_wave(#[case] amplitude: f32, #[case] frequency: f32) {
    let mut app = headless_app(DEFAULT_STEP, 3);
    let start = Vec3::new(10.0, 20.0, 330.0);
    let entity = spawn_actor(
        &mut app,
        GeometryConfig {
            amplitude,
            frequency,
            movement: MovementKind::Sinusoidal,
            ..GeometryConfig::default()
        },
        Transform::from_translation(start),
    );

    for _ in 0..25 {
        step_frames(&mut app, 1);
        let t = elapsed(&app);
        let position = translation(&app, entity);
        assert_relative_eq!(
            position.z,
            start.z + amplitude * (frequency * t).sin(),
            epsilon = 1e-3
        );
        assert_relative_eq!(position.x, start.x);
        assert_relative_eq!(position.y, start.y);
    }
}

#[rstest]
fn static_actor_never_moves() {
    let mut app = headless_app(DEFAULT_STEP, 3);
    let start = Vec3::new(0.0, 600.0, 700.0);
    let entity = spawn_actor(
        &mut app,
        GeometryConfig::default(),
        Transform::from_translation(start),
    );
    step_frames(&mut app, 40);
    assert_eq!(translation(&app, entity), start);
}

#[rstest]
fn zero_amplitude_holds_the_baseline() {
    let mut app = headless_app(DEFAULT_STEP, 3);
    let start = Vec3::new(0.0, 0.0, 330.0);
    let entity = spawn_actor(
        &mut app,
        GeometryConfig {
            amplitude: 0.0,
            movement: MovementKind::Sinusoidal,
            ..GeometryConfig::default()
        },
        Transform::from_translation(start),
    );
    step_frames(&mut app, 12);
    assert_relative_eq!(translation(&app, entity).z, start.z);
}

#[rstest]
fn unstarted_actor_does_not_move() {
    let mut app = headless_app(DEFAULT_STEP, 3);
    step_frames(&mut app, 5);
    let start = Vec3::new(0.0, 0.0, 100.0);
    let entity = app
        .world_mut()
        .spawn((
            geometry_hub::GeometryActor::new(GeometryConfig {
                movement: MovementKind::Sinusoidal,
                ..GeometryConfig::default()
            }),
            Transform::from_translation(start),
        ))
        .id();
    app.world_mut()
        .run_system_cached(geometry_hub::geometry::move_geometry_system)
        .unwrap_or_else(|e| panic!("movement system failed: {e}"));
    assert_eq!(translation(&app, entity), start);
}

#[rstest]
fn movement_uses_time_since_the_clock_started() {
    let mut app = headless_app(DEFAULT_STEP, 3);
    step_frames(&mut app, 11);
    let start = Vec3::new(0.0, 0.0, 0.0);
    let entity = spawn_actor(
        &mut app,
        GeometryConfig {
            movement: MovementKind::Sinusoidal,
            ..GeometryConfig::default()
        },
        Transform::from_translation(start),
    );
    step_frames(&mut app, 1);
    let t = elapsed(&app);
    assert!(t > 1.0, "clock should have advanced, got {t}");
    assert_relative_eq!(translation(&app, entity).z, 50.0 * (2.0 * t).sin(), epsilon = 1e-3);
}
