//! Per-frame systems driving geometry actors: start, colour timer and movement.

use bevy::prelude::*;
use log::{debug, info, warn};

use super::actor::{GeometryActor, GeometryState, TimerOutcome};
use super::events::{ColorChanged, TimerFinished};
use crate::components::GeometryMesh;
use crate::logging::GEOMETRY_LOG_TARGET;
use crate::rng::GeometryRng;

/// Display name of an actor, falling back to the entity id.
pub(crate) fn actor_name(entity: Entity, name: Option<&Name>) -> String {
    name.map_or_else(|| entity.to_string(), |n| n.as_str().to_owned())
}

/// Starts `actor` at `transform` and applies its base colour to `mesh`.
///
/// A missing mesh skips the colour silently. Already started actors are left
/// untouched.
pub(crate) fn start_actor(
    actor: &mut GeometryActor,
    transform: &Transform,
    name: &str,
    mesh: Option<&mut GeometryMesh>,
) {
    let Some(color) = actor.begin_play(transform.translation) else {
        return;
    };

    let (yaw, pitch, roll) = transform.rotation.to_euler(EulerRot::ZYX);
    debug!(
        target: GEOMETRY_LOG_TARGET,
        "Actor {name} started: location {}, rotation (pitch {:.1}, yaw {:.1}, roll {:.1}), scale {}",
        transform.translation,
        pitch.to_degrees(),
        yaw.to_degrees(),
        roll.to_degrees(),
        transform.scale
    );

    if let Some(mesh) = mesh {
        mesh.set_color(color);
    }
}

/// Starts every actor that was finalised since the last run.
///
/// Immediately spawned actors are already active when they enter the world
/// and are skipped here.
pub fn begin_play_system(
    mut actors: Query<
        (
            Entity,
            &mut GeometryActor,
            &Transform,
            Option<&Name>,
            Option<&mut GeometryMesh>,
        ),
        Added<GeometryActor>,
    >,
) {
    for (entity, mut actor, transform, name, mesh) in &mut actors {
        if actor.state() != GeometryState::Unstarted {
            continue;
        }
        let name = actor_name(entity, name);
        start_actor(&mut actor, transform, &name, mesh.map(Mut::into_inner));
    }
}

/// Advances every armed colour timer by the frame delta and handles each fire.
///
/// A frame longer than the timer period handles every fire that elapsed,
/// stopping at the fire that finishes the actor.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy system parameters use `Res<T>` by value."
)]
pub fn tick_color_timers_system(
    mut commands: Commands,
    time: Res<Time>,
    mut rng: ResMut<GeometryRng>,
    mut actors: Query<(
        Entity,
        &mut GeometryActor,
        Option<&Name>,
        Option<&mut GeometryMesh>,
    )>,
) {
    let delta = time.delta();
    for (entity, mut actor, name, mut mesh) in &mut actors {
        let fires = actor.tick_timer(delta);
        for _ in 0..fires {
            match actor.fire_timer(&mut *rng) {
                TimerOutcome::ColorChanged(color) => {
                    info!(
                        target: GEOMETRY_LOG_TARGET,
                        "TimerCount: {}, colour to set up: {color:?}",
                        actor.timer_count()
                    );
                    if let Some(mesh) = mesh.as_mut() {
                        mesh.set_color(color);
                    }
                    commands.trigger(ColorChanged {
                        entity,
                        color,
                        name: actor_name(entity, name),
                    });
                }
                TimerOutcome::Finished => {
                    warn!(
                        target: GEOMETRY_LOG_TARGET,
                        "Timer of {} has been stopped",
                        actor_name(entity, name)
                    );
                    commands.trigger(TimerFinished { entity });
                    break;
                }
                TimerOutcome::Ignored => break,
            }
        }
    }
}

/// Moves sinusoidal actors to their height for the current world time.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy system parameters use `Res<T>` by value."
)]
pub fn move_geometry_system(
    time: Res<Time>,
    mut actors: Query<(&GeometryActor, &mut Transform)>,
) {
    let elapsed = time.elapsed_secs();
    for (actor, mut transform) in &mut actors {
        if let Some(height) = actor.sinusoidal_height(elapsed) {
            transform.translation.z = height;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{GeometryConfig, MeshShape};
    use bevy::ecs::system::RunSystemOnce;
    use rstest::rstest;

    #[rstest]
    fn start_actor_applies_colour_to_mesh() {
        let mut actor = GeometryActor::new(GeometryConfig {
            color: LinearRgba::BLUE,
            ..GeometryConfig::default()
        });
        let mut mesh = GeometryMesh::new(MeshShape::Cone);
        start_actor(
            &mut actor,
            &Transform::from_xyz(1.0, 2.0, 3.0),
            "cone",
            Some(&mut mesh),
        );
        assert_eq!(mesh.color, Some(LinearRgba::BLUE));
        assert_eq!(actor.initial_location(), Some(Vec3::new(1.0, 2.0, 3.0)));
    }

    #[rstest]
    fn start_actor_without_mesh_still_starts() {
        let mut actor = GeometryActor::new(GeometryConfig::default());
        start_actor(&mut actor, &Transform::IDENTITY, "meshless", None);
        assert_eq!(actor.state(), GeometryState::Active);
    }

    #[rstest]
    fn names_fall_back_to_entity() {
        let entity = World::new().spawn_empty().id();
        assert_eq!(actor_name(entity, Some(&Name::new("Cube_1"))), "Cube_1");
        assert_eq!(actor_name(entity, None), entity.to_string());
    }

    #[rstest]
    fn begin_play_system_starts_finalised_actors() {
        let mut world = World::new();
        let entity = world
            .spawn((
                GeometryActor::new(GeometryConfig::default()),
                Transform::from_xyz(0.0, 0.0, 700.0),
                GeometryMesh::new(MeshShape::Cube),
            ))
            .id();

        world
            .run_system_once(begin_play_system)
            .unwrap_or_else(|e| panic!("system should run: {e}"));

        let actor = world
            .get::<GeometryActor>(entity)
            .unwrap_or_else(|| panic!("actor component missing"));
        assert_eq!(actor.state(), GeometryState::Active);
        assert_eq!(
            world.get::<GeometryMesh>(entity).and_then(|m| m.color),
            Some(LinearRgba::BLACK)
        );
    }
}
