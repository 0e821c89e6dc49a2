//! Bevy plugin wiring the geometry systems into the schedule.

use bevy::prelude::*;

use super::actor::{GeometryActor, GeometryState};
use super::systems::{begin_play_system, move_geometry_system, tick_color_timers_system};
use crate::components::{GeometryConfig, GeometryMesh, MeshShape, MovementKind};
use crate::rng::GeometryRng;

/// Ordered stages of a frame in `Update`.
///
/// Spawning happens first so that actors finalised this frame are started,
/// ticked and moved in the same frame.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometrySystems {
    /// Actor creation, e.g. the hub's spawn pass.
    Spawn,
    /// Starting actors that were finalised.
    BeginPlay,
    /// Colour timers and their notifications.
    Timers,
    /// Per-frame movement.
    Movement,
}

/// Plugin installing geometry actor systems.
///
/// Requires `Time`, normally provided by `MinimalPlugins`. Inserts a
/// [`GeometryRng`] unless one is already present.
#[derive(Debug, Default)]
pub struct GeometryPlugin;

impl Plugin for GeometryPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<GeometryActor>()
            .register_type::<GeometryState>()
            .register_type::<GeometryMesh>()
            .register_type::<GeometryConfig>()
            .register_type::<MovementKind>()
            .register_type::<MeshShape>();
        app.init_resource::<GeometryRng>();
        app.configure_sets(
            Update,
            (
                GeometrySystems::Spawn,
                GeometrySystems::BeginPlay,
                GeometrySystems::Timers,
                GeometrySystems::Movement,
            )
                .chain(),
        );
        app.add_systems(
            Update,
            (
                begin_play_system.in_set(GeometrySystems::BeginPlay),
                tick_color_timers_system.in_set(GeometrySystems::Timers),
                move_geometry_system.in_set(GeometrySystems::Movement),
            ),
        );
    }
}
