//! Geometry actors: configuration-driven world objects that recolour
//! themselves on a repeating timer and optionally bob up and down.
//!
//! This module re-exports the actor component, its notifications, the
//! per-frame systems and the plugin installing them.

mod actor;
mod events;
mod plugin;
mod systems;

pub use actor::{GeometryActor, GeometryState, TimerOutcome};
pub use events::{ColorChanged, TimerFinished};
pub use plugin::{GeometryPlugin, GeometrySystems};
pub use systems::{begin_play_system, move_geometry_system, tick_color_timers_system};

pub(crate) use systems::{actor_name, start_actor};
