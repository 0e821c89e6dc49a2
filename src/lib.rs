#![cfg_attr(docsrs, feature(doc_cfg))]
//! Library crate for a small geometry playground on Bevy ECS.
//!
//! Geometry actors recolour themselves on a repeating timer and optionally
//! oscillate vertically; a hub spawns three batches of them and reacts to the
//! notifications of the ones it subscribed to. Re-exports the components,
//! systems and plugins used by the `geometry-hub` binary and the tests.
pub mod components;
pub mod constants;
pub mod geometry;
pub mod hub;
pub mod logging;
pub mod rng;
pub mod spawn;
pub use constants::*;

// Re-export commonly used items
pub use components::{
    GeometryClass, GeometryConfig, GeometryMesh, MeshShape, MovementKind, Placement, Rotator,
};
pub use geometry::{
    ColorChanged, GeometryActor, GeometryPlugin, GeometryState, GeometrySystems, TimerFinished,
    TimerOutcome,
};
pub use hub::{
    ConfigError, GeometryHub, HubConfig, HubMember, HubPlugin, HubSpawnError, HubSpawned,
    HubStats, SpawnBatch, SpawnPayload,
};
pub use logging::init as init_logging;
pub use rng::GeometryRng;
pub use spawn::{spawn_deferred, spawn_immediate, DeferredGeometry};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use bevy::prelude::*;
    //! use geometry_hub::prelude::*;
    //!
    //! let mut app = App::new();
    //! app.add_plugins((MinimalPlugins, HubPlugin));
    //! app.world_mut().spawn(GeometryHub::default());
    //! app.update();
    //! ```

    pub use crate::components::{GeometryClass, GeometryConfig, MovementKind, Placement};
    pub use crate::geometry::{ColorChanged, GeometryActor, GeometryPlugin, TimerFinished};
    pub use crate::hub::{GeometryHub, HubConfig, HubPlugin, HubStats, SpawnPayload};
    pub use crate::rng::GeometryRng;
}
