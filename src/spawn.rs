//! Object factory for geometry actors.
//!
//! Two construction strategies are offered:
//!
//! - [`spawn_immediate`] creates and starts the actor in one step. The start
//!   runs with the class defaults, and only afterwards can the caller adjust
//!   the actor, so an injected colour or timer period has no effect on a
//!   started actor.
//! - [`spawn_deferred`] reserves the actor and returns a [`DeferredGeometry`]
//!   builder. Configuration and subscriptions happen on the builder, and
//!   [`DeferredGeometry::finish`] hands the actor to `begin_play_system`,
//!   which starts it later in the same frame.
//!
//! Both return `None` when no class is given, mirroring a spawn request
//! without a valid actor kind.

use bevy::ecs::system::IntoObserverSystem;
use bevy::prelude::*;

use crate::components::{GeometryClass, GeometryConfig, GeometryMesh};
use crate::geometry::{start_actor, GeometryActor};

fn spawned_name(class: &GeometryClass, entity: Entity) -> Name {
    Name::new(format!("{}_{}", class.name, entity.index()))
}

/// Spawns an actor of `class` at `transform`, starts it, then lets `configure`
/// adjust the started actor before it enters the world.
///
/// Returns the new entity, or `None` if `class` is `None`.
///
/// # Examples
///
/// ```
/// use bevy::ecs::system::RunSystemOnce;
/// use bevy::prelude::*;
/// use geometry_hub::components::{GeometryClass, MovementKind};
/// use geometry_hub::geometry::{GeometryActor, GeometryState};
/// use geometry_hub::spawn::spawn_immediate;
///
/// let mut world = World::new();
/// let class = GeometryClass::default();
/// let spawned = world
///     .run_system_once(move |mut commands: Commands| {
///         spawn_immediate(&mut commands, Some(&class), Transform::default(), |actor| {
///             let mut config = *actor.config();
///             config.movement = MovementKind::Sinusoidal;
///             actor.set_config(config);
///         })
///     })
///     .unwrap_or_else(|e| panic!("{e}"));
///
/// let entity = spawned.unwrap_or_else(|| panic!("class was given"));
/// let actor = world.get::<GeometryActor>(entity).unwrap_or_else(|| panic!("actor missing"));
/// assert_eq!(actor.state(), GeometryState::Active);
/// assert_eq!(actor.config().movement, MovementKind::Sinusoidal);
/// ```
pub fn spawn_immediate(
    commands: &mut Commands,
    class: Option<&GeometryClass>,
    transform: Transform,
    configure: impl FnOnce(&mut GeometryActor),
) -> Option<Entity> {
    let class = class?;
    let mut entity = commands.spawn_empty();
    let name = spawned_name(class, entity.id());

    let mut actor = GeometryActor::new(class.defaults);
    let mut mesh = class.mesh.map(GeometryMesh::new);
    start_actor(&mut actor, &transform, name.as_str(), mesh.as_mut());
    configure(&mut actor);

    entity.insert((actor, transform, name));
    if let Some(mesh) = mesh {
        entity.insert(mesh);
    }
    Some(entity.id())
}

/// Reserves an actor of `class` at `transform` without starting it.
///
/// Returns `None` if `class` is `None`.
pub fn spawn_deferred<'a>(
    commands: &'a mut Commands,
    class: Option<&GeometryClass>,
    transform: Transform,
) -> Option<DeferredGeometry<'a>> {
    let class = class?;
    let entity = commands.spawn_empty();
    let name = spawned_name(class, entity.id());
    Some(DeferredGeometry {
        entity,
        config: class.defaults,
        mesh: class.mesh.map(GeometryMesh::new),
        transform,
        name,
    })
}

/// A reserved actor awaiting configuration and [`DeferredGeometry::finish`].
///
/// Dropping the builder without finishing leaves an empty entity behind.
pub struct DeferredGeometry<'a> {
    entity: EntityCommands<'a>,
    config: GeometryConfig,
    mesh: Option<GeometryMesh>,
    transform: Transform,
    name: Name,
}

impl DeferredGeometry<'_> {
    /// Entity reserved for the actor.
    #[must_use]
    pub fn id(&self) -> Entity {
        self.entity.id()
    }

    /// Name the actor will carry.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Replaces the configuration the actor will start with.
    #[must_use]
    pub const fn with_config(mut self, config: GeometryConfig) -> Self {
        self.config = config;
        self
    }

    /// Subscribes `observer` to notifications of this actor.
    ///
    /// Subscriptions made here exist before the actor starts, so no
    /// notification can be missed.
    #[must_use]
    pub fn observe<E, B, M>(mut self, observer: impl IntoObserverSystem<E, B, M>) -> Self
    where
        E: EntityEvent,
        B: Bundle,
    {
        self.entity.observe(observer);
        self
    }

    /// Adds extra components to the actor.
    #[must_use]
    pub fn insert(mut self, bundle: impl Bundle) -> Self {
        self.entity.insert(bundle);
        self
    }

    /// Finalises the actor; it starts during the next `BeginPlay` stage.
    pub fn finish(self) -> Entity {
        let Self {
            mut entity,
            config,
            mesh,
            transform,
            name,
        } = self;
        entity.insert((GeometryActor::new(config), transform, name));
        if let Some(mesh) = mesh {
            entity.insert(mesh);
        }
        entity.id()
    }
}
