//! Hub spawn pass and the plugin installing it.

use bevy::ecs::prelude::On;
use bevy::prelude::*;
use log::{debug, info, warn};

use super::handlers::{on_color_changed, on_timer_finished};
use super::{
    batch_transform, GeometryHub, HubConfig, HubMember, HubSpawnError, HubSpawned, HubStats,
    SpawnBatch,
};
use crate::components::GeometryConfig;
use crate::constants::{BATCH_SIZE, IMMEDIATE_BATCH_HEIGHT, STAGED_BATCH_HEIGHT};
use crate::geometry::{GeometryPlugin, GeometrySystems};
use crate::logging::HUB_LOG_TARGET;
use crate::rng::GeometryRng;
use crate::spawn::{spawn_deferred, spawn_immediate};

/// Runs the three spawn batches of every hub that has not spawned yet.
///
/// Each hub spawns once; afterwards it carries [`HubSpawned`]. Both ad-hoc
/// batches configure their actors from [`GeometryConfig::default`] with one
/// random field, whatever the class defaults are. Spawns with no class are
/// skipped and reported as [`HubSpawnError`].
pub fn spawn_hub_batches(
    mut commands: Commands,
    mut rng: ResMut<GeometryRng>,
    hubs: Query<(Entity, &GeometryHub), Without<HubSpawned>>,
) {
    for (hub, spawner) in &hubs {
        let class = spawner.geometry_class.as_ref();
        let mut spawned = 0_usize;

        for index in 0..BATCH_SIZE {
            let movement = rng.movement();
            let transform = batch_transform(IMMEDIATE_BATCH_HEIGHT, index);
            let entity = spawn_immediate(&mut commands, class, transform, |actor| {
                actor.set_config(GeometryConfig {
                    movement,
                    ..GeometryConfig::default()
                });
            });
            spawned += report_spawn(&mut commands, hub, SpawnBatch::Immediate, index, entity);
        }

        for index in 0..BATCH_SIZE {
            let transform = batch_transform(STAGED_BATCH_HEIGHT, index);
            let entity = spawn_deferred(&mut commands, class, transform).map(|deferred| {
                deferred
                    .with_config(GeometryConfig {
                        color: rng.color(),
                        ..GeometryConfig::default()
                    })
                    .finish()
            });
            spawned += report_spawn(&mut commands, hub, SpawnBatch::Staged, index, entity);
        }

        for (index, payload) in spawner.payloads.iter().enumerate() {
            let entity = spawn_deferred(
                &mut commands,
                payload.geometry_class.as_ref(),
                payload.placement.into(),
            )
            .map(|deferred| {
                deferred
                    .with_config(payload.config)
                    .observe(on_color_changed)
                    .observe(on_timer_finished)
                    .insert(HubMember { hub })
                    .finish()
            });
            spawned += report_spawn(&mut commands, hub, SpawnBatch::Payload, index, entity);
        }

        info!(target: HUB_LOG_TARGET, "Hub {hub} spawned {spawned} geometry actors");
        commands.entity(hub).insert(HubSpawned);
    }
}

fn report_spawn(
    commands: &mut Commands,
    hub: Entity,
    batch: SpawnBatch,
    index: usize,
    entity: Option<Entity>,
) -> usize {
    if let Some(entity) = entity {
        debug!(target: HUB_LOG_TARGET, "{batch:?} spawn #{index} is {entity}");
        1
    } else {
        commands.trigger(HubSpawnError::MissingGeometryClass { hub, batch, index });
        0
    }
}

/// Spawns a hub from the [`HubConfig`] resource, if one is present.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy system parameters use `Res<T>` by value."
)]
pub fn spawn_configured_hub(mut commands: Commands, config: Option<Res<HubConfig>>) {
    let Some(config) = config else {
        return;
    };
    let hub = commands
        .spawn((config.clone().into_hub(), Name::new("GeometryHub")))
        .id();
    info!(target: HUB_LOG_TARGET, "Spawned hub {hub} from configuration");
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value for Events V2."
)]
fn log_spawn_error(event: On<HubSpawnError>) {
    warn!(target: HUB_LOG_TARGET, "{}", event.event());
}

/// Plugin installing the hub spawn pass on top of [`GeometryPlugin`].
#[derive(Debug, Default)]
pub struct HubPlugin;

impl Plugin for HubPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<GeometryPlugin>() {
            app.add_plugins(GeometryPlugin);
        }
        app.register_type::<HubStats>()
            .register_type::<HubSpawned>();
        app.add_observer(log_spawn_error);
        app.add_systems(Startup, spawn_configured_hub);
        app.add_systems(Update, spawn_hub_batches.in_set(GeometrySystems::Spawn));
    }
}
