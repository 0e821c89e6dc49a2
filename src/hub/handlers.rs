//! Observers a hub attaches to the actors of its payload batch.

use bevy::ecs::prelude::On;
use bevy::prelude::*;
use log::info;

use super::{HubMember, HubStats};
use crate::geometry::{actor_name, ColorChanged, GeometryActor, TimerFinished};
use crate::logging::HUB_LOG_TARGET;

fn bump_stats(
    stats: &mut Query<&mut HubStats>,
    member: Option<&HubMember>,
    bump: impl FnOnce(&mut HubStats),
) {
    let Some(member) = member else {
        return;
    };
    if let Ok(mut hub_stats) = stats.get_mut(member.hub) {
        bump(&mut hub_stats);
    }
}

/// Logs a subscribed actor's new colour.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value for Events V2."
)]
pub fn on_color_changed(
    event: On<ColorChanged>,
    members: Query<&HubMember>,
    mut stats: Query<&mut HubStats>,
) {
    let ColorChanged {
        entity,
        color,
        name,
    } = event.event();
    info!(target: HUB_LOG_TARGET, "Actor name: {name}, colour: {color:?}");
    bump_stats(&mut stats, members.get(*entity).ok(), |s| {
        s.color_changes = s.color_changes.saturating_add(1);
    });
}

/// Destroys a subscribed actor once its timer has finished.
///
/// Targets that are no longer geometry actors are ignored.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value for Events V2."
)]
pub fn on_timer_finished(
    event: On<TimerFinished>,
    mut commands: Commands,
    geometries: Query<(&GeometryActor, Option<&Name>, Option<&HubMember>)>,
    mut stats: Query<&mut HubStats>,
) {
    let entity = event.event().entity;
    let Ok((actor, name, member)) = geometries.get(entity) else {
        return;
    };
    info!(
        target: HUB_LOG_TARGET,
        "Destroying {} (amplitude {:.1})",
        actor_name(entity, name),
        actor.config().amplitude
    );
    commands.entity(entity).despawn();
    bump_stats(&mut stats, member, |s| {
        s.destroyed = s.destroyed.saturating_add(1);
    });
}
