//! Records geometry notifications in delivery order.

use bevy::ecs::prelude::On;
use bevy::prelude::*;
use geometry_hub::{ColorChanged, TimerFinished};

/// A notification seen by the capture observers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Notification {
    /// An actor changed colour.
    ColorChanged {
        /// Emitting actor.
        entity: Entity,
        /// Colour it changed to.
        color: LinearRgba,
    },
    /// An actor's timer finished.
    TimerFinished {
        /// Emitting actor.
        entity: Entity,
    },
}

impl Notification {
    /// The actor the notification came from.
    #[must_use]
    pub const fn entity(&self) -> Entity {
        match self {
            Self::ColorChanged { entity, .. } | Self::TimerFinished { entity } => *entity,
        }
    }
}

/// Every notification captured so far, oldest first.
#[derive(Resource, Default, Debug)]
pub struct NotificationLog(pub Vec<Notification>);

impl NotificationLog {
    /// Notifications emitted by `entity`, oldest first.
    #[must_use]
    pub fn for_entity(&self, entity: Entity) -> Vec<Notification> {
        self.0
            .iter()
            .copied()
            .filter(|n| n.entity() == entity)
            .collect()
    }

    /// Number of colour changes emitted by `entity`.
    #[must_use]
    pub fn color_changes(&self, entity: Entity) -> usize {
        self.0
            .iter()
            .filter(|n| matches!(n, Notification::ColorChanged { entity: e, .. } if *e == entity))
            .count()
    }

    /// Number of timer-finished notifications emitted by `entity`.
    #[must_use]
    pub fn finishes(&self, entity: Entity) -> usize {
        self.0
            .iter()
            .filter(|n| matches!(n, Notification::TimerFinished { entity: e } if *e == entity))
            .count()
    }
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must take On<T> by value."
)]
fn record_color_changed(event: On<ColorChanged>, mut log: ResMut<NotificationLog>) {
    let ColorChanged { entity, color, .. } = event.event();
    log.0.push(Notification::ColorChanged {
        entity: *entity,
        color: *color,
    });
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must take On<T> by value."
)]
fn record_timer_finished(event: On<TimerFinished>, mut log: ResMut<NotificationLog>) {
    log.0.push(Notification::TimerFinished {
        entity: event.event().entity,
    });
}

/// Installs global observers recording every notification into
/// [`NotificationLog`].
pub fn install_notification_capture(app: &mut App) {
    app.insert_resource(NotificationLog::default());
    app.world_mut().add_observer(record_color_changed);
    app.world_mut().add_observer(record_timer_finished);
}
