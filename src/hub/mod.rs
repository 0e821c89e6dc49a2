//! The geometry hub: spawns a population of geometry actors once and
//! observes the ones created from its payload list.
//!
//! A hub is an entity carrying [`GeometryHub`]. On the first `Update` after
//! it appears, `spawn_hub_batches` runs three batches in order:
//!
//! 1. [`BATCH_SIZE`] immediate spawns of the hub's class along Y at
//!    [`IMMEDIATE_BATCH_HEIGHT`], each with a random movement kind.
//! 2. [`BATCH_SIZE`] staged spawns of the same class at
//!    [`STAGED_BATCH_HEIGHT`], each with a random colour.
//! 3. One staged spawn per [`SpawnPayload`], subscribed to the actor's
//!    notifications before it is finalised.
//!
//! Only the payload batch is observed; the first two batches run their timers
//! out unobserved and stay in the world.

mod config;
mod handlers;
mod plugin;

pub use config::{ConfigError, HubConfig};
pub use handlers::{on_color_changed, on_timer_finished};
pub use plugin::{spawn_configured_hub, spawn_hub_batches, HubPlugin};

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::components::{GeometryClass, GeometryConfig, Placement};
use crate::constants::BATCH_SPACING;

/// Explicit spawn request seeding one actor of the payload batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SpawnPayload {
    /// Class to spawn; `None` makes the spawn fail.
    pub geometry_class: Option<GeometryClass>,
    /// Configuration injected before the actor starts.
    pub config: GeometryConfig,
    /// Initial placement.
    pub placement: Placement,
}

/// Spawner component driving the three spawn batches.
#[derive(Component, Debug, Clone, PartialEq)]
#[require(HubStats)]
pub struct GeometryHub {
    /// Class used by the two ad-hoc batches; `None` makes those spawns fail.
    pub geometry_class: Option<GeometryClass>,
    /// Explicit spawn requests for the observed batch.
    pub payloads: Vec<SpawnPayload>,
}

impl GeometryHub {
    /// Creates a hub for `geometry_class` with no payloads.
    #[must_use]
    pub const fn new(geometry_class: Option<GeometryClass>) -> Self {
        Self {
            geometry_class,
            payloads: Vec::new(),
        }
    }

    /// Replaces the payload list.
    #[must_use]
    pub fn with_payloads(mut self, payloads: Vec<SpawnPayload>) -> Self {
        self.payloads = payloads;
        self
    }
}

impl Default for GeometryHub {
    fn default() -> Self {
        Self::new(Some(GeometryClass::default()))
    }
}

/// Marker indicating that this hub has run its spawn pass.
#[derive(Component, Reflect, Default, Debug, Clone, Copy, PartialEq, Eq)]
#[reflect(Component, Default)]
pub struct HubSpawned;

/// Counters of what a hub observed from its payload batch.
#[derive(Component, Reflect, Default, Debug, Clone, Copy, PartialEq, Eq)]
#[reflect(Component, Default)]
pub struct HubStats {
    /// Colour changes reported by subscribed actors.
    pub color_changes: u32,
    /// Subscribed actors destroyed after their timer finished.
    pub destroyed: u32,
}

/// Links a payload-spawned actor to the hub observing it.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HubMember {
    /// The observing hub.
    pub hub: Entity,
}

/// Spawn batch of a hub, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpawnBatch {
    /// Immediate spawns with random movement.
    Immediate,
    /// Staged spawns with random colour.
    Staged,
    /// Staged spawns from the payload list.
    Payload,
}

/// Error raised when a hub cannot spawn one of its actors.
#[derive(Event, Debug, Clone, PartialEq, Eq, Error)]
pub enum HubSpawnError {
    /// The batch had no class to spawn.
    #[error("hub {hub} has no geometry class for {batch:?} spawn #{index}")]
    MissingGeometryClass {
        /// Hub that attempted the spawn.
        hub: Entity,
        /// Batch the spawn belonged to.
        batch: SpawnBatch,
        /// Index of the spawn within its batch.
        index: usize,
    },
}

/// Placement of the `index`-th actor of an ad-hoc batch laid out at `height`.
#[expect(
    clippy::cast_precision_loss,
    reason = "Batch indices are tiny and exactly representable in f32."
)]
#[must_use]
pub fn batch_transform(height: f32, index: usize) -> Transform {
    Transform::from_xyz(0.0, BATCH_SPACING * index as f32, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{IMMEDIATE_BATCH_HEIGHT, STAGED_BATCH_HEIGHT};
    use rstest::rstest;

    #[rstest]
    #[case::first_immediate(IMMEDIATE_BATCH_HEIGHT, 0, Vec3::new(0.0, 0.0, 330.0))]
    #[case::last_immediate(IMMEDIATE_BATCH_HEIGHT, 9, Vec3::new(0.0, 2700.0, 330.0))]
    #[case::third_staged(STAGED_BATCH_HEIGHT, 2, Vec3::new(0.0, 600.0, 700.0))]
    fn batch_positions(#[case] height: f32, #[case] index: usize, #[case] expected: Vec3) {
        assert_eq!(batch_transform(height, index).translation, expected);
    }

    #[rstest]
    fn spawn_error_mentions_batch_and_index() {
        let error = HubSpawnError::MissingGeometryClass {
            hub: World::new().spawn_empty().id(),
            batch: SpawnBatch::Staged,
            index: 3,
        };
        let message = error.to_string();
        assert!(message.contains("Staged"), "unexpected message {message}");
        assert!(message.contains("#3"), "unexpected message {message}");
    }

    #[rstest]
    fn payload_defaults_have_no_class() {
        let payload = SpawnPayload::default();
        assert!(payload.geometry_class.is_none());
        assert_eq!(payload.config, GeometryConfig::default());
    }
}
