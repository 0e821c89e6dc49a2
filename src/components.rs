//! Value types and ECS components describing geometry actors.
//! Includes the per-actor configuration record, mesh state, actor classes and
//! serialisable placements used by spawn payloads.
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_AMPLITUDE, DEFAULT_CLASS_NAME, DEFAULT_FREQUENCY, DEFAULT_TIMER_PERIOD_SECS,
};

/// Per-frame position update policy of a geometry actor.
#[derive(
    Reflect, Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MovementKind {
    /// Oscillates vertically around the start location.
    Sinusoidal,
    /// Never moves on its own.
    #[default]
    Static,
}

/// Configuration record copied into each actor.
///
/// Values are taken literally: negative amplitudes, negative frequencies and
/// non-positive timer periods are all accepted.
#[derive(Reflect, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryConfig {
    /// Oscillation amplitude in world units.
    pub amplitude: f32,
    /// Oscillation frequency in radians per second.
    pub frequency: f32,
    /// Movement policy.
    pub movement: MovementKind,
    /// Colour applied when the actor starts.
    pub color: LinearRgba,
    /// Period of the colour timer in seconds.
    pub timer_period_secs: f32,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            amplitude: DEFAULT_AMPLITUDE,
            frequency: DEFAULT_FREQUENCY,
            movement: MovementKind::Static,
            color: LinearRgba::BLACK,
            timer_period_secs: DEFAULT_TIMER_PERIOD_SECS,
        }
    }
}

/// Shape of the mesh an actor class renders with.
#[derive(
    Reflect, Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MeshShape {
    /// Unit cube.
    #[default]
    Cube,
    /// Unit sphere.
    Sphere,
    /// Unit cylinder.
    Cylinder,
    /// Unit cone.
    Cone,
}

/// Mesh attached to a geometry actor together with its dynamic material colour.
#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq)]
#[reflect(Component)]
pub struct GeometryMesh {
    /// Rendered shape.
    pub shape: MeshShape,
    /// Colour parameter of the dynamic material; `None` until first applied.
    pub color: Option<LinearRgba>,
}

impl GeometryMesh {
    /// Creates a mesh with no material colour applied yet.
    #[must_use]
    pub const fn new(shape: MeshShape) -> Self {
        Self { shape, color: None }
    }

    /// Sets the material colour parameter.
    pub const fn set_color(&mut self, color: LinearRgba) {
        self.color = Some(color);
    }
}

/// A spawnable kind of geometry actor.
///
/// Classes carry their own configuration defaults. An actor starts from these
/// defaults and only sees an injected [`GeometryConfig`] once it is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryClass {
    /// Prefix of the names given to spawned actors.
    pub name: String,
    /// Mesh shape, or `None` for a class without a mesh.
    pub mesh: Option<MeshShape>,
    /// Configuration an actor of this class starts with.
    pub defaults: GeometryConfig,
}

impl GeometryClass {
    /// Creates a class with a cube mesh and default configuration.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Replaces the mesh shape.
    #[must_use]
    pub fn with_mesh(mut self, mesh: Option<MeshShape>) -> Self {
        self.mesh = mesh;
        self
    }

    /// Replaces the class-level configuration defaults.
    #[must_use]
    pub const fn with_defaults(mut self, defaults: GeometryConfig) -> Self {
        self.defaults = defaults;
        self
    }
}

impl Default for GeometryClass {
    fn default() -> Self {
        Self {
            name: DEFAULT_CLASS_NAME.to_owned(),
            mesh: Some(MeshShape::Cube),
            defaults: GeometryConfig::default(),
        }
    }
}

/// Orientation in degrees around the Y (pitch), Z (yaw) and X (roll) axes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rotator {
    /// Rotation around the Y axis in degrees.
    pub pitch: f32,
    /// Rotation around the Z (up) axis in degrees.
    pub yaw: f32,
    /// Rotation around the X axis in degrees.
    pub roll: f32,
}

impl Rotator {
    /// The identity rotation.
    pub const ZERO: Self = Self {
        pitch: 0.0,
        yaw: 0.0,
        roll: 0.0,
    };

    /// Converts the rotator into a quaternion, applying yaw, then pitch, then roll.
    #[must_use]
    pub fn to_quat(self) -> Quat {
        Quat::from_euler(
            EulerRot::ZYX,
            self.yaw.to_radians(),
            self.pitch.to_radians(),
            self.roll.to_radians(),
        )
    }
}

/// Serialisable initial placement of a spawned actor.
///
/// The world is Z-up: actors oscillate along Z and batches are laid out along Y.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Placement {
    /// World location.
    pub location: Vec3,
    /// Orientation.
    pub rotation: Rotator,
    /// Per-axis scale.
    pub scale: Vec3,
}

impl Placement {
    /// Creates an unrotated, unscaled placement at `location`.
    #[must_use]
    pub const fn at(location: Vec3) -> Self {
        Self {
            location,
            rotation: Rotator::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Default for Placement {
    fn default() -> Self {
        Self::at(Vec3::ZERO)
    }
}

impl From<Placement> for Transform {
    fn from(placement: Placement) -> Self {
        Self {
            translation: placement.location,
            rotation: placement.rotation.to_quat(),
            scale: placement.scale,
        }
    }
}
