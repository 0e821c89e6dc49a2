//! JSON description of a hub, loaded from disk by the binary.

use std::path::{Path, PathBuf};

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{GeometryHub, SpawnPayload};
use crate::components::GeometryClass;

/// Failure to load a [`HubConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read hub config {path}")]
    Read {
        /// File that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The file was read but is not a valid hub description.
    #[error("failed to parse hub config {path}")]
    Parse {
        /// File that was parsed, or `<inline>` for in-memory documents.
        path: PathBuf,
        /// Underlying JSON failure.
        #[source]
        source: serde_json::Error,
    },
}

fn default_geometry_class() -> Option<GeometryClass> {
    Some(GeometryClass::default())
}

/// Serialisable hub description.
///
/// When present as a resource, `HubPlugin` spawns one hub from it at
/// `Startup`. Omitting `geometry_class` selects the default class; an
/// explicit `null` leaves the hub without one, and its ad-hoc spawns fail.
///
/// ```json
/// {
///   "geometry_class": { "name": "Cube", "mesh": "cube" },
///   "payloads": [
///     { "geometry_class": { "name": "Sphere", "mesh": "sphere" },
///       "config": { "movement": "sinusoidal", "timer_period_secs": 1.5 },
///       "placement": { "location": [-800.0, 0.0, 400.0] } }
///   ]
/// }
/// ```
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HubConfig {
    /// Class used by the two ad-hoc batches.
    #[serde(default = "default_geometry_class")]
    pub geometry_class: Option<GeometryClass>,
    /// Explicit spawn requests for the observed batch.
    #[serde(default)]
    pub payloads: Vec<SpawnPayload>,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            geometry_class: default_geometry_class(),
            payloads: Vec::new(),
        }
    }
}

impl HubConfig {
    /// Reads and parses the JSON document at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file cannot be read and
    /// [`ConfigError::Parse`] if its contents are not a hub description.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parses an in-memory JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if `json` is not a hub description.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|source| ConfigError::Parse {
            path: PathBuf::from("<inline>"),
            source,
        })
    }

    /// Builds the hub component described by this document.
    #[must_use]
    pub fn into_hub(self) -> GeometryHub {
        GeometryHub::new(self.geometry_class).with_payloads(self.payloads)
    }
}
