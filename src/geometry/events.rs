//! Notifications emitted by geometry actors.
//!
//! Both are entity events targeting the emitting actor. Subscribers attach to
//! one actor with `EntityCommands::observe`; global observers see every actor.
//! Events are triggered through `Commands`, so they are delivered after the
//! emitting system finishes and a subscriber cannot re-enter the emitter.

use bevy::prelude::*;

/// The actor picked and applied a new colour.
#[derive(EntityEvent, Debug, Clone, PartialEq)]
pub struct ColorChanged {
    /// Actor that changed colour.
    pub entity: Entity,
    /// Newly applied colour.
    pub color: LinearRgba,
    /// Name of the actor at the time of the change.
    pub name: String,
}

/// The actor's colour timer ran out and was disarmed.
///
/// Emitted exactly once per actor.
#[derive(EntityEvent, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerFinished {
    /// Actor whose timer finished.
    pub entity: Entity,
}
