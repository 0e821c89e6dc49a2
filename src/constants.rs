//! Layout and lifetime constants shared by the geometry and hub systems.

/// Number of actors spawned by each of the hub's two ad-hoc batches.
pub const BATCH_SIZE: usize = 10;
/// Distance between neighbouring actors of an ad-hoc batch along the Y axis.
pub const BATCH_SPACING: f32 = 300.0;
/// Height (Z) of the immediately spawned batch.
pub const IMMEDIATE_BATCH_HEIGHT: f32 = 330.0;
/// Height (Z) of the staged batch.
pub const STAGED_BATCH_HEIGHT: f32 = 700.0;
/// Number of colour changes an actor performs before its timer is disarmed.
pub const MAX_TIMER_COUNT: u32 = 5;

/// Default oscillation amplitude in world units.
pub const DEFAULT_AMPLITUDE: f32 = 50.0;
/// Default oscillation frequency in radians per second.
pub const DEFAULT_FREQUENCY: f32 = 2.0;
/// Default colour timer period in seconds.
pub const DEFAULT_TIMER_PERIOD_SECS: f32 = 3.0;

/// Class name used when no class is configured explicitly.
pub const DEFAULT_CLASS_NAME: &str = "BaseGeometry";
