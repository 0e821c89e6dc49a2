//! Random source for spawn choices and colour ticks.

use bevy::prelude::*;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::components::MovementKind;

/// Draws a fully saturated, fully bright colour with a uniformly random hue.
///
/// Alpha is always 1. Consecutive draws may repeat.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> LinearRgba {
    let hue = rng.random_range(0.0..360.0_f32);
    Color::hsv(hue, 1.0, 1.0).to_linear()
}

/// Picks [`MovementKind::Sinusoidal`] or [`MovementKind::Static`] with equal odds.
pub fn random_movement<R: Rng + ?Sized>(rng: &mut R) -> MovementKind {
    if rng.random_bool(0.5) {
        MovementKind::Static
    } else {
        MovementKind::Sinusoidal
    }
}

/// Shared random source used by the hub and the colour timers.
///
/// The default instance is seeded from the thread RNG, so runs are not
/// reproducible unless a seed is supplied with [`GeometryRng::seeded`].
#[derive(Resource)]
pub struct GeometryRng(ChaCha8Rng);

impl GeometryRng {
    /// Creates a deterministic source.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Draws a random colour, see [`random_color`].
    pub fn color(&mut self) -> LinearRgba {
        random_color(self)
    }

    /// Draws a random movement kind, see [`random_movement`].
    pub fn movement(&mut self) -> MovementKind {
        random_movement(self)
    }
}

impl RngCore for GeometryRng {
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.0.fill_bytes(dst);
    }
}

impl Default for GeometryRng {
    fn default() -> Self {
        Self(ChaCha8Rng::from_rng(&mut rand::rng()))
    }
}
