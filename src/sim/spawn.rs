//! Random spawn positions and velocities
//!
//! All draws go through an explicit generator so a seeded run replays
//! exactly.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::polar_to_cartesian;
use crate::surface::Surface;

/// Generator used for gameplay randomness
pub type GameRng = Pcg32;

/// Seed record for reproducing a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> GameRng {
        seeded_rng(self.seed)
    }
}

pub fn seeded_rng(seed: u64) -> GameRng {
    Pcg32::seed_from_u64(seed)
}

/// Uniform position with x in `[0, width)` and y in `[0, height)`.
///
/// Coordinates are whole pixels. A zero-sized axis yields `0.0`.
pub fn get_random_position<R>(rng: &mut R, surface: &Surface) -> Vec2
where
    R: Rng,
{
    let (w, h) = surface.size();
    let x = if w == 0 { 0 } else { rng.random_range(0..w) };
    let y = if h == 0 { 0 } else { rng.random_range(0..h) };
    Vec2::new(x as f32, y as f32)
}

/// Random velocity with an integer speed in `[min_speed, max_speed]` and a
/// whole-degree heading in `[0, 360)`, counterclockwise from +x.
pub fn get_random_velocity<R>(rng: &mut R, min_speed: u32, max_speed: u32) -> Result<Vec2>
where
    R: Rng,
{
    if min_speed > max_speed {
        return Err(Error::InvalidRange {
            min: min_speed,
            max: max_speed,
        });
    }

    let speed = rng.random_range(min_speed..=max_speed);
    let angle = rng.random_range(0..360u32);
    Ok(polar_to_cartesian(speed as f32, (angle as f32).to_radians()))
}
