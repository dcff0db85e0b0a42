//! Per-frame motion helpers for game objects
//!
//! Nothing here owns global state:
//! - Randomness comes from a caller-supplied generator (seed it for replays)
//! - Objects are reached only through the [`Standable`] trait

pub mod spawn;
pub mod wrap;

pub use spawn::{GameRng, RngState, get_random_position, get_random_velocity, seeded_rng};
pub use wrap::{Standable, wrap_position};
