//! Treasure Hunt - helper layer for a 2D arcade game
//!
//! Core modules:
//! - `assets`: Sprite and sound loading from the `assets/` tree
//! - `audio`: WAV decoding into playable sounds
//! - `surface`: CPU pixel buffers, colors and rects
//! - `text`: Bitmap font rendering and centered messages
//! - `sim`: Edge clamping and random spawn helpers
//! - `settings`: JSON-backed configuration

pub mod assets;
pub mod audio;
pub mod error;
pub mod settings;
pub mod sim;
pub mod surface;
pub mod text;

pub use assets::{AssetLoader, load_image, load_sound, load_sprite};
pub use audio::Sound;
pub use error::{Error, Result};
pub use settings::Settings;
pub use sim::{
    GameRng, RngState, Standable, get_random_position, get_random_velocity, seeded_rng,
    wrap_position,
};
pub use surface::{Color, PixelFormat, Rect, Surface};
pub use text::{DEFAULT_TEXT_COLOR, Font, print_text};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Asset tree layout
    pub const ASSET_ROOT: &str = "assets";
    pub const SPRITES_DIR: &str = "sprites";
    pub const SOUNDS_DIR: &str = "sounds";
    pub const SPRITE_EXT: &str = "png";
    pub const SOUND_EXT: &str = "wav";

    /// Message font height (pixels)
    pub const DEFAULT_FONT_SIZE: f32 = 64.0;

    /// Spawn speed range (pixels/frame)
    pub const DEFAULT_MIN_SPEED: u32 = 1;
    pub const DEFAULT_MAX_SPEED: u32 = 3;
}

/// Convert polar (r, theta) to cartesian (x, y)
///
/// Equivalent to rotating `(r, 0)` counterclockwise by `theta` radians.
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
