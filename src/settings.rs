//! Game settings
//!
//! Stored as JSON next to the executable's working directory. Missing or
//! unreadable settings fall back to defaults.

use std::path::{Path, PathBuf};

use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::assets::AssetLoader;
use crate::consts::{ASSET_ROOT, DEFAULT_FONT_SIZE, DEFAULT_MAX_SPEED, DEFAULT_MIN_SPEED};
use crate::error::{Error, Result};
use crate::sim::{GameRng, get_random_velocity, seeded_rng};
use crate::surface::Color;
use crate::text::{DEFAULT_TEXT_COLOR, Font};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory holding `sprites/` and `sounds/`
    pub asset_root: PathBuf,

    // === Text ===
    /// Message font height in pixels
    pub font_size: f32,
    /// Message color
    pub text_color: Color,

    // === Spawning ===
    /// Fixed RNG seed (None = seed from the OS)
    pub seed: Option<u64>,
    /// Slowest spawn speed (pixels/frame)
    pub min_speed: u32,
    /// Fastest spawn speed (pixels/frame)
    pub max_speed: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            asset_root: PathBuf::from(ASSET_ROOT),

            font_size: DEFAULT_FONT_SIZE,
            text_color: DEFAULT_TEXT_COLOR,

            seed: None,
            min_speed: DEFAULT_MIN_SPEED,
            max_speed: DEFAULT_MAX_SPEED,
        }
    }
}

impl Settings {
    /// Settings file name, relative to the working directory
    pub const FILE_NAME: &'static str = "settings.json";

    /// Load settings from `settings.json`, falling back to defaults
    pub fn load() -> Self {
        match Self::load_from(Self::FILE_NAME) {
            Ok(settings) => settings,
            Err(Error::AssetNotFound { .. }) => {
                log::info!("No {} found, using default settings", Self::FILE_NAME);
                Self::default()
            }
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }

    /// Load settings from a JSON file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| Error::from_io(path.to_path_buf(), e))?;
        let settings = serde_json::from_str(&json).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Save settings as pretty-printed JSON
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, json).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    pub fn asset_loader(&self) -> AssetLoader {
        AssetLoader::new(&self.asset_root)
    }

    pub fn font(&self) -> Font {
        Font::new(self.font_size)
    }

    /// Gameplay RNG, reproducible when `seed` is set
    pub fn rng(&self) -> GameRng {
        match self.seed {
            Some(seed) => seeded_rng(seed),
            None => GameRng::from_os_rng(),
        }
    }

    /// Spawn velocity within the configured speed range
    pub fn random_velocity(&self, rng: &mut GameRng) -> Result<glam::Vec2> {
        get_random_velocity(rng, self.min_speed, self.max_speed)
    }
}
