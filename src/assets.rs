//! Sprite and sound loading from the on-disk asset tree
//!
//! Layout under the asset root:
//! - `sprites/<name>.png`
//! - `sounds/<name>.wav`
//!
//! Names are trusted, compiled-in identifiers and are joined onto the root
//! without sanitization.

use std::path::{Path, PathBuf};

use crate::audio::Sound;
use crate::consts::{ASSET_ROOT, SOUNDS_DIR, SOUND_EXT, SPRITES_DIR, SPRITE_EXT};
use crate::error::{Error, Result};
use crate::surface::{PixelFormat, Surface};

/// Loads assets relative to a root directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetLoader {
    root: PathBuf,
}

impl Default for AssetLoader {
    fn default() -> Self {
        Self::new(ASSET_ROOT)
    }
}

impl AssetLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn sprite_path(&self, name: &str) -> PathBuf {
        self.root
            .join(SPRITES_DIR)
            .join(format!("{name}.{SPRITE_EXT}"))
    }

    pub fn sound_path(&self, name: &str) -> PathBuf {
        self.root
            .join(SOUNDS_DIR)
            .join(format!("{name}.{SOUND_EXT}"))
    }

    /// Load `sprites/<name>.png` and convert it to the display format.
    ///
    /// `with_alpha` keeps per-pixel alpha; otherwise the surface is opaque.
    pub fn load_image(&self, name: &str, with_alpha: bool) -> Result<Surface> {
        let path = self.sprite_path(name);
        let bytes = read_asset(&path)?;

        let img = image::load_from_memory_with_format(&bytes, image::ImageFormat::Png)
            .map_err(|e| Error::Decode {
                path: path.clone(),
                details: e.to_string(),
            })?;
        let surface = Surface::from_rgba_image(&img.to_rgba8());

        let format = if with_alpha {
            PixelFormat::Rgba
        } else {
            PixelFormat::Rgb
        };
        log::debug!(
            "Loaded sprite {} ({}x{}, {:?})",
            path.display(),
            surface.width(),
            surface.height(),
            format
        );
        Ok(surface.convert(format))
    }

    /// Alias of [`load_image`](Self::load_image)
    pub fn load_sprite(&self, name: &str, with_alpha: bool) -> Result<Surface> {
        self.load_image(name, with_alpha)
    }

    /// Load and decode `sounds/<name>.wav`
    pub fn load_sound(&self, name: &str) -> Result<Sound> {
        let path = self.sound_path(name);
        let bytes = read_asset(&path)?;

        let sound = Sound::from_wav_bytes(&bytes).map_err(|details| Error::Decode {
            path: path.clone(),
            details,
        })?;
        log::debug!(
            "Loaded sound {} ({} Hz, {} ch, {:.2}s)",
            path.display(),
            sound.sample_rate(),
            sound.channels(),
            sound.duration()
        );
        Ok(sound)
    }
}

fn read_asset(path: &Path) -> Result<Vec<u8>> {
    if !path.is_file() {
        return Err(Error::AssetNotFound {
            path: path.to_path_buf(),
        });
    }
    std::fs::read(path).map_err(|e| Error::from_io(path.to_path_buf(), e))
}

/// Load a sprite from the default `assets/` root
pub fn load_image(name: &str, with_alpha: bool) -> Result<Surface> {
    AssetLoader::default().load_image(name, with_alpha)
}

/// Alias of [`load_image`]
pub fn load_sprite(name: &str, with_alpha: bool) -> Result<Surface> {
    load_image(name, with_alpha)
}

/// Load a sound from the default `assets/` root
pub fn load_sound(name: &str) -> Result<Sound> {
    AssetLoader::default().load_sound(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let loader = AssetLoader::default();
        assert_eq!(
            loader.sprite_path("spaceship"),
            Path::new("assets").join("sprites").join("spaceship.png")
        );
        assert_eq!(
            loader.sound_path("laser"),
            Path::new("assets").join("sounds").join("laser.wav")
        );
    }

    #[test]
    fn test_custom_root() {
        let loader = AssetLoader::new("/opt/game/data");
        assert_eq!(loader.root(), Path::new("/opt/game/data"));
        assert_eq!(
            loader.sprite_path("rock"),
            Path::new("/opt/game/data/sprites/rock.png")
        );
    }

    #[test]
    fn test_missing_asset_is_not_found() {
        let loader = AssetLoader::new("definitely/not/a/real/root");
        assert!(matches!(
            loader.load_image("ghost", true),
            Err(Error::AssetNotFound { .. })
        ));
        assert!(matches!(
            loader.load_sound("ghost"),
            Err(Error::AssetNotFound { .. })
        ));
    }
}
