//! Asset loading against a real directory tree.

use std::fs;
use std::path::Path;

use image::{Rgba, RgbaImage};
use treasure_hunt::{AssetLoader, Color, Error, PixelFormat};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Asset root with empty `sprites/` and `sounds/` directories
fn asset_root() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("sprites")).unwrap();
    fs::create_dir_all(dir.path().join("sounds")).unwrap();
    dir
}

fn write_sprite(root: &Path, name: &str) {
    let mut img = RgbaImage::from_pixel(4, 3, Rgba([255, 215, 0, 255]));
    img.put_pixel(1, 1, Rgba([10, 20, 30, 64]));
    img.save(root.join("sprites").join(format!("{name}.png"))).unwrap();
}

/// Mono 16-bit PCM WAV
fn wav_bytes(sample_rate: u32, samples: &[i16]) -> Vec<u8> {
    let data_len = (samples.len() * 2) as u32;
    let mut buf = Vec::new();
    buf.extend_from_slice(b"RIFF");
    buf.extend_from_slice(&(36 + data_len).to_le_bytes());
    buf.extend_from_slice(b"WAVE");
    buf.extend_from_slice(b"fmt ");
    buf.extend_from_slice(&16u32.to_le_bytes());
    buf.extend_from_slice(&1u16.to_le_bytes());
    buf.extend_from_slice(&1u16.to_le_bytes());
    buf.extend_from_slice(&sample_rate.to_le_bytes());
    buf.extend_from_slice(&(sample_rate * 2).to_le_bytes());
    buf.extend_from_slice(&2u16.to_le_bytes());
    buf.extend_from_slice(&16u16.to_le_bytes());
    buf.extend_from_slice(b"data");
    buf.extend_from_slice(&data_len.to_le_bytes());
    for s in samples {
        buf.extend_from_slice(&s.to_le_bytes());
    }
    buf
}

#[test]
fn sprite_with_alpha_keeps_transparency() {
    init_logging();
    let root = asset_root();
    write_sprite(root.path(), "chest");

    let surface = AssetLoader::new(root.path()).load_image("chest", true).unwrap();
    assert_eq!(surface.size(), (4, 3));
    assert_eq!(surface.format(), PixelFormat::Rgba);
    assert_eq!(surface.get_at(0, 0), Some(Color::GOLD));
    assert_eq!(surface.get_at(1, 1), Some(Color::rgba(10, 20, 30, 64)));
}

#[test]
fn sprite_without_alpha_is_opaque() {
    init_logging();
    let root = asset_root();
    write_sprite(root.path(), "background");

    let surface = AssetLoader::new(root.path())
        .load_sprite("background", false)
        .unwrap();
    assert_eq!(surface.format(), PixelFormat::Rgb);
    assert!(surface.pixels().iter().all(|c| c.a == 255));
    assert_eq!(surface.get_at(1, 1), Some(Color::rgb(10, 20, 30)));
}

#[test]
fn missing_sprite_is_not_found() {
    let root = asset_root();
    let err = AssetLoader::new(root.path())
        .load_image("nothing_here", true)
        .unwrap_err();
    match err {
        Error::AssetNotFound { path } => {
            assert_eq!(path, root.path().join("sprites").join("nothing_here.png"));
        }
        other => panic!("expected AssetNotFound, got {other:?}"),
    }
}

#[test]
fn directory_in_place_of_sprite_is_not_found() {
    let root = asset_root();
    fs::create_dir_all(root.path().join("sprites").join("folder.png")).unwrap();
    assert!(matches!(
        AssetLoader::new(root.path()).load_image("folder", true),
        Err(Error::AssetNotFound { .. })
    ));
}

#[test]
fn truncated_sprite_is_decode_error() {
    let root = asset_root();
    write_sprite(root.path(), "broken");
    let path = root.path().join("sprites").join("broken.png");
    let bytes = fs::read(&path).unwrap();
    fs::write(&path, &bytes[..bytes.len() / 2]).unwrap();

    assert!(matches!(
        AssetLoader::new(root.path()).load_image("broken", true),
        Err(Error::Decode { .. })
    ));
}

#[test]
fn non_png_sprite_is_decode_error() {
    let root = asset_root();
    fs::write(root.path().join("sprites").join("text.png"), b"not an image").unwrap();
    assert!(matches!(
        AssetLoader::new(root.path()).load_image("text", false),
        Err(Error::Decode { .. })
    ));
}

#[test]
fn sound_loads_and_decodes() {
    init_logging();
    let root = asset_root();
    let samples: Vec<i16> = (0..4410).map(|i| ((i % 100) * 300) as i16).collect();
    fs::write(
        root.path().join("sounds").join("coin.wav"),
        wav_bytes(44100, &samples),
    )
    .unwrap();

    let sound = AssetLoader::new(root.path()).load_sound("coin").unwrap();
    assert_eq!(sound.sample_rate(), 44100);
    assert_eq!(sound.channels(), 1);
    assert_eq!(sound.frames(), 4410);
    assert!((sound.duration() - 0.1).abs() < 1e-6);
}

#[test]
fn missing_sound_is_not_found() {
    let root = asset_root();
    assert!(matches!(
        AssetLoader::new(root.path()).load_sound("silence"),
        Err(Error::AssetNotFound { .. })
    ));
}

#[test]
fn truncated_sound_is_decode_error() {
    let root = asset_root();
    let bytes = wav_bytes(22050, &[0; 512]);
    fs::write(
        root.path().join("sounds").join("cut.wav"),
        &bytes[..bytes.len() - 100],
    )
    .unwrap();

    let err = AssetLoader::new(root.path()).load_sound("cut").unwrap_err();
    assert!(matches!(err, Error::Decode { .. }), "{err:?}");
}
