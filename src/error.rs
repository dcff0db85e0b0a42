//! Error types shared by the loaders, spawn helpers and settings.

use std::path::PathBuf;

/// Errors produced by this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The asset path does not resolve to a file.
    #[error("asset not found: {}", path.display())]
    AssetNotFound { path: PathBuf },

    /// The file exists but its contents could not be decoded.
    #[error("failed to decode {}: {details}", path.display())]
    Decode { path: PathBuf, details: String },

    /// The file exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A speed range whose lower bound exceeds its upper bound.
    #[error("invalid speed range: min {min} > max {max}")]
    InvalidRange { min: u32, max: u32 },

    /// Settings file is not valid JSON for [`crate::Settings`].
    #[error("invalid settings in {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Map an I/O failure on `path` to `AssetNotFound` or `Io`.
    pub(crate) fn from_io(path: PathBuf, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Error::AssetNotFound { path }
        } else {
            Error::Io { path, source: err }
        }
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
