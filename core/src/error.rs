use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("directory {0} does not exist")]
    RootNotFound(PathBuf),

    #[error("failed to read file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to decode image {path}: {source}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("failed to encode WebP for {path}: {reason}")]
    Encode { path: PathBuf, reason: String },

    #[error("failed to write file {path}: {source}")]
    WriteFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("converted but failed to delete {path}: {source}")]
    DeleteSource {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("quality must be between 0 and 100, got {0}")]
    InvalidQuality(u8),

    #[error("directory walk error: {0}")]
    WalkDir(#[from] walkdir::Error),
}
