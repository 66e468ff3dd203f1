use std::path::{Path, PathBuf};

use crate::error::ConvertError;

/// Conversion root used when none is given, relative to the working directory.
pub const DEFAULT_ROOT: &str = "public/images/blog";

/// Default WebP quality.
pub const DEFAULT_QUALITY: u8 = 80;

#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Directory walked recursively for source images
    pub root: PathBuf,
    /// Lossy WebP quality 0-100 (lower = smaller file, worse quality)
    pub quality: u8,
    /// Remove the source file once its WebP sibling is written
    pub delete_originals: bool,
    /// Dry run - list planned conversions, don't write or delete anything
    pub dry_run: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            quality: DEFAULT_QUALITY,
            delete_originals: true,
            dry_run: false,
        }
    }
}

impl ConversionConfig {
    /// Defaults with the root anchored at `cwd`.
    pub fn for_cwd(cwd: &Path) -> Self {
        Self {
            root: cwd.join(DEFAULT_ROOT),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConvertError> {
        if self.quality > 100 {
            return Err(ConvertError::InvalidQuality(self.quality));
        }
        Ok(())
    }
}
