use std::path::{Path, PathBuf};

use clap::Parser;
use webp_batch_core::config::{ConversionConfig, DEFAULT_QUALITY};

/// Convert the JPEG/PNG images of a directory tree to WebP
#[derive(Debug, Parser)]
#[command(name = "webp_batch", version, about)]
pub struct Cli {
    /// Directory to convert (default: ./public/images/blog)
    pub root: Option<PathBuf>,

    /// WebP quality 0–100
    #[arg(short, long, default_value_t = DEFAULT_QUALITY, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub quality: u8,

    /// Keep the original files instead of deleting them
    #[arg(long)]
    pub keep_originals: bool,

    /// Don't ask for confirmation
    #[arg(short, long)]
    pub yes: bool,

    /// Show what would be converted without writing or deleting files
    #[arg(long)]
    pub dry_run: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Relative roots are resolved against `cwd`.
    pub fn to_config(&self, cwd: &Path) -> ConversionConfig {
        let mut config = ConversionConfig::for_cwd(cwd);
        if let Some(root) = &self.root {
            config.root = cwd.join(root);
        }
        config.quality = self.quality;
        config.delete_originals = !self.keep_originals;
        config.dry_run = self.dry_run;
        config
    }
}
