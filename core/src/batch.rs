use walkdir::WalkDir;

use crate::config::ConversionConfig;
use crate::converter::{convert_file, webp_destination};
use crate::error::ConvertError;
use crate::format::SourceFormat;
use crate::io::file_size;
use crate::report::{FileResult, Report};

/// Convert every JPEG/PNG under `config.root`, one file at a time.
///
/// Per-file failures are printed and recorded, never propagated. A missing
/// root yields an empty report.
pub fn convert_tree(config: &ConversionConfig) -> Report {
    let mut report = Report::new();

    if !config.root.is_dir() {
        println!("Error: {}", ConvertError::RootNotFound(config.root.clone()));
        return report;
    }

    for entry in WalkDir::new(&config.root).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                let path = e
                    .path()
                    .map(|p| p.to_path_buf())
                    .unwrap_or_else(|| config.root.clone());
                let err = ConvertError::from(e);
                log::warn!("Skipping {}: {}", path.display(), err);
                report.add(FileResult::failed(path, &err));
                continue;
            }
        };

        // Anything that isn't a directory goes through, so dangling links get reported
        if entry.file_type().is_dir() {
            continue;
        }
        let path = entry.path();
        let Some(format) = SourceFormat::from_path(path) else {
            continue;
        };

        if config.dry_run {
            let destination = webp_destination(path);
            println!("[dry-run] {} -> {}", path.display(), destination.display());
            report.add(FileResult::planned(path.to_path_buf(), destination, file_size(path)));
            continue;
        }

        log::debug!("Converting {} file {}", format.as_str(), path.display());

        match convert_file(path, config.quality, config.delete_originals) {
            Ok(conversion) => report.add(FileResult::from(conversion)),
            Err(e) => {
                println!("Error converting: {}", e);
                log::debug!("{:?}", e);
                report.add(FileResult::failed(path.to_path_buf(), &e));
            }
        }
    }

    report
}
