use std::path::PathBuf;

use crate::converter::Conversion;
use crate::error::ConvertError;

/// Result of handling a single file.
#[derive(Debug, Clone)]
pub struct FileResult {
    pub path: PathBuf,
    pub destination: Option<PathBuf>,
    pub original_size: u64,
    pub converted_size: u64,
    pub deleted: bool,
    /// Listed but not converted (dry run)
    pub skipped: bool,
    pub error: Option<String>,
}

impl FileResult {
    pub fn failed(path: PathBuf, error: &ConvertError) -> Self {
        Self {
            path,
            destination: None,
            original_size: 0,
            converted_size: 0,
            deleted: false,
            skipped: false,
            error: Some(error.to_string()),
        }
    }

    pub fn planned(path: PathBuf, destination: PathBuf, original_size: u64) -> Self {
        Self {
            path,
            destination: Some(destination),
            original_size,
            converted_size: 0,
            deleted: false,
            skipped: true,
            error: None,
        }
    }
}

impl From<Conversion> for FileResult {
    fn from(c: Conversion) -> Self {
        Self {
            path: c.source,
            destination: Some(c.destination),
            original_size: c.original_size,
            converted_size: c.converted_size,
            deleted: c.deleted,
            skipped: false,
            error: None,
        }
    }
}

/// Aggregate report for one batch run.
#[derive(Debug, Default)]
pub struct Report {
    pub results: Vec<FileResult>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, result: FileResult) {
        self.results.push(result);
    }

    fn converted(&self) -> impl Iterator<Item = &FileResult> {
        self.results.iter().filter(|r| r.error.is_none() && !r.skipped)
    }

    pub fn total_original(&self) -> u64 {
        self.converted().map(|r| r.original_size).sum()
    }

    pub fn total_converted(&self) -> u64 {
        self.converted().map(|r| r.converted_size).sum()
    }

    pub fn total_savings_pct(&self) -> f64 {
        let orig = self.total_original();
        if orig == 0 {
            return 0.0;
        }
        (1.0 - self.total_converted() as f64 / orig as f64) * 100.0
    }

    /// The run tally: files that now have a WebP sibling and reported no error.
    pub fn converted_count(&self) -> usize {
        self.converted().count()
    }

    pub fn deleted_count(&self) -> usize {
        self.converted().filter(|r| r.deleted).count()
    }

    pub fn planned_count(&self) -> usize {
        self.results.iter().filter(|r| r.skipped).count()
    }

    pub fn error_count(&self) -> usize {
        self.results.iter().filter(|r| r.error.is_some()).count()
    }

    pub fn print_summary(&self) {
        println!(
            "\nConversion finished! {} image(s) converted to WebP.",
            self.converted_count()
        );

        if self.converted_count() > 0 {
            println!(
                "Total: {} → {} ({:.1}% reduction), {} original(s) deleted",
                format_size(self.total_original()),
                format_size(self.total_converted()),
                self.total_savings_pct(),
                self.deleted_count()
            );
        }

        if self.error_count() > 0 {
            println!("Errors: {}", self.error_count());
            for r in &self.results {
                if let Some(ref err) = r.error {
                    println!("  ERROR {}: {}", r.path.display(), err);
                }
            }
        }
    }

    pub fn print_dry_run_summary(&self) {
        println!(
            "\n[dry-run] {} image(s) would be converted ({}).",
            self.planned_count(),
            format_size(self.results.iter().filter(|r| r.skipped).map(|r| r.original_size).sum())
        );
    }
}

fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * KB;
    if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
