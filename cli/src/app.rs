use anyhow::{Context, Result};
use webp_batch_core::batch::convert_tree;
use webp_batch_core::config::ConversionConfig;
use webp_batch_core::report::Report;

use crate::prompt::Confirm;

const DELETE_WARNING: &str =
    "This will delete the original files after conversion. Continue? (y/n): ";
const OVERWRITE_WARNING: &str =
    "This will write .webp files next to the originals, replacing any with the same name. Continue? (y/n): ";

#[derive(Debug)]
pub enum Outcome {
    /// The operator declined; nothing was touched.
    Cancelled,
    Finished(Report),
}

/// One batch run: confirmation gate, conversion, summary.
pub fn run(config: &ConversionConfig, confirm: &mut dyn Confirm) -> Result<Outcome> {
    config.validate().context("Invalid configuration")?;

    println!("Converting images in directory: {}", config.root.display());

    // A dry run writes nothing, so it skips the gate
    if !config.dry_run {
        let question = if config.delete_originals {
            DELETE_WARNING
        } else {
            OVERWRITE_WARNING
        };
        let accepted = confirm
            .confirm(question)
            .context("Failed to read confirmation")?;
        if !accepted {
            println!("Operation cancelled.");
            return Ok(Outcome::Cancelled);
        }
    }

    let report = convert_tree(config);

    if config.dry_run {
        report.print_dry_run_summary();
    } else {
        report.print_summary();
    }

    Ok(Outcome::Finished(report))
}
