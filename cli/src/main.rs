use std::env;

use anyhow::{Context, Result};
use clap::Parser;

use webp_batch::app::{run, Outcome};
use webp_batch::cli::Cli;
use webp_batch::prompt::{stdin_prompt, AutoConfirm};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Init logging
    let log_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let cwd = env::current_dir().context("Failed to read the current directory")?;
    let config = cli.to_config(&cwd);
    log::debug!("Using {:?}", config);

    let outcome = if cli.yes {
        run(&config, &mut AutoConfirm(true))?
    } else {
        run(&config, &mut stdin_prompt())?
    };

    match outcome {
        Outcome::Cancelled => log::debug!("Cancelled by operator"),
        Outcome::Finished(report) => log::debug!(
            "{} converted, {} failed",
            report.converted_count(),
            report.error_count()
        ),
    }

    Ok(())
}
