use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod args;

use args::Cli;
use trade_recon::{ReconConfig, ReconciliationEngine};

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the report.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let config: ReconConfig = Cli::parse().into();
    let (left, right) = config.sources().context("invalid configuration")?;

    info!(
        left = %config.left_path.display(),
        right = %config.right_path.display(),
        "starting reconciliation"
    );

    let report = ReconciliationEngine::new()
        .run(&left, &right)
        .context("reconciliation failed")?;

    report
        .write_to(std::io::stdout().lock())
        .context("failed to write report")?;

    Ok(())
}
