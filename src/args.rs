use clap::Parser;
use std::path::PathBuf;

use trade_recon::{ReconConfig, DEFAULT_LEFT_PATH, DEFAULT_RIGHT_PATH};

/// Reconciles trades and returns between two counterparties' transaction logs.
#[derive(Parser, Debug)]
#[command(name = "trade-recon", version)]
#[command(about = "Reports missing trades, missing returns and short return quantities", long_about = None)]
pub struct Cli {
    /// First counterparty's transaction log.
    #[arg(default_value = DEFAULT_LEFT_PATH)]
    pub left: PathBuf,

    /// Second counterparty's transaction log.
    #[arg(default_value = DEFAULT_RIGHT_PATH)]
    pub right: PathBuf,

    /// Field delimiter used by both files.
    #[arg(short, long, default_value_t = ',')]
    pub delimiter: char,
}

impl From<Cli> for ReconConfig {
    fn from(cli: Cli) -> Self {
        ReconConfig::new(cli.left, cli.right).with_delimiter(cli.delimiter)
    }
}
