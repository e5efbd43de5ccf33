use crate::strategy::BatchConfig;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Replay trading account operations and report the resulting state
#[derive(Parser, Debug)]
#[command(name = "trading-account-engine")]
#[command(
    about = "Replay trading account operations and report the resulting state",
    long_about = None
)]
pub struct CliArgs {
    /// Input CSV file path containing operation records
    #[arg(value_name = "INPUT", help = "Path to the input CSV file")]
    pub input_file: PathBuf,

    /// Account holder identity for the replayed account
    #[arg(
        long = "owner",
        value_name = "NAME",
        default_value = "demo_user",
        help = "Account holder identity"
    )]
    pub owner: String,

    /// Processing strategy to use for replaying operations
    #[arg(
        long = "strategy",
        value_name = "STRATEGY",
        default_value = "sync",
        help = "Processing strategy: 'sync' for synchronous or 'async' for asynchronous"
    )]
    pub strategy: StrategyType,

    /// Number of records per read batch (async mode only)
    #[arg(
        long = "batch-size",
        value_name = "SIZE",
        help = "Number of operation records per read batch (default: 1000)"
    )]
    pub batch_size: Option<usize>,

    /// Report to write after replay
    #[arg(
        long = "report",
        value_name = "REPORT",
        default_value = "statement",
        help = "Report kind: 'statement' for the account summary or 'ledger' for the transaction history"
    )]
    pub report: ReportKind,
}

/// Available processing strategies for operation replay
#[derive(Clone, Debug, ValueEnum)]
pub enum StrategyType {
    Sync,
    Async,
}

/// Available report kinds for replay output
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportKind {
    /// One-row account summary: cash, holdings, valuation, profit/loss
    Statement,
    /// Full transaction history with per-kind fields
    Ledger,
}

impl CliArgs {
    /// Create a BatchConfig from CLI arguments
    ///
    /// Uses the provided batch size if present, falling back to the default
    /// (and warning on invalid values) otherwise.
    pub fn to_batch_config(&self) -> BatchConfig {
        match self.batch_size {
            Some(batch_size) => BatchConfig::new(batch_size),
            None => BatchConfig::default(),
        }
    }
}
