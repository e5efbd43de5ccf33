//! Trading Account Engine CLI
//!
//! Command-line interface for replaying trading account operations from CSV
//! files.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- operations.csv > statement.csv
//! cargo run -- --owner alice operations.csv > statement.csv
//! cargo run -- --report ledger operations.csv > ledger.csv
//! cargo run -- --strategy async --batch-size 2000 operations.csv > statement.csv
//! ```
//!
//! The program reads operation records from the input CSV file, replays them
//! through a fresh account using the selected processing strategy, and writes
//! the selected report to stdout.
//!
//! # Reports
//!
//! - **statement**: one-row account summary (cash, holdings, portfolio value,
//!   profit/loss) (default)
//! - **ledger**: full transaction history with balance-after snapshots
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (missing arguments, file not found, file not readable, etc.)

use std::process;
use trading_account_engine::cli;
use trading_account_engine::strategy;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();

    // Create the appropriate processing strategy based on CLI arguments
    let strategy = {
        let config = if matches!(args.strategy, cli::StrategyType::Async) {
            Some(args.to_batch_config())
        } else {
            None
        };
        strategy::create_strategy(args.strategy, config)
    };

    // Replay operations using the selected strategy
    // Report output goes to stdout
    let mut output = std::io::stdout();
    if let Err(e) = strategy.process(&args.input_file, &args.owner, args.report, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
