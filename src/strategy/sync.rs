//! Synchronous replay strategy
//!
//! This module provides a synchronous, single-threaded implementation of the
//! ProcessingStrategy trait. It orchestrates replay by coordinating between
//! the SyncReader (for CSV input), the ReplayEngine (for account logic), and
//! the csv_format writers (for report output).
//!
//! # Memory Efficiency
//!
//! This strategy maintains constant memory usage for input: CSV records are
//! processed one at a time (streaming via iterator); only the account state
//! and its ledger are held in memory.

use crate::cli::ReportKind;
use crate::core::{ReplayEngine, StaticPriceOracle};
use crate::io::csv_format::{write_ledger_csv, write_statement_csv};
use crate::io::sync_reader::SyncReader;
use crate::strategy::ProcessingStrategy;
use std::io::Write;
use std::path::Path;

/// Synchronous replay strategy
///
/// Implements the ProcessingStrategy trait using single-threaded, synchronous
/// processing. Operations are applied to the account in file order.
///
/// # Examples
///
/// ```no_run
/// use trading_account_engine::cli::ReportKind;
/// use trading_account_engine::strategy::{ProcessingStrategy, SyncReplayStrategy};
/// use std::path::Path;
/// use std::io;
///
/// let strategy = SyncReplayStrategy;
/// let mut output = io::stdout();
///
/// strategy.process(Path::new("operations.csv"), "alice", ReportKind::Statement, &mut output)
///     .expect("Replay failed");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SyncReplayStrategy;

impl ProcessingStrategy for SyncReplayStrategy {
    /// Replay operations from input file and write the report to output
    ///
    /// This method orchestrates the complete synchronous pipeline:
    /// 1. Creates a ReplayEngine owning a fresh account and the price oracle
    /// 2. Streams operation records from the CSV file via SyncReader
    /// 3. Applies each record through the engine, logging failures to stderr
    /// 4. Writes the selected report (statement or ledger) to output
    ///
    /// # Error Handling
    ///
    /// Fatal errors (file not found, I/O errors) are returned immediately.
    /// Individual operation errors are logged to stderr and replay continues.
    fn process(
        &self,
        input_path: &Path,
        owner: &str,
        report: ReportKind,
        output: &mut dyn Write,
    ) -> Result<(), String> {
        // Create replay engine with a fresh account
        let mut engine = ReplayEngine::new(owner, Box::new(StaticPriceOracle::new()));

        // Create sync reader for streaming CSV input
        let reader = SyncReader::new(input_path)?;

        // Apply each operation record through the engine
        for result in reader {
            match result {
                Ok(operation_record) => {
                    if let Err(e) = engine.process(operation_record) {
                        // Log operation failures to stderr and continue
                        eprintln!("Operation error: {}", e);
                    }
                }
                Err(e) => {
                    // Log CSV parsing/conversion errors to stderr
                    eprintln!("CSV parsing error: {}", e);
                }
            }
        }

        // Write the selected report
        match report {
            ReportKind::Statement => {
                let statement = engine
                    .statement()
                    .map_err(|e| format!("Failed to assemble statement: {}", e))?;
                write_statement_csv(&statement, output)
            }
            ReportKind::Ledger => {
                write_ledger_csv(&engine.account().get_transactions(), output)
            }
        }
    }
}
