//! Asynchronous batch replay strategy
//!
//! This module provides an asynchronous implementation of the
//! ProcessingStrategy trait. CSV input is read in batches with csv-async on a
//! tokio runtime; the records themselves are applied to the account strictly
//! in file order on a single task, because a single account's operations form
//! one total order. The async path exists for I/O throughput, not for
//! concurrent account access.

use crate::cli::ReportKind;
use crate::core::{ReplayEngine, StaticPriceOracle};
use crate::io::async_reader::AsyncReader;
use crate::io::csv_format::{write_ledger_csv, write_statement_csv};
use crate::strategy::ProcessingStrategy;
use std::io::Write;
use std::path::Path;

/// Configuration for batch reading
#[derive(Clone, Debug)]
pub struct BatchConfig {
    /// Number of operation records per read batch
    pub batch_size: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self { batch_size: 1000 }
    }
}

impl BatchConfig {
    /// Create a new BatchConfig with a custom batch size
    ///
    /// A zero batch size falls back to the default with a warning on stderr.
    pub fn new(batch_size: usize) -> Self {
        let default = Self::default();

        let batch_size = if batch_size == 0 {
            eprintln!(
                "Warning: Invalid batch_size ({}), using default ({})",
                batch_size, default.batch_size
            );
            default.batch_size
        } else {
            batch_size
        };

        Self { batch_size }
    }
}

/// Asynchronous batch replay strategy
///
/// Implements the ProcessingStrategy trait using asynchronous batched CSV
/// reading. Batches are applied sequentially and in order, so the final
/// account state is identical to the synchronous strategy's for the same
/// input.
#[derive(Debug, Clone)]
pub struct AsyncReplayStrategy {
    /// Batch reading configuration
    config: BatchConfig,
}

impl AsyncReplayStrategy {
    /// Create a new AsyncReplayStrategy with the specified configuration
    pub fn new(config: BatchConfig) -> Self {
        Self { config }
    }
}

impl ProcessingStrategy for AsyncReplayStrategy {
    /// Replay operations from input file and write the report to output
    ///
    /// This method implements the asynchronous pipeline:
    /// 1. Creates a tokio runtime
    /// 2. Creates a ReplayEngine owning a fresh account and the price oracle
    /// 3. Reads operation records in batches from CSV using AsyncReader
    /// 4. Applies each batch in file order, logging failures to stderr
    /// 5. Writes the selected report to output
    ///
    /// # Error Handling
    ///
    /// Fatal errors (file not found, I/O errors, runtime errors) are returned
    /// immediately. Individual operation errors are logged to stderr and
    /// replay continues.
    fn process(
        &self,
        input_path: &Path,
        owner: &str,
        report: ReportKind,
        output: &mut dyn Write,
    ) -> Result<(), String> {
        // Create tokio runtime for async execution
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .build()
            .map_err(|e| format!("Failed to create tokio runtime: {}", e))?;

        runtime.block_on(async {
            let mut engine = ReplayEngine::new(owner, Box::new(StaticPriceOracle::new()));

            // Open the CSV file
            let file = tokio::fs::File::open(input_path)
                .await
                .map_err(|e| format!("Failed to open file '{}': {}", input_path.display(), e))?;

            // Wrap tokio file in a compatibility layer for csv-async
            let compat_file = tokio_util::compat::TokioAsyncReadCompatExt::compat(file);

            // Create async CSV reader
            let mut reader = AsyncReader::new(compat_file);

            // Read batches until end of file; records within and across
            // batches are applied strictly in file order
            loop {
                let batch = reader.read_batch(self.config.batch_size).await;

                if batch.is_empty() {
                    break;
                }

                for operation_record in batch {
                    if let Err(e) = engine.process(operation_record) {
                        eprintln!("Operation error: {}", e);
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
        })
    }
}
