//! Processing strategy module for operation replay
//!
//! This module defines the Strategy pattern for complete replay pipelines,
//! encompassing CSV parsing, account replay, and report output. This allows
//! different processing implementations (synchronous, asynchronous batch) to
//! be selected at runtime.

use crate::cli::{ReportKind, StrategyType};
use std::io::Write;
use std::path::Path;

pub mod r#async;
pub mod sync;

pub use self::r#async::{AsyncReplayStrategy, BatchConfig};
pub use sync::SyncReplayStrategy;

/// Processing strategy trait for complete replay pipelines
///
/// Each strategy must be able to read operation records from a CSV file,
/// replay them through a fresh account, and write the selected report to
/// output.
pub trait ProcessingStrategy: Send + Sync {
    /// Replay operations from input file and write the report to output
    ///
    /// # Arguments
    ///
    /// * `input_path` - Path to the input CSV file containing operation records
    /// * `owner` - Account holder identity for the replayed account
    /// * `report` - Which report to write after replay
    /// * `output` - Mutable reference to a writer for the report
    ///
    /// # Returns
    ///
    /// * `Ok(())` if all processing completed successfully (or with
    ///   recoverable errors)
    /// * `Err(String)` if a fatal error occurred (file not found, I/O error,
    ///   etc.)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input file cannot be opened (file not found, permission denied)
    /// - A fatal I/O error occurs during reading or writing
    /// - Output cannot be written
    ///
    /// Individual operation failures (insufficient funds, unknown symbols,
    /// malformed rows) are logged to stderr and do not cause this method to
    /// return an error. Replay continues with the next record.
    fn process(
        &self,
        input_path: &Path,
        owner: &str,
        report: ReportKind,
        output: &mut dyn Write,
    ) -> Result<(), String>;
}

/// Create a processing strategy based on the specified strategy type
///
/// Factory function that selects and instantiates the appropriate replay
/// strategy implementation at runtime.
///
/// # Arguments
///
/// * `strategy_type` - The type of processing strategy to create (Sync or Async)
/// * `config` - Optional configuration for async batch reading (ignored for sync)
///
/// # Returns
///
/// A boxed trait object implementing the ProcessingStrategy trait
pub fn create_strategy(
    strategy_type: StrategyType,
    config: Option<BatchConfig>,
) -> Box<dyn ProcessingStrategy> {
    match strategy_type {
        StrategyType::Sync => Box::new(SyncReplayStrategy),
        StrategyType::Async => {
            let config = config.unwrap_or_default();
            Box::new(AsyncReplayStrategy::new(config))
        }
    }
}
