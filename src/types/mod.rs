//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `transaction`: Operation kinds, input records, and ledger records
//! - `error`: Error types for account operations

pub mod error;
pub mod transaction;

pub use error::AccountError;
pub use transaction::{OperationKind, OperationRecord, Quantity, Transaction};
