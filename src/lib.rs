//! Trading Account Engine Library
//! # Overview
//!
//! This library provides a trading account ledger engine with a CSV replay
//! pipeline implementing both sync and an async strategy
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Transaction, OperationRecord, errors)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::account`] - Account state, validated mutations, and valuation
//!   - [`core::oracle`] - Price oracle trait and fixed-table implementation
//!   - [`core::engine`] - Operation replay orchestration
//! - [`io`] - I/O handling with pluggable parsing strategies
//! - [`strategy`] - Runtime-selected replay pipelines
//!
//! # Operations
//!
//! The engine supports four operation kinds:
//!
//! - **Deposit**: Credit cash to the account
//! - **Withdrawal**: Debit cash from the account (requires sufficient balance)
//! - **Buy**: Exchange cash for shares at the oracle price
//! - **Sell**: Exchange shares for cash at the oracle price
//!
//! # Account State
//!
//! Each account maintains:
//! - `cash_balance`: Cash available for withdrawal or trading (never negative)
//! - `holdings`: Per-symbol share quantities (entries always at least 1)
//! - `total_deposited`: Cumulative deposits, the profit/loss baseline
//! - `ledger`: Append-only chronological record of successful operations

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod strategy;
pub mod types;

pub use core::{Account, PriceOracle, ReplayEngine, Statement, StaticPriceOracle};
pub use io::{write_ledger_csv, write_statement_csv};
pub use types::{AccountError, OperationKind, OperationRecord, Quantity, Transaction};
