//! Core business logic module
//!
//! This module contains the account engine components:
//! - `account` - Account state, validated mutations, and derived values
//! - `oracle` - Price oracle trait and the fixed-table implementation
//! - `engine` - Operation replay orchestration and statement assembly

pub mod account;
pub mod engine;
pub mod oracle;

pub use account::Account;
pub use engine::{ReplayEngine, Statement};
pub use oracle::{PriceOracle, StaticPriceOracle};
