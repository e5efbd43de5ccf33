//! Error types for the trading account engine
//!
//! This module defines all validation errors that account operations can raise.
//! Every error aborts its operation with zero side effects: no partial ledger
//! entry, no partial balance change. Messages carry the offending values so a
//! caller (CLI, UI) can display them without further lookups.

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for account operations
///
/// Each variant corresponds to exactly one validation failure. None of these
/// are retried; they are surfaced synchronously to the caller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AccountError {
    /// Deposit or withdrawal amount was zero or negative
    #[error("{operation} amount must be greater than zero, got {amount}")]
    InvalidAmount {
        /// Operation that rejected the amount ("deposit" or "withdrawal")
        operation: String,
        /// The rejected amount
        amount: Decimal,
    },

    /// Buy or sell quantity was zero
    #[error("{operation} quantity must be greater than zero")]
    InvalidQuantity {
        /// Operation that rejected the quantity ("buy" or "sell")
        operation: String,
    },

    /// Withdrawal or purchase exceeds the available cash balance
    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        /// Amount the operation needed
        requested: Decimal,
        /// Cash balance at the time of the check
        available: Decimal,
    },

    /// Sell quantity exceeds the shares currently held
    ///
    /// Covers both "never held" and "not enough held"; `held` is 0 when the
    /// symbol is absent from holdings.
    #[error("Insufficient shares of {symbol}: requested {requested}, currently held {held}")]
    InsufficientShares {
        /// Symbol being sold
        symbol: String,
        /// Quantity requested
        requested: u32,
        /// Quantity currently held (0 if the symbol is absent)
        held: u32,
    },

    /// The price oracle does not recognize the symbol
    #[error("Unknown symbol: {symbol}")]
    UnknownSymbol {
        /// The unrecognized symbol
        symbol: String,
    },

    /// Arithmetic overflow would occur
    ///
    /// The operation is rejected to maintain account integrity.
    #[error("Arithmetic overflow in {operation}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
    },
}

// Helper functions for creating common errors

impl AccountError {
    /// Create an InvalidAmount error
    pub fn invalid_amount(operation: &str, amount: Decimal) -> Self {
        AccountError::InvalidAmount {
            operation: operation.to_string(),
            amount,
        }
    }

    /// Create an InvalidQuantity error
    pub fn invalid_quantity(operation: &str) -> Self {
        AccountError::InvalidQuantity {
            operation: operation.to_string(),
        }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(requested: Decimal, available: Decimal) -> Self {
        AccountError::InsufficientFunds {
            requested,
            available,
        }
    }

    /// Create an InsufficientShares error
    pub fn insufficient_shares(symbol: &str, requested: u32, held: u32) -> Self {
        AccountError::InsufficientShares {
            symbol: symbol.to_string(),
            requested,
            held,
        }
    }

    /// Create an UnknownSymbol error
    pub fn unknown_symbol(symbol: &str) -> Self {
        AccountError::UnknownSymbol {
            symbol: symbol.to_string(),
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str) -> Self {
        AccountError::ArithmeticOverflow {
            operation: operation.to_string(),
        }
    }
}
