//! Transaction-related types for the trading account engine
//!
//! This module defines the operation kinds accepted by the engine, the parsed
//! operation record used by the replay pipeline, and the ledger record type
//! appended to an account after each successful mutation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Share quantity
///
/// Quantities are whole shares; a negative quantity is unrepresentable.
pub type Quantity = u32;

/// Operation kinds supported by the account engine
///
/// Deposits and withdrawals move cash; buys and sells exchange cash for
/// shares through the price oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    /// Credit cash to the account
    Deposit,

    /// Debit cash from the account
    ///
    /// Requires sufficient cash balance to succeed.
    Withdrawal,

    /// Exchange cash for shares at the oracle price
    ///
    /// Requires a priceable symbol and sufficient cash for the full cost.
    Buy,

    /// Exchange shares for cash at the oracle price
    ///
    /// Requires a priceable symbol and sufficient shares held.
    Sell,
}

impl OperationKind {
    /// Lowercase name of this kind, as written in CSV input and ledger output
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Deposit => "deposit",
            OperationKind::Withdrawal => "withdrawal",
            OperationKind::Buy => "buy",
            OperationKind::Sell => "sell",
        }
    }
}

/// Parsed input operation
///
/// Represents a single account operation as read from the input CSV file,
/// after conversion has validated that every field its kind requires is
/// present and well-formed. One variant per kind, so a record can never
/// reach the account missing a required field.
#[derive(Debug, Clone, PartialEq)]
pub enum OperationRecord {
    /// Credit cash to the account
    Deposit {
        /// Amount to deposit
        amount: Decimal,
    },

    /// Debit cash from the account
    Withdrawal {
        /// Amount to withdraw
        amount: Decimal,
    },

    /// Buy shares at the oracle price
    Buy {
        /// Symbol to buy
        symbol: String,
        /// Number of shares
        quantity: Quantity,
    },

    /// Sell shares at the oracle price
    Sell {
        /// Symbol to sell
        symbol: String,
        /// Number of shares
        quantity: Quantity,
    },
}

impl OperationRecord {
    /// The operation kind of this record
    pub fn kind(&self) -> OperationKind {
        match self {
            OperationRecord::Deposit { .. } => OperationKind::Deposit,
            OperationRecord::Withdrawal { .. } => OperationKind::Withdrawal,
            OperationRecord::Buy { .. } => OperationKind::Buy,
            OperationRecord::Sell { .. } => OperationKind::Sell,
        }
    }
}

/// Ledger record created once per successful mutating operation
///
/// One variant per operation kind, with kind-specific fields, so a record can
/// never be missing a field its kind requires. Records are append-only and
/// never edited or deleted; `balance_after` snapshots the cash balance
/// immediately following the operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Transaction {
    /// Cash credited to the account
    Deposit {
        /// Amount deposited
        amount: Decimal,
        /// Cash balance after the deposit
        balance_after: Decimal,
    },

    /// Cash debited from the account
    Withdrawal {
        /// Amount withdrawn
        amount: Decimal,
        /// Cash balance after the withdrawal
        balance_after: Decimal,
    },

    /// Shares bought at the oracle price
    Buy {
        /// Symbol bought
        symbol: String,
        /// Number of shares bought
        quantity: Quantity,
        /// Oracle price per share at execution
        unit_price: Decimal,
        /// Total cost (`unit_price * quantity`)
        total: Decimal,
        /// Cash balance after the purchase
        balance_after: Decimal,
    },

    /// Shares sold at the oracle price
    Sell {
        /// Symbol sold
        symbol: String,
        /// Number of shares sold
        quantity: Quantity,
        /// Oracle price per share at execution
        unit_price: Decimal,
        /// Total revenue (`unit_price * quantity`)
        total: Decimal,
        /// Cash balance after the sale
        balance_after: Decimal,
    },
}

impl Transaction {
    /// The operation kind this record was created by
    pub fn kind(&self) -> OperationKind {
        match self {
            Transaction::Deposit { .. } => OperationKind::Deposit,
            Transaction::Withdrawal { .. } => OperationKind::Withdrawal,
            Transaction::Buy { .. } => OperationKind::Buy,
            Transaction::Sell { .. } => OperationKind::Sell,
        }
    }

    /// Cash balance snapshot taken immediately after this operation
    pub fn balance_after(&self) -> Decimal {
        match self {
            Transaction::Deposit { balance_after, .. }
            | Transaction::Withdrawal { balance_after, .. }
            | Transaction::Buy { balance_after, .. }
            | Transaction::Sell { balance_after, .. } => *balance_after,
        }
    }
}
