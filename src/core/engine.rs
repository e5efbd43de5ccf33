//! Operation replay engine
//!
//! This module provides the `ReplayEngine` that applies parsed operation
//! records to a single owned `Account`, and the `Statement` summary assembled
//! from the final account state for report output.
//!
//! The engine owns its account explicitly; nothing in this crate holds
//! account state at module level. Whatever session or pipeline context needs
//! an account constructs an engine (or an `Account` directly) and owns it.

use crate::core::account::Account;
use crate::core::oracle::PriceOracle;
use crate::types::{AccountError, OperationRecord, Quantity};
use rust_decimal::Decimal;

/// Final account summary for report output
///
/// Snapshot of everything the statement report prints: identity, balances,
/// holdings (symbol-sorted for deterministic output), and the derived
/// valuation figures.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    /// Account holder identity
    pub owner: String,
    /// Cash balance at the end of replay
    pub cash_balance: Decimal,
    /// Cumulative sum of all deposits
    pub total_deposited: Decimal,
    /// Holdings as (symbol, quantity) pairs, sorted by symbol
    pub holdings: Vec<(String, Quantity)>,
    /// Cash plus oracle-priced value of all holdings
    pub portfolio_value: Decimal,
    /// Portfolio value minus total deposited
    pub profit_or_loss: Decimal,
}

/// Applies operation records to an owned account
///
/// Routes each record to the corresponding account operation, consulting the
/// owned price oracle for trades. Validation failures surface as
/// `AccountError` per record; the engine itself adds no policy beyond
/// dispatch.
pub struct ReplayEngine {
    account: Account,
    oracle: Box<dyn PriceOracle>,
}

impl ReplayEngine {
    /// Create an engine with a fresh zero-balance account
    ///
    /// # Arguments
    ///
    /// * `owner` - Account holder identity for the new account
    /// * `oracle` - Price source used for all trades and valuation
    pub fn new(owner: impl Into<String>, oracle: Box<dyn PriceOracle>) -> Self {
        ReplayEngine {
            account: Account::new(owner),
            oracle,
        }
    }

    /// Apply a single operation record to the account
    ///
    /// # Errors
    ///
    /// Returns the account's validation error for the record; the account is
    /// unchanged when an error is returned.
    pub fn process(&mut self, record: OperationRecord) -> Result<(), AccountError> {
        match record {
            OperationRecord::Deposit { amount } => self.account.deposit(amount),
            OperationRecord::Withdrawal { amount } => self.account.withdraw(amount),
            OperationRecord::Buy { symbol, quantity } => {
                self.account.buy(self.oracle.as_ref(), &symbol, quantity)
            }
            OperationRecord::Sell { symbol, quantity } => {
                self.account.sell(self.oracle.as_ref(), &symbol, quantity)
            }
        }
    }

    /// The engine's account, for ledger access
    pub fn account(&self) -> &Account {
        &self.account
    }

    /// Assemble the final statement from the current account state
    ///
    /// # Errors
    ///
    /// Returns an error only if portfolio valuation overflows.
    pub fn statement(&self) -> Result<Statement, AccountError> {
        let mut holdings: Vec<(String, Quantity)> =
            self.account.get_holdings().into_iter().collect();
        // Sort by symbol for deterministic output
        holdings.sort_by(|a, b| a.0.cmp(&b.0));

        Ok(Statement {
            owner: self.account.owner().to_string(),
            cash_balance: self.account.cash_balance(),
            total_deposited: self.account.total_deposited(),
            holdings,
            portfolio_value: self.account.total_portfolio_value(self.oracle.as_ref())?,
            profit_or_loss: self.account.profit_or_loss(self.oracle.as_ref())?,
        })
    }
}
