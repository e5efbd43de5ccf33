//! Account state and operations
//!
//! This module provides the `Account` struct, the bookkeeping core of the
//! engine. An account owns its cash balance, share holdings, cumulative
//! deposit total, and an append-only transaction ledger.
//!
//! # Invariants
//!
//! - The cash balance never goes negative; every debit is validated first.
//! - Every holdings entry is at least 1; selling a position down to zero
//!   removes its key entirely.
//! - The ledger grows by exactly one record per successful mutation; failed
//!   operations append nothing and change nothing.
//! - `total_deposited` equals the sum of all deposit amounts in the ledger
//!   and is never decremented.
//!
//! # Atomicity
//!
//! Each mutating operation validates its inputs and computes every checked
//! arithmetic result into temporaries before the first field is assigned, so
//! an error leaves the account exactly as it was. Exclusive `&mut self`
//! access serializes the check-then-act sequence; no interleaving is
//! possible through the borrow.

use crate::core::oracle::PriceOracle;
use crate::types::{AccountError, Quantity, Transaction};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Trading account state
///
/// One instance per account holder, created at account opening with zero
/// balances. State accumulates monotonically through the validated
/// operations; there is no explicit destroy.
///
/// Accounts are meant to be explicitly constructed and owned by whatever
/// session or request context uses them, never shared as process-wide state.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// Account holder identity, immutable after creation
    owner: String,

    /// Cash available for withdrawal or trading
    cash_balance: Decimal,

    /// Cumulative sum of all deposits ever made
    ///
    /// Baseline for profit/loss; withdrawals do not decrement it.
    total_deposited: Decimal,

    /// Current per-symbol share quantities; entries are always >= 1
    holdings: HashMap<String, Quantity>,

    /// Append-only chronological record of successful operations
    ledger: Vec<Transaction>,
}

impl Account {
    /// Create a new account with zero balances
    ///
    /// # Arguments
    ///
    /// * `owner` - Opaque identifier of the account holder
    pub fn new(owner: impl Into<String>) -> Self {
        Account {
            owner: owner.into(),
            cash_balance: Decimal::ZERO,
            total_deposited: Decimal::ZERO,
            holdings: HashMap::new(),
            ledger: Vec::new(),
        }
    }

    /// Account holder identity
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Current cash balance
    pub fn cash_balance(&self) -> Decimal {
        self.cash_balance
    }

    /// Cumulative sum of all deposits ever made
    pub fn total_deposited(&self) -> Decimal {
        self.total_deposited
    }

    /// Quantity of `symbol` currently held (0 if absent)
    pub fn held(&self, symbol: &str) -> Quantity {
        self.holdings.get(symbol).copied().unwrap_or(0)
    }

    /// Deposit funds into the account
    ///
    /// Increments both the cash balance and the cumulative deposit total,
    /// then appends a `Deposit` record to the ledger.
    ///
    /// # Arguments
    ///
    /// * `amount` - The amount to deposit (must be strictly positive)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `amount` is zero or negative (`InvalidAmount`)
    /// - Adding the amount to either balance would overflow
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), AccountError> {
        if amount <= Decimal::ZERO {
            return Err(AccountError::invalid_amount("deposit", amount));
        }

        let new_balance = self
            .cash_balance
            .checked_add(amount)
            .ok_or_else(|| AccountError::arithmetic_overflow("deposit"))?;

        let new_total_deposited = self
            .total_deposited
            .checked_add(amount)
            .ok_or_else(|| AccountError::arithmetic_overflow("deposit"))?;

        // Commit and record
        self.cash_balance = new_balance;
        self.total_deposited = new_total_deposited;
        self.ledger.push(Transaction::Deposit {
            amount,
            balance_after: new_balance,
        });

        Ok(())
    }

    /// Withdraw funds from the account
    ///
    /// Decrements the cash balance and appends a `Withdrawal` record. The
    /// cumulative deposit total is untouched.
    ///
    /// # Arguments
    ///
    /// * `amount` - The amount to withdraw (must be strictly positive)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `amount` is zero or negative (`InvalidAmount`)
    /// - `amount` exceeds the cash balance (`InsufficientFunds`)
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), AccountError> {
        if amount <= Decimal::ZERO {
            return Err(AccountError::invalid_amount("withdrawal", amount));
        }

        if amount > self.cash_balance {
            return Err(AccountError::insufficient_funds(amount, self.cash_balance));
        }

        let new_balance = self
            .cash_balance
            .checked_sub(amount)
            .ok_or_else(|| AccountError::arithmetic_overflow("withdrawal"))?;

        // Commit and record
        self.cash_balance = new_balance;
        self.ledger.push(Transaction::Withdrawal {
            amount,
            balance_after: new_balance,
        });

        Ok(())
    }

    /// Buy shares at the oracle price
    ///
    /// Debits `price * quantity` from the cash balance, credits the holdings
    /// entry for `symbol` (creating it if absent), and appends a `Buy` record.
    ///
    /// # Arguments
    ///
    /// * `oracle` - Price source consulted once, at execution
    /// * `symbol` - Stock symbol to buy
    /// * `quantity` - Number of shares (must be at least 1)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `quantity` is zero (`InvalidQuantity`)
    /// - The oracle returns the unknown sentinel (`UnknownSymbol`)
    /// - The total cost exceeds the cash balance (`InsufficientFunds`)
    /// - Cost or holdings arithmetic would overflow
    pub fn buy(
        &mut self,
        oracle: &dyn PriceOracle,
        symbol: &str,
        quantity: Quantity,
    ) -> Result<(), AccountError> {
        if quantity == 0 {
            return Err(AccountError::invalid_quantity("buy"));
        }

        let unit_price = oracle.price(symbol);
        if unit_price <= Decimal::ZERO {
            return Err(AccountError::unknown_symbol(symbol));
        }

        let total = unit_price
            .checked_mul(Decimal::from(quantity))
            .ok_or_else(|| AccountError::arithmetic_overflow("buy"))?;

        if total > self.cash_balance {
            return Err(AccountError::insufficient_funds(total, self.cash_balance));
        }

        let new_balance = self
            .cash_balance
            .checked_sub(total)
            .ok_or_else(|| AccountError::arithmetic_overflow("buy"))?;

        let new_quantity = self
            .held(symbol)
            .checked_add(quantity)
            .ok_or_else(|| AccountError::arithmetic_overflow("buy"))?;

        // Commit and record
        self.cash_balance = new_balance;
        self.holdings.insert(symbol.to_string(), new_quantity);
        self.ledger.push(Transaction::Buy {
            symbol: symbol.to_string(),
            quantity,
            unit_price,
            total,
            balance_after: new_balance,
        });

        Ok(())
    }

    /// Sell shares at the oracle price
    ///
    /// Credits `price * quantity` to the cash balance, debits the holdings
    /// entry for `symbol` (removing the key when the position reaches exactly
    /// zero), and appends a `Sell` record.
    ///
    /// The oracle is consulted before holdings are checked, so a held symbol
    /// the oracle no longer recognizes fails with `UnknownSymbol` rather than
    /// mis-pricing the sale.
    ///
    /// # Arguments
    ///
    /// * `oracle` - Price source consulted once, at execution
    /// * `symbol` - Stock symbol to sell
    /// * `quantity` - Number of shares (must be at least 1)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `quantity` is zero (`InvalidQuantity`)
    /// - The oracle returns the unknown sentinel (`UnknownSymbol`)
    /// - Fewer than `quantity` shares are held (`InsufficientShares`)
    /// - Revenue arithmetic would overflow
    pub fn sell(
        &mut self,
        oracle: &dyn PriceOracle,
        symbol: &str,
        quantity: Quantity,
    ) -> Result<(), AccountError> {
        if quantity == 0 {
            return Err(AccountError::invalid_quantity("sell"));
        }

        let unit_price = oracle.price(symbol);
        if unit_price <= Decimal::ZERO {
            return Err(AccountError::unknown_symbol(symbol));
        }

        let held = self.held(symbol);
        if held < quantity {
            return Err(AccountError::insufficient_shares(symbol, quantity, held));
        }

        let total = unit_price
            .checked_mul(Decimal::from(quantity))
            .ok_or_else(|| AccountError::arithmetic_overflow("sell"))?;

        let new_balance = self
            .cash_balance
            .checked_add(total)
            .ok_or_else(|| AccountError::arithmetic_overflow("sell"))?;

        let remaining = held - quantity;

        // Commit and record
        self.cash_balance = new_balance;
        if remaining == 0 {
            self.holdings.remove(symbol);
        } else {
            self.holdings.insert(symbol.to_string(), remaining);
        }
        self.ledger.push(Transaction::Sell {
            symbol: symbol.to_string(),
            quantity,
            unit_price,
            total,
            balance_after: new_balance,
        });

        Ok(())
    }

    /// Total current value of the portfolio
    ///
    /// Cash balance plus the oracle-priced value of every holding. Holdings
    /// the oracle cannot price contribute nothing; unlike trading operations,
    /// valuation is best-effort and raises no error for unknown symbols.
    ///
    /// Pure read: no side effects, no ledger entry.
    ///
    /// # Errors
    ///
    /// Returns an error only if the valuation sum overflows.
    pub fn total_portfolio_value(
        &self,
        oracle: &dyn PriceOracle,
    ) -> Result<Decimal, AccountError> {
        let mut value = self.cash_balance;

        for (symbol, &quantity) in &self.holdings {
            let price = oracle.price(symbol);
            if price <= Decimal::ZERO {
                // Unpriceable holding contributes nothing
                continue;
            }

            let position = price
                .checked_mul(Decimal::from(quantity))
                .ok_or_else(|| AccountError::arithmetic_overflow("total_portfolio_value"))?;

            value = value
                .checked_add(position)
                .ok_or_else(|| AccountError::arithmetic_overflow("total_portfolio_value"))?;
        }

        Ok(value)
    }

    /// Profit (positive) or loss (negative) against the deposit baseline
    ///
    /// Total portfolio value minus everything ever deposited. Pure read.
    ///
    /// # Errors
    ///
    /// Returns an error only if the underlying valuation overflows.
    pub fn profit_or_loss(&self, oracle: &dyn PriceOracle) -> Result<Decimal, AccountError> {
        let value = self.total_portfolio_value(oracle)?;

        value
            .checked_sub(self.total_deposited)
            .ok_or_else(|| AccountError::arithmetic_overflow("profit_or_loss"))
    }

    /// Snapshot copy of the current holdings
    ///
    /// Mutating the returned map does not affect the account.
    pub fn get_holdings(&self) -> HashMap<String, Quantity> {
        self.holdings.clone()
    }

    /// Snapshot copy of the transaction ledger, in chronological order
    ///
    /// Mutating the returned vector does not affect the account.
    pub fn get_transactions(&self) -> Vec<Transaction> {
        self.ledger.clone()
    }
}
