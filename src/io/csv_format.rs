//! CSV format handling for operation input and report output
//!
//! This module centralizes all CSV format concerns, providing:
//! - CsvRecord structure for deserialization
//! - Conversion from CSV records to domain types
//! - Statement and ledger report serialization
//!
//! All functions are pure (no I/O) for easy testing.

use crate::core::Statement;
use crate::types::{OperationRecord, Quantity, Transaction};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Write;
use std::str::FromStr;

/// CSV record structure for deserialization
///
/// Matches the input CSV format with columns: op, symbol, quantity, amount.
/// All value fields are optional because each operation kind requires a
/// different subset: deposit/withdrawal use amount, buy/sell use symbol and
/// quantity. Presence is validated in [`convert_csv_record`].
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvRecord {
    pub op: String,
    pub symbol: Option<String>,
    pub quantity: Option<String>,
    pub amount: Option<String>,
}

fn parse_amount(amount: Option<String>, op: &str) -> Result<Decimal, String> {
    match amount {
        Some(amount_str) if !amount_str.trim().is_empty() => {
            Decimal::from_str(amount_str.trim())
                .map_err(|_| format!("Invalid amount '{}' for {}", amount_str, op))
        }
        _ => Err(format!("{} requires an amount", op)),
    }
}

fn parse_symbol(symbol: Option<String>, op: &str) -> Result<String, String> {
    match symbol {
        Some(symbol) if !symbol.trim().is_empty() => Ok(symbol.trim().to_string()),
        _ => Err(format!("{} requires a symbol", op)),
    }
}

fn parse_quantity(quantity: Option<String>, op: &str) -> Result<Quantity, String> {
    let quantity_str = match quantity {
        Some(quantity_str) if !quantity_str.trim().is_empty() => quantity_str,
        _ => return Err(format!("{} requires a quantity", op)),
    };

    // Parse as signed first so a negative quantity gets a clear message
    // instead of a generic integer parse failure.
    let parsed = i64::from_str(quantity_str.trim())
        .map_err(|_| format!("Invalid quantity '{}' for {}", quantity_str, op))?;

    Quantity::try_from(parsed)
        .map_err(|_| format!("Invalid quantity '{}' for {}", quantity_str, op))
}

/// Convert a CsvRecord to an OperationRecord
///
/// This function:
/// - Parses the op string into an operation variant
/// - Parses and validates the fields that op requires (amount for
///   deposit/withdrawal; symbol and quantity for buy/sell)
/// - Rejects negative quantities (a zero quantity passes through so the
///   account can reject it with its own error taxonomy)
///
/// Fields the op does not use are ignored if present.
///
/// # Arguments
///
/// * `csv_record` - The deserialized CSV record
///
/// # Returns
///
/// Result containing either:
/// - Ok(OperationRecord) - Successfully converted record
/// - Err(String) - Error message describing the conversion failure
pub fn convert_csv_record(csv_record: CsvRecord) -> Result<OperationRecord, String> {
    match csv_record.op.to_lowercase().as_str() {
        "deposit" => Ok(OperationRecord::Deposit {
            amount: parse_amount(csv_record.amount, "deposit")?,
        }),
        "withdrawal" => Ok(OperationRecord::Withdrawal {
            amount: parse_amount(csv_record.amount, "withdrawal")?,
        }),
        "buy" => Ok(OperationRecord::Buy {
            symbol: parse_symbol(csv_record.symbol, "buy")?,
            quantity: parse_quantity(csv_record.quantity, "buy")?,
        }),
        "sell" => Ok(OperationRecord::Sell {
            symbol: parse_symbol(csv_record.symbol, "sell")?,
            quantity: parse_quantity(csv_record.quantity, "sell")?,
        }),
        other => Err(format!("Invalid operation: '{}'", other)),
    }
}

/// Render holdings as space-joined `SYMBOL:qty` pairs
///
/// The statement's holdings are already symbol-sorted, so the rendering is
/// deterministic. An empty holdings list renders as an empty string.
fn format_holdings(holdings: &[(String, Quantity)]) -> String {
    holdings
        .iter()
        .map(|(symbol, quantity)| format!("{}:{}", symbol, quantity))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Write an account statement to CSV format
///
/// Writes one row with columns: owner, cash, holdings, total_deposited,
/// portfolio_value, profit_or_loss. Amounts are formatted to four decimal
/// places.
///
/// # Arguments
///
/// * `statement` - Final account summary to write
/// * `output` - Mutable reference to a writer for outputting CSV
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(String)` if a write error occurred
pub fn write_statement_csv(statement: &Statement, output: &mut dyn Write) -> Result<(), String> {
    use csv::Writer;

    let mut writer = Writer::from_writer(output);

    writer
        .write_record([
            "owner",
            "cash",
            "holdings",
            "total_deposited",
            "portfolio_value",
            "profit_or_loss",
        ])
        .map_err(|e| format!("Failed to write CSV header: {}", e))?;

    writer
        .write_record(&[
            statement.owner.clone(),
            format!("{:.4}", statement.cash_balance),
            format_holdings(&statement.holdings),
            format!("{:.4}", statement.total_deposited),
            format!("{:.4}", statement.portfolio_value),
            format!("{:.4}", statement.profit_or_loss),
        ])
        .map_err(|e| format!("Failed to write statement record: {}", e))?;

    writer
        .flush()
        .map_err(|e| format!("Failed to flush output: {}", e))?;

    Ok(())
}

/// Write a transaction ledger to CSV format
///
/// Writes one row per transaction in chronological order with columns:
/// kind, amount, symbol, quantity, unit_price, total, balance_after.
/// Fields a kind does not carry are left blank.
///
/// # Arguments
///
/// * `transactions` - Ledger records to write, in chronological order
/// * `output` - Mutable reference to a writer for outputting CSV
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(String)` if a write error occurred
pub fn write_ledger_csv(transactions: &[Transaction], output: &mut dyn Write) -> Result<(), String> {
    use csv::Writer;

    let mut writer = Writer::from_writer(output);

    writer
        .write_record([
            "kind",
            "amount",
            "symbol",
            "quantity",
            "unit_price",
            "total",
            "balance_after",
        ])
        .map_err(|e| format!("Failed to write CSV header: {}", e))?;

    for transaction in transactions {
        let row = match transaction {
            Transaction::Deposit {
                amount,
                balance_after,
            }
            | Transaction::Withdrawal {
                amount,
                balance_after,
            } => [
                transaction.kind().as_str().to_string(),
                format!("{:.4}", amount),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                format!("{:.4}", balance_after),
            ],
            Transaction::Buy {
                symbol,
                quantity,
                unit_price,
                total,
                balance_after,
            }
            | Transaction::Sell {
                symbol,
                quantity,
                unit_price,
                total,
                balance_after,
            } => [
                transaction.kind().as_str().to_string(),
                String::new(),
                symbol.clone(),
                quantity.to_string(),
                format!("{:.4}", unit_price),
                format!("{:.4}", total),
                format!("{:.4}", balance_after),
            ],
        };

        writer
            .write_record(&row)
            .map_err(|e| format!("Failed to write ledger record: {}", e))?;
    }

    writer
        .flush()
        .map_err(|e| format!("Failed to flush output: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn record(
        op: &str,
        symbol: Option<&str>,
        quantity: Option<&str>,
        amount: Option<&str>,
    ) -> CsvRecord {
        CsvRecord {
            op: op.to_string(),
            symbol: symbol.map(|s| s.to_string()),
            quantity: quantity.map(|s| s.to_string()),
            amount: amount.map(|s| s.to_string()),
        }
    }

    #[rstest]
    #[case::deposit("deposit", dec!(1000))]
    #[case::deposit_uppercase("DEPOSIT", dec!(1000))] // case insensitive
    fn test_convert_deposit(#[case] op: &str, #[case] expected: Decimal) {
        let result = convert_csv_record(record(op, None, None, Some("1000")));
        assert_eq!(result, Ok(OperationRecord::Deposit { amount: expected }));
    }

    #[test]
    fn test_convert_withdrawal() {
        let result = convert_csv_record(record("withdrawal", None, None, Some("50.25")));
        assert_eq!(
            result,
            Ok(OperationRecord::Withdrawal {
                amount: dec!(50.25)
            })
        );
    }

    #[rstest]
    #[case::buy("buy")]
    #[case::sell("sell")]
    fn test_convert_trade_ops(#[case] op: &str) {
        let result = convert_csv_record(record(op, Some("AAPL"), Some("10"), None)).unwrap();

        match result {
            OperationRecord::Buy { symbol, quantity }
            | OperationRecord::Sell { symbol, quantity } => {
                assert_eq!(symbol, "AAPL");
                assert_eq!(quantity, 10);
            }
            other => panic!("Expected a trade record, got {:?}", other),
        }
    }

    #[test]
    fn test_convert_trims_symbol_and_parses_amount_whitespace() {
        let result = convert_csv_record(record("buy", Some("  AAPL  "), Some(" 3 "), None));
        assert_eq!(
            result,
            Ok(OperationRecord::Buy {
                symbol: "AAPL".to_string(),
                quantity: 3,
            })
        );

        let result = convert_csv_record(record("deposit", None, None, Some("  100.1234  ")));
        assert_eq!(
            result,
            Ok(OperationRecord::Deposit {
                amount: dec!(100.1234)
            })
        );
    }

    #[test]
    fn test_convert_zero_quantity_passes_through() {
        // Zero reaches the account so it can fail with InvalidQuantity there
        let result = convert_csv_record(record("sell", Some("AAPL"), Some("0"), None));
        assert_eq!(
            result,
            Ok(OperationRecord::Sell {
                symbol: "AAPL".to_string(),
                quantity: 0,
            })
        );
    }

    #[rstest]
    #[case::invalid_op(record("transfer", None, None, Some("10")), "Invalid operation")]
    #[case::deposit_missing_amount(record("deposit", None, None, None), "requires an amount")]
    #[case::deposit_empty_amount(record("deposit", None, None, Some("  ")), "requires an amount")]
    #[case::deposit_bad_amount(record("deposit", None, None, Some("abc")), "Invalid amount")]
    #[case::withdrawal_missing_amount(record("withdrawal", None, None, None), "requires an amount")]
    #[case::buy_missing_symbol(record("buy", None, Some("10"), None), "requires a symbol")]
    #[case::buy_empty_symbol(record("buy", Some(""), Some("10"), None), "requires a symbol")]
    #[case::buy_missing_quantity(record("buy", Some("AAPL"), None, None), "requires a quantity")]
    #[case::buy_bad_quantity(record("buy", Some("AAPL"), Some("ten"), None), "Invalid quantity")]
    #[case::buy_negative_quantity(record("buy", Some("AAPL"), Some("-5"), None), "Invalid quantity")]
    #[case::buy_fractional_quantity(record("buy", Some("AAPL"), Some("1.5"), None), "Invalid quantity")]
    #[case::sell_missing_symbol(record("sell", None, Some("1"), None), "requires a symbol")]
    fn test_convert_errors(#[case] csv_record: CsvRecord, #[case] expected_error: &str) {
        let result = convert_csv_record(csv_record);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains(expected_error));
    }

    #[rstest]
    #[case::no_holdings(vec![], "")]
    #[case::one_holding(vec![("AAPL".to_string(), 10)], "AAPL:10")]
    #[case::two_holdings(
        vec![("AAPL".to_string(), 10), ("TSLA".to_string(), 2)],
        "AAPL:10 TSLA:2"
    )]
    fn test_format_holdings(#[case] holdings: Vec<(String, Quantity)>, #[case] expected: &str) {
        assert_eq!(format_holdings(&holdings), expected);
    }

    #[test]
    fn test_write_statement_csv() {
        let statement = Statement {
            owner: "alice".to_string(),
            cash_balance: dec!(8500),
            total_deposited: dec!(10000),
            holdings: vec![("AAPL".to_string(), 10)],
            portfolio_value: dec!(10000),
            profit_or_loss: dec!(0),
        };

        let mut output = Vec::new();
        write_statement_csv(&statement, &mut output).unwrap();

        let output_str = String::from_utf8(output).unwrap();
        assert_eq!(
            output_str,
            "owner,cash,holdings,total_deposited,portfolio_value,profit_or_loss\n\
             alice,8500.0000,AAPL:10,10000.0000,10000.0000,0.0000\n"
        );
    }

    #[test]
    fn test_write_statement_csv_empty_holdings() {
        let statement = Statement {
            owner: "alice".to_string(),
            cash_balance: dec!(100),
            total_deposited: dec!(100),
            holdings: vec![],
            portfolio_value: dec!(100),
            profit_or_loss: dec!(0),
        };

        let mut output = Vec::new();
        write_statement_csv(&statement, &mut output).unwrap();

        let output_str = String::from_utf8(output).unwrap();
        assert_eq!(
            output_str,
            "owner,cash,holdings,total_deposited,portfolio_value,profit_or_loss\n\
             alice,100.0000,,100.0000,100.0000,0.0000\n"
        );
    }

    #[test]
    fn test_write_ledger_csv() {
        let transactions = vec![
            Transaction::Deposit {
                amount: dec!(10000),
                balance_after: dec!(10000),
            },
            Transaction::Buy {
                symbol: "AAPL".to_string(),
                quantity: 10,
                unit_price: dec!(150),
                total: dec!(1500),
                balance_after: dec!(8500),
            },
            Transaction::Sell {
                symbol: "AAPL".to_string(),
                quantity: 4,
                unit_price: dec!(150),
                total: dec!(600),
                balance_after: dec!(9100),
            },
            Transaction::Withdrawal {
                amount: dec!(100),
                balance_after: dec!(9000),
            },
        ];

        let mut output = Vec::new();
        write_ledger_csv(&transactions, &mut output).unwrap();

        let output_str = String::from_utf8(output).unwrap();
        assert_eq!(
            output_str,
            "kind,amount,symbol,quantity,unit_price,total,balance_after\n\
             deposit,10000.0000,,,,,10000.0000\n\
             buy,,AAPL,10,150.0000,1500.0000,8500.0000\n\
             sell,,AAPL,4,150.0000,600.0000,9100.0000\n\
             withdrawal,100.0000,,,,,9000.0000\n"
        );
    }

    #[test]
    fn test_write_ledger_csv_empty() {
        let mut output = Vec::new();
        write_ledger_csv(&[], &mut output).unwrap();

        let output_str = String::from_utf8(output).unwrap();
        assert_eq!(
            output_str,
            "kind,amount,symbol,quantity,unit_price,total,balance_after\n"
        );
    }
}
