//! Asynchronous CSV reader with batch interface
//!
//! Provides a batched streaming interface over operation records from a CSV
//! source, using csv-async for parsing and futures streams for iteration.
//! Delegates CSV format concerns to the csv_format module.

use crate::io::csv_format::{convert_csv_record, CsvRecord};
use crate::types::OperationRecord;
use csv_async::AsyncReaderBuilder;
use futures::io::AsyncRead;
use futures::stream::StreamExt;

/// Asynchronous CSV reader
///
/// Provides batch reading interface over operation records.
/// Maintains streaming behavior with constant memory usage.
pub struct AsyncReader<R: AsyncRead + Unpin> {
    csv_reader: csv_async::AsyncDeserializer<R>,
}

impl<R: AsyncRead + Unpin + Send + 'static> AsyncReader<R> {
    /// Create a new AsyncReader from an async reader
    ///
    /// # Arguments
    ///
    /// * `reader` - Async reader providing CSV data
    pub fn new(reader: R) -> Self {
        let csv_reader = AsyncReaderBuilder::new()
            .flexible(true)
            .trim(csv_async::Trim::All)
            .create_deserializer(reader);

        Self { csv_reader }
    }

    /// Read a batch of operation records
    ///
    /// Reads up to `batch_size` records from the CSV source, converting them
    /// to OperationRecords. Invalid records are logged to stderr and skipped.
    ///
    /// # Arguments
    ///
    /// * `batch_size` - Maximum number of records to read
    ///
    /// # Returns
    ///
    /// A vector of successfully converted operation records.
    /// Returns an empty vector when the end of the file is reached.
    pub async fn read_batch(&mut self, batch_size: usize) -> Vec<OperationRecord> {
        let mut batch = Vec::with_capacity(batch_size);
        let mut records = self.csv_reader.deserialize::<CsvRecord>();

        while batch.len() < batch_size {
            match records.next().await {
                Some(Ok(csv_record)) => match convert_csv_record(csv_record) {
                    Ok(operation_record) => batch.push(operation_record),
                    Err(e) => eprintln!("Record conversion error: {}", e),
                },
                Some(Err(e)) => eprintln!("CSV parse error: {}", e),
                None => break,
            }
        }

        batch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::io::Cursor;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_async_reader_read_batch() {
        let csv_content = "op,symbol,quantity,amount\n\
            deposit,,,1000.0\n\
            buy,AAPL,10,\n\
            withdrawal,,,50.0\n";
        let reader = Cursor::new(csv_content.as_bytes());
        let mut async_reader = AsyncReader::new(reader);

        let batch = async_reader.read_batch(2).await;
        assert_eq!(batch.len(), 2);
        assert_eq!(
            batch[0],
            OperationRecord::Deposit {
                amount: dec!(1000.0)
            }
        );
        assert_eq!(
            batch[1],
            OperationRecord::Buy {
                symbol: "AAPL".to_string(),
                quantity: 10,
            }
        );

        let batch = async_reader.read_batch(2).await;
        assert_eq!(batch.len(), 1);
        assert_eq!(
            batch[0],
            OperationRecord::Withdrawal {
                amount: dec!(50.0)
            }
        );
    }

    #[tokio::test]
    async fn test_async_reader_empty_csv() {
        let csv_content = "op,symbol,quantity,amount\n";
        let reader = Cursor::new(csv_content.as_bytes());
        let mut async_reader = AsyncReader::new(reader);

        let batch = async_reader.read_batch(10).await;
        assert_eq!(batch.len(), 0);
    }

    #[tokio::test]
    async fn test_async_reader_skips_invalid_record() {
        let csv_content = "op,symbol,quantity,amount\n\
            transfer,,,100.0\n\
            deposit,,,50.0\n";
        let reader = Cursor::new(csv_content.as_bytes());
        let mut async_reader = AsyncReader::new(reader);

        // First record fails conversion (invalid op), second succeeds
        let batch = async_reader.read_batch(10).await;
        assert_eq!(batch.len(), 1);
        assert_eq!(
            batch[0],
            OperationRecord::Deposit {
                amount: dec!(50.0)
            }
        );
    }

    #[tokio::test]
    async fn test_async_reader_batch_size_larger_than_records() {
        let csv_content = "op,symbol,quantity,amount\ndeposit,,,1000.0\n";
        let reader = Cursor::new(csv_content.as_bytes());
        let mut async_reader = AsyncReader::new(reader);

        let batch = async_reader.read_batch(100).await;
        assert_eq!(batch.len(), 1);
    }

    #[tokio::test]
    async fn test_async_reader_multiple_batches_preserve_order() {
        let csv_content = "op,symbol,quantity,amount\n\
            deposit,,,100.0\n\
            deposit,,,200.0\n\
            deposit,,,300.0\n\
            deposit,,,400.0\n\
            deposit,,,500.0\n";
        let reader = Cursor::new(csv_content.as_bytes());
        let mut async_reader = AsyncReader::new(reader);

        let batch1 = async_reader.read_batch(2).await;
        assert_eq!(batch1.len(), 2);
        assert_eq!(
            batch1[0],
            OperationRecord::Deposit {
                amount: dec!(100.0)
            }
        );

        let batch2 = async_reader.read_batch(2).await;
        assert_eq!(batch2.len(), 2);
        assert_eq!(
            batch2[0],
            OperationRecord::Deposit {
                amount: dec!(300.0)
            }
        );

        let batch3 = async_reader.read_batch(2).await;
        assert_eq!(batch3.len(), 1);
        assert_eq!(
            batch3[0],
            OperationRecord::Deposit {
                amount: dec!(500.0)
            }
        );

        let batch4 = async_reader.read_batch(2).await;
        assert_eq!(batch4.len(), 0);
    }

    #[tokio::test]
    async fn test_async_reader_whitespace_handling() {
        let csv_content = "op,symbol,quantity,amount\n  sell  ,  TSLA  ,  2  ,\n";
        let reader = Cursor::new(csv_content.as_bytes());
        let mut async_reader = AsyncReader::new(reader);

        let batch = async_reader.read_batch(10).await;
        assert_eq!(batch.len(), 1);
        assert_eq!(
            batch[0],
            OperationRecord::Sell {
                symbol: "TSLA".to_string(),
                quantity: 2,
            }
        );
    }
}
