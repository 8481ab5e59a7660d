use super::reader_from;
use crate::domain::banknote::Banknote;
use crate::domain::money::Currency;
use crate::error::{AtmError, Result};
use serde::Deserialize;
use std::io::Read;

/// Notes of one denomination loaded into the cassettes.
#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
pub struct StockRecord {
    pub currency: Currency,
    pub denomination: u32,
    pub count: u32,
}

impl StockRecord {
    pub fn banknote(&self) -> Banknote {
        Banknote::new(self.denomination, self.currency)
    }
}

/// Reads cassette stock (`currency, denomination, count`) from a CSV source.
pub struct StockReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> StockReader<R> {
    pub fn new(source: R) -> Self {
        Self {
            reader: reader_from(source),
        }
    }

    /// Reads every stock row, rejecting denominations the currency does not issue.
    pub fn stock(self) -> Result<Vec<StockRecord>> {
        self.reader
            .into_deserialize::<StockRecord>()
            .map(|result| {
                let record = result?;
                if Banknote::denominations(record.currency).contains(&record.banknote()) {
                    Ok(record)
                } else {
                    Err(AtmError::ValidationError(format!(
                        "{} is not a {} banknote",
                        record.denomination, record.currency
                    )))
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_stock() {
        let data = "currency, denomination, count\nPLN, 500, 2\nPLN, 10, 40";
        let stock = StockReader::new(data.as_bytes()).stock().unwrap();

        assert_eq!(stock.len(), 2);
        assert_eq!(stock[0].banknote(), Banknote::new(500, Currency::PLN));
        assert_eq!(stock[0].count, 2);
        assert_eq!(stock[1].count, 40);
    }

    #[test]
    fn test_unknown_denomination_is_rejected() {
        let data = "currency, denomination, count\nPLN, 30, 2";
        let result = StockReader::new(data.as_bytes()).stock();
        assert!(matches!(result, Err(AtmError::ValidationError(_))));
    }
}
