use super::reader_from;
use crate::domain::credentials::{Card, PinCode};
use crate::domain::money::{Currency, Money};
use crate::error::{AtmError, Result};
use serde::Deserialize;
use std::io::Read;

/// A bank account to open before the machine starts serving requests.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct AccountRecord {
    pub card: Card,
    pub pin: PinCode,
    pub balance: u64,
    pub currency: Currency,
}

impl AccountRecord {
    pub fn balance(&self) -> Money {
        Money::new(self.balance, self.currency)
    }
}

/// Reads bank accounts (`card, pin, balance, currency`) from a CSV source.
pub struct AccountReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> AccountReader<R> {
    pub fn new(source: R) -> Self {
        Self {
            reader: reader_from(source),
        }
    }

    /// Reads every account. Unlike requests, a single bad row fails the whole file.
    pub fn accounts(self) -> Result<Vec<AccountRecord>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(AtmError::from))
            .collect()
    }
}
