use super::reader_from;
use crate::domain::credentials::{Card, PinCode};
use crate::domain::money::{Currency, Money};
use crate::error::{AtmError, Result};
use serde::Deserialize;
use std::io::Read;

/// One withdrawal a customer asks the machine for.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct WithdrawalRequest {
    pub card: Card,
    pub pin: PinCode,
    pub amount: u64,
    pub currency: Currency,
}

impl WithdrawalRequest {
    pub fn money(&self) -> Money {
        Money::new(self.amount, self.currency)
    }
}

/// Reads withdrawal requests (`card, pin, amount, currency`) from a CSV source.
pub struct RequestReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> RequestReader<R> {
    /// Creates a new `RequestReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        Self {
            reader: reader_from(source),
        }
    }

    /// Returns an iterator that lazily reads and deserializes requests.
    ///
    /// A malformed row yields an error for that row only; reading continues
    /// with the next one.
    pub fn requests(self) -> impl Iterator<Item = Result<WithdrawalRequest>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(AtmError::from))
    }
}
