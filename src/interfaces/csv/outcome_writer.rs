use super::request_reader::WithdrawalRequest;
use crate::domain::banknote::Withdrawal;
use crate::error::{AtmOperationError, Result};
use serde::Serialize;
use std::io::Write;

/// The result of one request, as reported to the operator.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct WithdrawalOutcome {
    /// Masked card number.
    pub card: String,
    pub amount: u64,
    pub currency: String,
    /// `ok`, or the error code the withdrawal failed with.
    pub status: String,
    /// Packs handed out, e.g. `500x1;20x2`. Empty on failure.
    pub banknotes: String,
}

impl WithdrawalOutcome {
    pub fn new(
        request: &WithdrawalRequest,
        result: &std::result::Result<Withdrawal, AtmOperationError>,
    ) -> Self {
        let (status, banknotes) = match result {
            Ok(withdrawal) => ("ok".to_string(), withdrawal.to_string()),
            Err(err) => (err.code().to_string(), String::new()),
        };
        Self {
            card: request.card.masked(),
            amount: request.amount,
            currency: request.currency.to_string(),
            status,
            banknotes,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == "ok"
    }
}

/// Writes withdrawal outcomes as CSV, one row per request.
pub struct OutcomeWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> OutcomeWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_outcome(&mut self, outcome: &WithdrawalOutcome) -> Result<()> {
        self.writer.serialize(outcome)?;
        Ok(())
    }

    pub fn write_outcomes<'a>(
        &mut self,
        outcomes: impl IntoIterator<Item = &'a WithdrawalOutcome>,
    ) -> Result<()> {
        for outcome in outcomes {
            self.write_outcome(outcome)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
