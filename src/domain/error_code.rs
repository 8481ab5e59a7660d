use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a withdrawal was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// The requested currency is not the one the dispenser holds.
    WrongCurrency,
    /// The bank rejected the card or PIN.
    AuthorizationFailure,
    /// The amount cannot be paid out exactly from the notes in stock.
    WrongAmount,
    /// The bank refused to charge the account.
    NoFundsOnAccount,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::WrongCurrency => "WRONG_CURRENCY",
            ErrorCode::AuthorizationFailure => "AUTHORIZATION_FAILURE",
            ErrorCode::WrongAmount => "WRONG_AMOUNT",
            ErrorCode::NoFundsOnAccount => "NO_FUNDS_ON_ACCOUNT",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
