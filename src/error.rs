use crate::domain::error_code::ErrorCode;
use thiserror::Error;

/// Crate-level error for everything around the withdrawal pipeline:
/// reading inputs, writing outcomes, validating value objects.
#[derive(Error, Debug)]
pub enum AtmError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Validation error: {0}")]
    ValidationError(String),
}

pub type Result<T> = std::result::Result<T, AtmError>;

/// The typed failure of a withdrawal. Carries exactly one [`ErrorCode`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("ATM operation failed: {code}")]
pub struct AtmOperationError {
    code: ErrorCode,
}

impl AtmOperationError {
    pub fn new(code: ErrorCode) -> Self {
        Self { code }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }
}

impl From<ErrorCode> for AtmOperationError {
    fn from(code: ErrorCode) -> Self {
        Self::new(code)
    }
}

/// Raised by a [`Bank`](crate::domain::ports::Bank) when credentials are rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthorizationError {
    #[error("unknown card")]
    UnknownCard,
    #[error("invalid PIN")]
    InvalidPin,
    #[error("authorization refused: {0}")]
    Refused(String),
}

/// Raised by a [`Bank`](crate::domain::ports::Bank) when an account cannot be charged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    #[error("insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds { requested: u64, available: u64 },
    #[error("account currency {account} does not match {requested}")]
    CurrencyMismatch { account: String, requested: String },
    #[error("authorization token is not valid")]
    InvalidToken,
}
