use crate::error::AtmError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// An ISO 4217 currency code, stored as three uppercase ASCII letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Currency([u8; 3]);

impl Currency {
    /// The machine's home currency.
    pub const PLN: Self = Self(*b"PLN");
    pub const EUR: Self = Self(*b"EUR");
    pub const USD: Self = Self(*b"USD");
    pub const GBP: Self = Self(*b"GBP");

    pub fn code(&self) -> &str {
        // Construction only admits ASCII letters.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self::PLN
    }
}

impl FromStr for Currency {
    type Err = AtmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_uppercase();
        match <[u8; 3]>::try_from(code.as_bytes()) {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_uppercase) => Ok(Self(bytes)),
            _ => Err(AtmError::ValidationError(format!(
                "Invalid currency code: {s:?}"
            ))),
        }
    }
}

impl TryFrom<String> for Currency {
    type Error = AtmError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        currency.code().to_string()
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A whole-unit amount of money in a given currency.
///
/// Amounts in different currencies are never ordered against each other:
/// `partial_cmp` returns `None` when the currencies differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: u64,
    currency: Currency,
}

impl Money {
    pub const fn new(amount: u64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    pub const fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    pub fn amount(&self) -> u64 {
        self.amount
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }
}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        (self.currency == other.currency).then(|| self.amount.cmp(&other.amount))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_parsing() {
        assert_eq!("pln".parse::<Currency>().unwrap(), Currency::PLN);
        assert_eq!(" EUR ".parse::<Currency>().unwrap(), Currency::EUR);
        assert!(matches!(
            "PL".parse::<Currency>(),
            Err(AtmError::ValidationError(_))
        ));
        assert!(matches!(
            "P1N".parse::<Currency>(),
            Err(AtmError::ValidationError(_))
        ));
        assert!("ZŁO".parse::<Currency>().is_err());
    }

    #[test]
    fn test_currency_serde() {
        let json = serde_json::to_string(&Currency::USD).unwrap();
        assert_eq!(json, "\"USD\"");
        let parsed: Currency = serde_json::from_str("\"gbp\"").unwrap();
        assert_eq!(parsed, Currency::GBP);
        assert!(serde_json::from_str::<Currency>("\"GBPX\"").is_err());
    }

    #[test]
    fn test_money_comparison_requires_same_currency() {
        let a = Money::new(20, Currency::PLN);
        let b = Money::new(50, Currency::PLN);
        let c = Money::new(20, Currency::EUR);

        assert!(a < b);
        assert_ne!(a, c);
        assert_eq!(a.partial_cmp(&c), None);
        assert!(!(a < c) && !(a > c));
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(880, Currency::PLN).to_string(), "880 PLN");
        assert!(Money::zero(Currency::EUR).is_zero());
    }
}
