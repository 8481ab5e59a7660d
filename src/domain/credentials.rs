use crate::error::AtmError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A four-digit PIN. The digits are never printed.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PinCode([u8; 4]);

impl PinCode {
    pub fn new(d1: u8, d2: u8, d3: u8, d4: u8) -> Result<Self, AtmError> {
        let digits = [d1, d2, d3, d4];
        if digits.iter().all(|d| *d <= 9) {
            Ok(Self(digits))
        } else {
            Err(AtmError::ValidationError(
                "PIN digits must be between 0 and 9".to_string(),
            ))
        }
    }

    /// The PIN in the textual form banks expect, e.g. `"1234"`.
    pub fn expose(&self) -> String {
        self.0.iter().map(|d| char::from(b'0' + d)).collect()
    }
}

impl FromStr for PinCode {
    type Err = AtmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits: Vec<u8> = s
            .trim()
            .chars()
            .map(|c| c.to_digit(10).map(|d| d as u8))
            .collect::<Option<_>>()
            .ok_or_else(|| AtmError::ValidationError("PIN must contain only digits".to_string()))?;
        match digits.as_slice() {
            [d1, d2, d3, d4] => Self::new(*d1, *d2, *d3, *d4),
            _ => Err(AtmError::ValidationError(
                "PIN must have exactly 4 digits".to_string(),
            )),
        }
    }
}

impl TryFrom<String> for PinCode {
    type Error = AtmError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PinCode> for String {
    fn from(pin: PinCode) -> Self {
        pin.expose()
    }
}

impl fmt::Debug for PinCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PinCode(****)")
    }
}

impl fmt::Display for PinCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("****")
    }
}

/// A payment card, identified by its number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Card(String);

impl Card {
    pub fn new(number: impl Into<String>) -> Result<Self, AtmError> {
        let number = number.into().trim().to_string();
        if number.is_empty() {
            return Err(AtmError::ValidationError(
                "Card number must not be empty".to_string(),
            ));
        }
        Ok(Self(number))
    }

    pub fn number(&self) -> &str {
        &self.0
    }

    /// The card number with all but the last four characters replaced by `*`.
    pub fn masked(&self) -> String {
        let visible = self.0.chars().count().saturating_sub(4);
        self.0
            .chars()
            .enumerate()
            .map(|(i, c)| if i < visible { '*' } else { c })
            .collect()
    }
}

impl TryFrom<String> for Card {
    type Error = AtmError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.0
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.masked())
    }
}

/// Proof of a successful authorization.
///
/// Deliberately neither `Clone` nor `Copy`: [`Bank::charge`](super::ports::Bank::charge)
/// takes it by value, so a token can be spent once.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct AuthorizationToken(String);

impl AuthorizationToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_from_digits() {
        let pin = PinCode::new(1, 2, 3, 4).unwrap();
        assert_eq!(pin.expose(), "1234");
        assert!(matches!(
            PinCode::new(1, 2, 3, 10),
            Err(AtmError::ValidationError(_))
        ));
    }

    #[test]
    fn test_pin_parsing() {
        assert_eq!("0007".parse::<PinCode>().unwrap().expose(), "0007");
        assert!("123".parse::<PinCode>().is_err());
        assert!("12345".parse::<PinCode>().is_err());
        assert!("12a4".parse::<PinCode>().is_err());
    }

    #[test]
    fn test_pin_is_never_printed() {
        let pin = PinCode::new(9, 8, 7, 6).unwrap();
        assert_eq!(format!("{pin:?}"), "PinCode(****)");
        assert_eq!(pin.to_string(), "****");
    }

    #[test]
    fn test_card_masking() {
        let card = Card::new("5123456789104444").unwrap();
        assert_eq!(card.number(), "5123456789104444");
        assert_eq!(card.to_string(), "************4444");
        assert_eq!(Card::new("123").unwrap().masked(), "123");
        assert!(Card::new("   ").is_err());
    }
}
