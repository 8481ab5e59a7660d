use super::banknote::{Banknote, BanknotesPack};
use super::credentials::{AuthorizationToken, Card, PinCode};
use super::money::{Currency, Money};
use crate::error::{AccountError, AuthorizationError};
use async_trait::async_trait;

/// The bank that owns the customer's account.
#[async_trait]
pub trait Bank: Send + Sync {
    /// Checks the card and PIN, returning a token for a single subsequent charge.
    async fn authorize(
        &self,
        pin: &PinCode,
        card: &Card,
    ) -> Result<AuthorizationToken, AuthorizationError>;

    /// Debits `amount` from the account the token was issued for.
    async fn charge(&self, token: AuthorizationToken, amount: Money) -> Result<(), AccountError>;
}

/// The cash cassettes of a machine.
#[async_trait]
pub trait MoneyDeposit: Send + Sync {
    async fn currency(&self) -> Currency;

    /// Notes of `banknote` currently in stock.
    async fn available_count_of(&self, banknote: Banknote) -> u32;

    /// Physically hands out the pack. Stock for it must have been checked beforehand.
    async fn release(&self, pack: BanknotesPack);
}

pub type BankBox = Box<dyn Bank>;
pub type MoneyDepositBox = Box<dyn MoneyDeposit>;
