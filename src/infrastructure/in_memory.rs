use crate::domain::banknote::{Banknote, BanknotesPack};
use crate::domain::credentials::{AuthorizationToken, Card, PinCode};
use crate::domain::money::{Currency, Money};
use crate::domain::ports::{Bank, MoneyDeposit};
use crate::error::{AccountError, AuthorizationError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

#[derive(Debug, Clone)]
struct BankAccount {
    pin: PinCode,
    balance: Money,
}

/// A thread-safe in-memory bank.
///
/// Accounts are keyed by card number. Every successful authorization opens a
/// session identified by a fresh token; the session is closed by the charge
/// that spends the token, whether or not the charge succeeds.
#[derive(Default, Clone)]
pub struct InMemoryBank {
    accounts: Arc<RwLock<HashMap<String, BankAccount>>>,
    sessions: Arc<RwLock<HashMap<String, String>>>,
    issued: Arc<AtomicU64>,
}

impl InMemoryBank {
    /// Creates a bank without accounts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens an account for `card`, replacing any existing one.
    pub async fn open_account(&self, card: Card, pin: PinCode, balance: Money) {
        let mut accounts = self.accounts.write().await;
        accounts.insert(card.number().to_string(), BankAccount { pin, balance });
    }

    pub async fn balance(&self, card: &Card) -> Option<Money> {
        let accounts = self.accounts.read().await;
        accounts.get(card.number()).map(|account| account.balance)
    }

    /// Number of authorizations not yet spent on a charge.
    pub async fn open_sessions(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait]
impl Bank for InMemoryBank {
    async fn authorize(
        &self,
        pin: &PinCode,
        card: &Card,
    ) -> Result<AuthorizationToken, AuthorizationError> {
        let accounts = self.accounts.read().await;
        let account = accounts
            .get(card.number())
            .ok_or(AuthorizationError::UnknownCard)?;
        if account.pin != *pin {
            return Err(AuthorizationError::InvalidPin);
        }

        let serial = self.issued.fetch_add(1, Ordering::Relaxed) + 1;
        let token = format!("TKN-{serial:08}");
        self.sessions
            .write()
            .await
            .insert(token.clone(), card.number().to_string());
        tracing::debug!(%card, token = %token, "session opened");

        Ok(AuthorizationToken::new(token))
    }

    async fn charge(&self, token: AuthorizationToken, amount: Money) -> Result<(), AccountError> {
        let card_number = self
            .sessions
            .write()
            .await
            .remove(token.value())
            .ok_or(AccountError::InvalidToken)?;

        let mut accounts = self.accounts.write().await;
        let account = accounts
            .get_mut(&card_number)
            .ok_or(AccountError::InvalidToken)?;

        let balance = account.balance;
        if balance.currency() != amount.currency() {
            return Err(AccountError::CurrencyMismatch {
                account: balance.currency().to_string(),
                requested: amount.currency().to_string(),
            });
        }
        let remaining = balance
            .amount()
            .checked_sub(amount.amount())
            .ok_or(AccountError::InsufficientFunds {
                requested: amount.amount(),
                available: balance.amount(),
            })?;

        account.balance = Money::new(remaining, balance.currency());
        tracing::debug!(token = token.value(), %amount, "account charged");
        Ok(())
    }
}

/// A thread-safe in-memory set of cash cassettes for a single currency.
///
/// Uses `Arc<RwLock<HashMap<Banknote, u32>>>` so clones share the same stock.
#[derive(Clone)]
pub struct InMemoryMoneyDeposit {
    currency: Currency,
    stock: Arc<RwLock<HashMap<Banknote, u32>>>,
}

impl InMemoryMoneyDeposit {
    /// Creates empty cassettes for `currency`.
    pub fn new(currency: Currency) -> Self {
        Self {
            currency,
            stock: Arc::default(),
        }
    }

    /// Adds `count` notes to the cassette for `banknote`.
    ///
    /// Notes of another currency are refused and the stock stays unchanged.
    pub async fn load(&self, banknote: Banknote, count: u32) -> bool {
        if banknote.currency() != self.currency {
            tracing::warn!(%banknote, currency = %self.currency, "refusing foreign banknotes");
            return false;
        }
        let mut stock = self.stock.write().await;
        let slot = stock.entry(banknote).or_default();
        *slot = slot.saturating_add(count);
        true
    }

    /// Face value of every note in stock.
    pub async fn total(&self) -> u64 {
        let stock = self.stock.read().await;
        stock
            .iter()
            .map(|(banknote, count)| u64::from(banknote.value()) * u64::from(*count))
            .sum()
    }
}

#[async_trait]
impl MoneyDeposit for InMemoryMoneyDeposit {
    async fn currency(&self) -> Currency {
        self.currency
    }

    async fn available_count_of(&self, banknote: Banknote) -> u32 {
        let stock = self.stock.read().await;
        stock.get(&banknote).copied().unwrap_or(0)
    }

    async fn release(&self, pack: BanknotesPack) {
        let mut stock = self.stock.write().await;
        let slot = stock.entry(pack.banknote()).or_default();
        if *slot < pack.count() {
            tracing::error!(
                banknote = %pack.banknote(),
                requested = pack.count(),
                available = *slot,
                "release exceeds stock"
            );
        }
        *slot = slot.saturating_sub(pack.count());
        tracing::debug!(banknote = %pack.banknote(), count = pack.count(), "released");
    }
}
