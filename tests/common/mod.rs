#![allow(dead_code)]

use async_trait::async_trait;
use cashpoint::domain::banknote::{Banknote, BanknotesPack};
use cashpoint::domain::credentials::{AuthorizationToken, Card, PinCode};
use cashpoint::domain::money::{Currency, Money};
use cashpoint::domain::ports::{Bank, MoneyDeposit};
use cashpoint::error::{AccountError, AuthorizationError};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const CARD_NUMBER: &str = "5123456789104444";

pub fn card() -> Card {
    Card::new(CARD_NUMBER).unwrap()
}

pub fn pin() -> PinCode {
    PinCode::new(1, 2, 3, 4).unwrap()
}

pub fn pln(amount: u64) -> Money {
    Money::new(amount, Currency::PLN)
}

#[derive(Debug, Default)]
pub struct BankCalls {
    pub authorizations: Vec<(String, String)>,
    pub charges: Vec<(String, Money)>,
}

/// A bank double that records every call and answers as configured.
#[derive(Clone, Default)]
pub struct RecordingBank {
    calls: Arc<Mutex<BankCalls>>,
    reject_authorization: bool,
    refuse_charges: bool,
}

impl RecordingBank {
    pub fn accepting() -> Self {
        Self::default()
    }

    pub fn rejecting_authorization() -> Self {
        Self {
            reject_authorization: true,
            ..Self::default()
        }
    }

    pub fn refusing_charges() -> Self {
        Self {
            refuse_charges: true,
            ..Self::default()
        }
    }

    pub fn authorize_count(&self) -> usize {
        self.calls.lock().unwrap().authorizations.len()
    }

    pub fn charges(&self) -> Vec<(String, Money)> {
        self.calls.lock().unwrap().charges.clone()
    }

    pub fn authorizations(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().authorizations.clone()
    }
}

#[async_trait]
impl Bank for RecordingBank {
    async fn authorize(
        &self,
        pin: &PinCode,
        card: &Card,
    ) -> Result<AuthorizationToken, AuthorizationError> {
        let mut calls = self.calls.lock().unwrap();
        calls
            .authorizations
            .push((pin.expose(), card.number().to_string()));
        if self.reject_authorization {
            return Err(AuthorizationError::InvalidPin);
        }
        Ok(AuthorizationToken::new(format!(
            "token-{}",
            calls.authorizations.len()
        )))
    }

    async fn charge(&self, token: AuthorizationToken, amount: Money) -> Result<(), AccountError> {
        self.calls
            .lock()
            .unwrap()
            .charges
            .push((token.value().to_string(), amount));
        if self.refuse_charges {
            return Err(AccountError::InsufficientFunds {
                requested: amount.amount(),
                available: 0,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct DepositCalls {
    pub stock_queries: Vec<Banknote>,
    pub releases: Vec<BanknotesPack>,
}

/// A dispenser double with fixed stock that records every call.
///
/// Releases are recorded but do not change the stock, so repeated
/// withdrawals see the same snapshot.
#[derive(Clone)]
pub struct RecordingDeposit {
    currency: Currency,
    stock: HashMap<u32, u32>,
    calls: Arc<Mutex<DepositCalls>>,
}

impl RecordingDeposit {
    pub fn empty(currency: Currency) -> Self {
        Self {
            currency,
            stock: HashMap::new(),
            calls: Arc::default(),
        }
    }

    /// `count` notes of every denomination `currency` issues.
    pub fn with_each_denomination(currency: Currency, count: u32) -> Self {
        let mut deposit = Self::empty(currency);
        for banknote in Banknote::denominations(currency) {
            deposit.stock.insert(banknote.value(), count);
        }
        deposit
    }

    pub fn with_stock(currency: Currency, stock: &[(u32, u32)]) -> Self {
        let mut deposit = Self::empty(currency);
        deposit.stock.extend(stock.iter().copied());
        deposit
    }

    pub fn stock_queries(&self) -> Vec<Banknote> {
        self.calls.lock().unwrap().stock_queries.clone()
    }

    pub fn releases(&self) -> Vec<BanknotesPack> {
        self.calls.lock().unwrap().releases.clone()
    }
}

#[async_trait]
impl MoneyDeposit for RecordingDeposit {
    async fn currency(&self) -> Currency {
        self.currency
    }

    async fn available_count_of(&self, banknote: Banknote) -> u32 {
        self.calls.lock().unwrap().stock_queries.push(banknote);
        if banknote.currency() != self.currency {
            return 0;
        }
        self.stock.get(&banknote.value()).copied().unwrap_or(0)
    }

    async fn release(&self, pack: BanknotesPack) {
        self.calls.lock().unwrap().releases.push(pack);
    }
}

/// Packs of one note per denomination for `values`, in the given order.
pub fn one_of_each(currency: Currency, values: &[u32]) -> Vec<BanknotesPack> {
    values
        .iter()
        .map(|value| BanknotesPack::new(1, Banknote::new(*value, currency)))
        .collect()
}
