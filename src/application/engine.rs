use crate::domain::banknote::{Banknote, BanknotesPack, Withdrawal};
use crate::domain::breakdown::BreakdownStrategy;
use crate::domain::credentials::{Card, PinCode};
use crate::domain::error_code::ErrorCode;
use crate::domain::money::{Currency, Money};
use crate::domain::ports::{BankBox, MoneyDepositBox};
use crate::error::AtmOperationError;

/// Marker for a machine that has no cash cassettes attached yet.
///
/// An `Atm<Unloaded>` cannot pay out; attach a deposit with [`Atm::with_deposit`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Unloaded;

/// A cash machine: decides whether a withdrawal can be paid out, charges the
/// account and releases the notes.
///
/// The machine keeps no state between withdrawals. Stock is always read from
/// the attached deposit.
pub struct Atm<D = MoneyDepositBox> {
    bank: BankBox,
    currency: Currency,
    strategy: BreakdownStrategy,
    deposit: D,
}

impl Atm<Unloaded> {
    /// Creates a machine operating in `currency`, which also fixes the
    /// denominations it pays out.
    ///
    /// # Arguments
    ///
    /// * `bank` - The bank that authorizes cards and charges accounts.
    /// * `currency` - The machine's operating currency.
    pub fn new(bank: BankBox, currency: Currency) -> Self {
        Self {
            bank,
            currency,
            strategy: BreakdownStrategy::default(),
            deposit: Unloaded,
        }
    }
}

impl<D> Atm<D> {
    pub fn strategy(&self) -> BreakdownStrategy {
        self.strategy
    }

    pub fn with_strategy(mut self, strategy: BreakdownStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Attaches the cash cassettes, replacing any previously attached ones.
    pub fn with_deposit(self, deposit: MoneyDepositBox) -> Atm<MoneyDepositBox> {
        Atm {
            bank: self.bank,
            currency: self.currency,
            strategy: self.strategy,
            deposit,
        }
    }
}

impl Atm<MoneyDepositBox> {
    /// Swaps in another deposit, returning the one that was attached.
    pub fn replace_deposit(&mut self, deposit: MoneyDepositBox) -> MoneyDepositBox {
        std::mem::replace(&mut self.deposit, deposit)
    }

    /// Pays out `amount` to the holder of `card`.
    ///
    /// Steps run strictly in order and the first failure ends the withdrawal:
    /// currency check, authorization, breakdown against live stock, charge,
    /// release. Notes are released only after the account has been charged, so
    /// any error means nothing left the machine.
    pub async fn withdraw(
        &self,
        pin: &PinCode,
        card: &Card,
        amount: Money,
    ) -> Result<Withdrawal, AtmOperationError> {
        let deposit_currency = self.deposit.currency().await;
        if amount.currency() != deposit_currency {
            tracing::warn!(%card, %amount, %deposit_currency, "wrong currency");
            return Err(ErrorCode::WrongCurrency.into());
        }

        let token = self.bank.authorize(pin, card).await.map_err(|error| {
            tracing::warn!(%card, %error, "authorization failed");
            AtmOperationError::new(ErrorCode::AuthorizationFailure)
        })?;
        tracing::debug!(%card, "authorized");

        let Some(packs) = self.breakdown(amount).await else {
            tracing::warn!(%card, %amount, strategy = ?self.strategy, "amount cannot be paid out");
            return Err(ErrorCode::WrongAmount.into());
        };
        tracing::debug!(%card, %amount, packs = packs.len(), "amount resolved");

        self.bank.charge(token, amount).await.map_err(|error| {
            tracing::warn!(%card, %amount, %error, "charge refused");
            AtmOperationError::new(ErrorCode::NoFundsOnAccount)
        })?;
        tracing::debug!(%card, %amount, "charged");

        for pack in &packs {
            self.deposit.release(*pack).await;
        }

        let withdrawal = Withdrawal::new(packs);
        tracing::info!(%card, %amount, banknotes = %withdrawal, "withdrawal complete");
        Ok(withdrawal)
    }

    /// Splits `amount` into packs using the stock currently in the deposit.
    /// A zero amount never touches the stock.
    async fn breakdown(&self, amount: Money) -> Option<Vec<BanknotesPack>> {
        if amount.is_zero() {
            return Some(Vec::new());
        }

        let mut stock = Vec::new();
        for banknote in Banknote::denominations(self.currency) {
            let available = self.deposit.available_count_of(banknote).await;
            stock.push((banknote, available));
        }

        self.strategy.breakdown(amount.amount(), &stock)
    }
}
