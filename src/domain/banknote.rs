use super::money::Currency;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A banknote denomination: a face value in a currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Banknote {
    value: u32,
    currency: Currency,
}

impl Banknote {
    pub const fn new(value: u32, currency: Currency) -> Self {
        Self { value, currency }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Every denomination issued for `currency`, largest first.
    ///
    /// Currencies without a known note series yield an empty list.
    pub fn denominations(currency: Currency) -> Vec<Banknote> {
        let values: &[u32] = match currency.code() {
            "PLN" => &[500, 200, 100, 50, 20, 10],
            "EUR" => &[500, 200, 100, 50, 20, 10, 5],
            "USD" => &[100, 50, 20, 10, 5, 1],
            "GBP" => &[50, 20, 10, 5],
            _ => &[],
        };
        values
            .iter()
            .map(|value| Banknote::new(*value, currency))
            .collect()
    }
}

impl fmt::Display for Banknote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.currency)
    }
}

/// A number of notes of a single denomination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BanknotesPack {
    count: u32,
    banknote: Banknote,
}

impl BanknotesPack {
    pub const fn new(count: u32, banknote: Banknote) -> Self {
        Self { count, banknote }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn banknote(&self) -> Banknote {
        self.banknote
    }

    pub fn value(&self) -> u64 {
        u64::from(self.count) * u64::from(self.banknote.value)
    }
}

impl fmt::Display for BanknotesPack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.banknote.value, self.count)
    }
}

/// The notes handed out by a successful withdrawal.
///
/// Holds only non-empty packs, ordered by face value, largest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Withdrawal {
    packs: Vec<BanknotesPack>,
}

impl Withdrawal {
    pub fn new(packs: impl IntoIterator<Item = BanknotesPack>) -> Self {
        let mut packs: Vec<BanknotesPack> =
            packs.into_iter().filter(|pack| pack.count > 0).collect();
        packs.sort_by(|a, b| b.banknote.value.cmp(&a.banknote.value));
        Self { packs }
    }

    pub fn packs(&self) -> &[BanknotesPack] {
        &self.packs
    }

    pub fn is_empty(&self) -> bool {
        self.packs.is_empty()
    }

    /// Sum of face values over every note in the withdrawal.
    pub fn total(&self) -> u64 {
        self.packs.iter().map(BanknotesPack::value).sum()
    }
}

impl<'a> IntoIterator for &'a Withdrawal {
    type Item = &'a BanknotesPack;
    type IntoIter = std::slice::Iter<'a, BanknotesPack>;

    fn into_iter(self) -> Self::IntoIter {
        self.packs.iter()
    }
}

impl fmt::Display for Withdrawal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, pack) in self.packs.iter().enumerate() {
            if i > 0 {
                f.write_str(";")?;
            }
            write!(f, "{pack}")?;
        }
        Ok(())
    }
}
