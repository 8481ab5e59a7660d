//! Splitting an amount into banknotes from the stock at hand.
//!
//! Both strategies take `stock` as `(banknote, available count)` pairs ordered
//! by face value, largest first, and return the packs to release in the same
//! order with empty packs left out. `None` means the amount cannot be paid out
//! exactly.

use super::banknote::{Banknote, BanknotesPack};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreakdownStrategy {
    /// Largest note first. Exact for canonical note series such as PLN or EUR.
    #[default]
    Greedy,
    /// Bounded minimum-note search. Finds a split whenever one exists.
    Exact,
}

impl BreakdownStrategy {
    pub fn breakdown(&self, amount: u64, stock: &[(Banknote, u32)]) -> Option<Vec<BanknotesPack>> {
        if amount == 0 {
            return Some(Vec::new());
        }
        match self {
            BreakdownStrategy::Greedy => greedy(amount, stock),
            BreakdownStrategy::Exact => exact(amount, stock),
        }
    }
}

fn greedy(amount: u64, stock: &[(Banknote, u32)]) -> Option<Vec<BanknotesPack>> {
    let mut remaining = amount;
    let mut packs = Vec::new();

    for (banknote, available) in stock {
        let value = u64::from(banknote.value());
        // Bounded by `available`, so the narrowing cannot truncate.
        let count = (remaining / value).min(u64::from(*available)) as u32;
        if count > 0 {
            let pack = BanknotesPack::new(count, *banknote);
            remaining -= pack.value();
            packs.push(pack);
        }
    }

    (remaining == 0).then_some(packs)
}

const UNREACHABLE: u64 = u64::MAX;

/// Largest search table `exact` builds. Residues beyond it are split greedily.
const MAX_TABLE_CELLS: usize = 1 << 20;

fn exact(amount: u64, stock: &[(Banknote, u32)]) -> Option<Vec<BanknotesPack>> {
    let stocked: Vec<(Banknote, u32)> = stock
        .iter()
        .filter(|(_, count)| *count > 0)
        .copied()
        .collect();

    let unit = stocked
        .iter()
        .map(|(banknote, _)| u64::from(banknote.value()))
        .fold(0, gcd);
    if unit == 0 || amount % unit != 0 {
        return None;
    }
    let available: u64 = stocked
        .iter()
        .map(|(banknote, count)| u64::from(banknote.value()) * u64::from(*count))
        .sum();
    if amount > available {
        return None;
    }

    let steps: Vec<u64> = stocked
        .iter()
        .map(|(banknote, _)| u64::from(banknote.value()) / unit)
        .collect();
    let mut limits: Vec<u64> = stocked.iter().map(|(_, count)| u64::from(*count)).collect();
    let (top, largest) = steps
        .iter()
        .copied()
        .enumerate()
        .max_by_key(|(_, step)| *step)?;

    // Any `largest` smaller notes contain a subset worth a whole number of
    // largest notes, and swapping it for them saves notes. So a fewest-note
    // split keeps fewer than `largest` smaller notes or leaves fewer than
    // `largest` largest notes in stock, and either way holds at least `preset`
    // largest notes.
    let mut target = amount / unit;
    let preset = (target.saturating_sub(largest.saturating_mul(largest)) / largest)
        .min(limits[top].saturating_sub(largest));
    target -= preset * largest;
    limits[top] -= preset;

    let Some(target) = usize::try_from(target)
        .ok()
        .filter(|cells| *cells < MAX_TABLE_CELLS)
    else {
        tracing::debug!(amount, "split table too large, splitting greedily");
        return greedy(amount, stock);
    };

    // notes[a]: fewest notes summing to a * unit using the denominations seen so far.
    let mut notes = vec![UNREACHABLE; target + 1];
    notes[0] = 0;
    let mut taken: Vec<Vec<u32>> = Vec::with_capacity(stocked.len());

    for (step, limit) in steps.iter().zip(&limits) {
        let step = usize::try_from(*step).ok()?;
        let limit = usize::try_from(*limit).unwrap_or(usize::MAX);
        let (next, take) = add_denomination(&notes, step, limit);
        notes = next;
        taken.push(take);
    }

    if notes[target] == UNREACHABLE {
        return None;
    }

    let mut rest = target;
    let mut counts = vec![0u64; stocked.len()];
    for (i, step) in steps.iter().enumerate().rev() {
        let take = taken[i][rest];
        counts[i] = u64::from(take);
        rest -= take as usize * *step as usize;
    }
    debug_assert_eq!(rest, 0);
    counts[top] += preset;

    stocked
        .iter()
        .zip(counts)
        .filter(|(_, count)| *count > 0)
        .map(|((banknote, _), count)| {
            u32::try_from(count)
                .ok()
                .map(|count| BanknotesPack::new(count, *banknote))
        })
        .collect()
}

/// One bounded-knapsack layer: allows up to `limit` notes of size `step` on top of `notes`.
///
/// Within each residue class modulo `step` the best predecessor is a sliding-window
/// minimum, kept in a monotone deque.
fn add_denomination(notes: &[u64], step: usize, limit: usize) -> (Vec<u64>, Vec<u32>) {
    let len = notes.len();
    let mut next = vec![UNREACHABLE; len];
    let mut take = vec![0u32; len];

    for residue in 0..step.min(len) {
        let mut window: VecDeque<(usize, i64)> = VecDeque::new();
        let mut j = 0usize;
        loop {
            let a = residue + j * step;
            if a >= len {
                break;
            }
            if notes[a] != UNREACHABLE {
                let key = notes[a] as i64 - j as i64;
                while window.back().is_some_and(|(_, k)| *k >= key) {
                    window.pop_back();
                }
                window.push_back((j, key));
            }
            while window.front().is_some_and(|(t, _)| j - t > limit) {
                window.pop_front();
            }
            if let Some((t, key)) = window.front() {
                next[a] = (key + j as i64) as u64;
                take[a] = (j - t) as u32;
            }
            j += 1;
        }
    }

    (next, take)
}

fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 { a } else { gcd(b, a % b) }
}
