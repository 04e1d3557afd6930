// 2.0: two-sided L2 order book, keyed by price. bids best = highest, asks
// best = lowest. applies raw feed deltas; holds the invariant that every
// stored size is strictly positive (a level with size <= 0 is deleted, never
// stored).

use crate::types::Price;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One feed triple: `count <= 0` deletes the price level, `count > 0` upserts
/// a bid when `amount > 0` and an ask of `|amount|` when `amount < 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDelta {
    pub price: Price,
    pub count: i64,
    pub amount: Decimal,
}

impl BookDelta {
    pub fn new(price: Price, count: i64, amount: Decimal) -> Self {
        Self {
            price,
            count,
            amount,
        }
    }
}

/// Best-of-side query result: resting price and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Level {
    pub price: Price,
    pub size: Decimal,
}

#[derive(Debug, Clone, Default)]
pub struct OrderBook {
    // bids sorted ascending by key; best bid is the last entry
    bids: BTreeMap<Price, Decimal>,
    // asks sorted ascending by key; best ask is the first entry
    asks: BTreeMap<Price, Decimal>,
}

impl OrderBook {
    pub fn new() -> Self {
        Self::default()
    }

    // 2.1: the only mutation path. deletion is side-agnostic: a `count <= 0`
    // delta removes the price from both maps, matching the upstream feed
    // contract (no-op on a side that does not hold the price).
    pub fn apply(&mut self, delta: &BookDelta) {
        if delta.count > 0 {
            if delta.amount > Decimal::ZERO {
                self.bids.insert(delta.price, delta.amount);
            } else if delta.amount < Decimal::ZERO {
                self.asks.insert(delta.price, delta.amount.abs());
            }
            // amount == 0 with a positive count never stores a level
        } else {
            self.bids.remove(&delta.price);
            self.asks.remove(&delta.price);
        }
    }

    /// Highest resting bid, `None` when the side is empty.
    pub fn best_bid(&self) -> Option<Level> {
        self.bids
            .iter()
            .next_back()
            .map(|(price, size)| Level {
                price: *price,
                size: *size,
            })
    }

    /// Lowest resting ask, `None` when the side is empty.
    pub fn best_ask(&self) -> Option<Level> {
        self.asks.iter().next().map(|(price, size)| Level {
            price: *price,
            size: *size,
        })
    }

    pub fn bid_depth(&self) -> usize {
        self.bids.len()
    }

    pub fn ask_depth(&self) -> usize {
        self.asks.len()
    }

    pub fn is_two_sided(&self) -> bool {
        !self.bids.is_empty() && !self.asks.is_empty()
    }

    pub fn bids(&self) -> impl Iterator<Item = Level> + '_ {
        self.bids.iter().rev().map(|(price, size)| Level {
            price: *price,
            size: *size,
        })
    }

    pub fn asks(&self) -> impl Iterator<Item = Level> + '_ {
        self.asks.iter().map(|(price, size)| Level {
            price: *price,
            size: *size,
        })
    }

    #[cfg(test)]
    pub(crate) fn contains(&self, price: Price) -> bool {
        self.bids.contains_key(&price) || self.asks.contains_key(&price)
    }
}
