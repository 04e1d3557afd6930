// 3.0: top-of-book signals. microprice is the volume-weighted blend of best
// bid and best ask; imbalance is the normalized volume difference in [-1, 1].
// both need a two-sided book, so compute() returns None otherwise and the
// caller skips the cycle.

use crate::book::OrderBook;
use crate::types::{Price, Side};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketSignals {
    pub best_bid: Price,
    pub best_ask: Price,
    pub bid_volume: Decimal,
    pub ask_volume: Decimal,
    pub microprice: Price,
    pub imbalance: Decimal,
}

impl MarketSignals {
    // 3.1: micro = (bid*v_ask + ask*v_bid) / (v_bid + v_ask)
    //      imb   = (v_bid - v_ask) / (v_bid + v_ask)
    // stored sizes are strictly positive, so the denominator is > 0 whenever
    // both sides are non-empty. no zero-division branch needed.
    pub fn compute(book: &OrderBook) -> Option<Self> {
        let bid = book.best_bid()?;
        let ask = book.best_ask()?;

        let total = bid.size + ask.size;
        let microprice =
            (bid.price.value() * ask.size + ask.price.value() * bid.size) / total;
        let imbalance = (bid.size - ask.size) / total;

        Some(Self {
            best_bid: bid.price,
            best_ask: ask.price,
            bid_volume: bid.size,
            ask_volume: ask.size,
            microprice: Price::new(microprice),
            imbalance,
        })
    }

    /// Reference price a close would execute against: a Buy exits by selling
    /// into the ask side, a Sell buys back at the bid side.
    pub fn mark_price(&self, side: Side) -> Price {
        match side {
            Side::Buy => self.best_ask,
            Side::Sell => self.best_bid,
        }
    }
}
