// 4.0: open trade tracking. pnl = (mark - entry) * side sign, in quote units
// per unit of base (thresholds compare against this directly, not against a
// percentage). a trade closes exactly once, on take-profit or stop-loss.

use crate::types::{Price, Side, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    pub side: Side,
    pub entry_price: Price,
    pub size: Decimal,
    pub opened_at: Timestamp,
}

impl Trade {
    pub fn new(side: Side, entry_price: Price, size: Decimal, timestamp: Timestamp) -> Self {
        Self {
            side,
            entry_price,
            size,
            opened_at: timestamp,
        }
    }

    // 4.1: per-unit paper pnl against the crossing-side reference price
    pub fn pnl(&self, mark_price: Price) -> Decimal {
        (mark_price.value() - self.entry_price.value()) * self.side.sign()
    }
}

/// Why a trade was closed. Both outcomes are terminal; there is no re-entry,
/// cancellation, or modification of an open trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CloseReason {
    TakeProfit,
    StopLoss,
}

impl fmt::Display for CloseReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CloseReason::TakeProfit => write!(f, "take-profit"),
            CloseReason::StopLoss => write!(f, "stop-loss"),
        }
    }
}

/// Record of a completed close, handed back by the risk pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClosedTrade {
    pub trade: Trade,
    pub exit_price: Price,
    pub pnl: Decimal,
    pub reason: CloseReason,
}
