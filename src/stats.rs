// 6.0: aggregate trade counters and the read-only view handed to a renderer.
// total == gains + losses always; a close with pnl exactly zero counts as a
// loss, matching the settlement rule in the risk pass.

use crate::types::{Base, Price, Quote};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeStats {
    pub total_trades: u64,
    pub gains: u64,
    pub losses: u64,
}

impl TradeStats {
    pub fn record_close(&mut self, pnl: Decimal) {
        self.total_trades += 1;
        if pnl > Decimal::ZERO {
            self.gains += 1;
        } else {
            self.losses += 1;
        }
    }

    /// gains / total * 100, or 0 before the first close.
    pub fn win_rate(&self) -> Decimal {
        if self.total_trades == 0 {
            return Decimal::ZERO;
        }
        Decimal::from(self.gains) / Decimal::from(self.total_trades) * dec!(100)
    }
}

/// Owned copy of everything a renderer needs, refreshed once per cycle.
/// Cloning it is the synchronization boundary when the renderer lives on
/// another thread; the engine itself is single-writer and unlocked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub best_bid: Option<Price>,
    pub microprice: Option<Price>,
    pub imbalance: Option<Decimal>,
    pub quote_balance: Quote,
    pub base_balance: Base,
    pub total_trades: u64,
    pub gains: u64,
    pub losses: u64,
    pub win_rate: Decimal,
    pub open_trades: usize,
    pub status: String,
    pub uptime_secs: i64,
}
