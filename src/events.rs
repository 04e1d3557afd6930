// 8.0: trade lifecycle events. used for audit trails and for notifying a host
// about opens and closes without it having to diff snapshots. the engine keeps
// a bounded in-memory log; retention is EngineConfig::max_events.

use crate::trade::CloseReason;
use crate::types::{Price, Side, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EventId(pub u64);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub timestamp: Timestamp,
    pub payload: EventPayload,
}

impl Event {
    pub fn new(id: EventId, timestamp: Timestamp, payload: EventPayload) -> Self {
        Self {
            id,
            timestamp,
            payload,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EventPayload {
    TradeOpened(TradeOpenedEvent),
    TradeClosed(TradeClosedEvent),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeOpenedEvent {
    pub side: Side,
    pub entry_price: Price,
    pub size: Decimal,
    pub imbalance: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeClosedEvent {
    pub side: Side,
    pub entry_price: Price,
    pub exit_price: Price,
    pub size: Decimal,
    pub pnl: Decimal,
    pub reason: CloseReason,
}
