// obi-scalper: order-book-imbalance paper trading engine.
// book-driven and deterministic: one feed event in, one full cycle out.
// all computation is in-memory with no external I/O; the websocket transport
// and any renderer are external collaborators.
//
// file map (search X.0 for structs, X.1+ for logic):
//   1.x  types.rs: primitives: Side, Price, Quote, Base, Timestamp
//   2.x  book.rs: two-sided L2 book, feed delta application
//   3.x  signal.rs: microprice and imbalance from top of book
//   4.x  trade.rs: open trades, per-unit pnl, close reasons
//   5.x  wallet.rs: quote/base balances, open and close settlement
//   6.x  stats.rs: trade counters, win rate, render snapshot
//   7.x  config.rs: thresholds, sizes, capacity, event retention
//   8.x  events.rs: trade lifecycle audit events
//   9.x  feed.rs: wire-frame decoding at the feed boundary
//   10.x engine/: per-event cycle: risk pass then entry pass

pub mod book;
pub mod config;
pub mod engine;
pub mod events;
pub mod feed;
pub mod signal;
pub mod stats;
pub mod trade;
pub mod types;
pub mod wallet;

pub use book::{BookDelta, Level, OrderBook};
pub use config::EngineConfig;
pub use engine::Engine;
pub use events::{Event, EventId, EventPayload, TradeClosedEvent, TradeOpenedEvent};
pub use feed::{decode_frame, FeedError, FeedMessage};
pub use signal::MarketSignals;
pub use stats::{EngineSnapshot, TradeStats};
pub use trade::{CloseReason, ClosedTrade, Trade};
pub use types::{Base, Price, Quote, Side, Timestamp};
pub use wallet::Wallet;
