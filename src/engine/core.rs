// 10.1 engine/core.rs: engine state and the per-event cycle. all mutation
// happens here or in the risk/entry passes it calls; readers get owned
// EngineSnapshot copies.

use crate::book::{BookDelta, OrderBook};
use crate::config::EngineConfig;
use crate::events::{Event, EventId, EventPayload};
use crate::feed::FeedMessage;
use crate::signal::MarketSignals;
use crate::stats::{EngineSnapshot, TradeStats};
use crate::trade::{ClosedTrade, Trade};
use crate::types::Timestamp;
use crate::wallet::Wallet;

#[derive(Debug)]
pub struct Engine {
    pub(super) config: EngineConfig,
    pub(super) book: OrderBook,
    pub(super) open_trades: Vec<Trade>,
    pub(super) wallet: Wallet,
    pub(super) stats: TradeStats,
    pub(super) status: String,
    pub(super) last_signals: Option<MarketSignals>,
    pub(super) events: Vec<Event>,
    pub(super) next_event_id: u64,
    // first host-supplied clock value; uptime is measured from here
    pub(super) started_at: Option<Timestamp>,
    pub(super) current_time: Timestamp,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        let wallet = Wallet::new(config.initial_quote, config.initial_base);
        Self {
            config,
            book: OrderBook::new(),
            open_trades: Vec::new(),
            wallet,
            stats: TradeStats::default(),
            status: "engine started".to_string(),
            last_signals: None,
            events: Vec::new(),
            next_event_id: 1,
            started_at: None,
            current_time: Timestamp::from_millis(0),
        }
    }

    pub fn set_time(&mut self, timestamp: Timestamp) {
        if self.started_at.is_none() {
            self.started_at = Some(timestamp);
        }
        self.current_time = timestamp;
    }

    pub fn advance_time(&mut self, millis: i64) {
        self.current_time = Timestamp::from_millis(self.current_time.as_millis() + millis);
    }

    pub fn time(&self) -> Timestamp {
        self.current_time
    }

    // 10.2: the only mutation entry point. heartbeats and control traffic
    // change nothing; a snapshot applies every triple in listed order and
    // still counts as a single cycle.
    pub fn process(&mut self, message: FeedMessage) -> Vec<ClosedTrade> {
        match message {
            FeedMessage::Snapshot(deltas) => {
                for delta in &deltas {
                    self.book.apply(delta);
                }
                self.cycle()
            }
            FeedMessage::Delta(delta) => {
                self.book.apply(&delta);
                self.cycle()
            }
            FeedMessage::Heartbeat | FeedMessage::Ignored => Vec::new(),
        }
    }

    /// Convenience for hosts that already hold a decoded triple.
    pub fn process_delta(&mut self, delta: BookDelta) -> Vec<ClosedTrade> {
        self.process(FeedMessage::Delta(delta))
    }

    // 10.3: one cycle: signal compute (skip on a one-sided book), risk pass,
    // entry pass. cycles never interleave; the feed's delivery order is the
    // serialization.
    fn cycle(&mut self) -> Vec<ClosedTrade> {
        let signals = match MarketSignals::compute(&self.book) {
            Some(signals) => signals,
            None => return Vec::new(),
        };
        self.last_signals = Some(signals);

        let closed = self.run_risk_pass(&signals);
        self.run_entry_pass(&signals);
        closed
    }

    /// Owned render view, refreshed each cycle. Cloning out of the engine is
    /// the synchronization boundary for multi-threaded hosts.
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            best_bid: self.last_signals.map(|s| s.best_bid),
            microprice: self.last_signals.map(|s| s.microprice),
            imbalance: self.last_signals.map(|s| s.imbalance),
            quote_balance: self.wallet.quote,
            base_balance: self.wallet.base,
            total_trades: self.stats.total_trades,
            gains: self.stats.gains,
            losses: self.stats.losses,
            win_rate: self.stats.win_rate(),
            open_trades: self.open_trades.len(),
            status: self.status.clone(),
            uptime_secs: self
                .started_at
                .map(|start| start.elapsed_secs(&self.current_time))
                .unwrap_or(0),
        }
    }

    pub fn book(&self) -> &OrderBook {
        &self.book
    }

    pub fn wallet(&self) -> &Wallet {
        &self.wallet
    }

    pub fn stats(&self) -> &TradeStats {
        &self.stats
    }

    pub fn open_trades(&self) -> &[Trade] {
        &self.open_trades
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn recent_events(&self, count: usize) -> &[Event] {
        let start = self.events.len().saturating_sub(count);
        &self.events[start..]
    }

    pub(super) fn emit_event(&mut self, payload: EventPayload) {
        let event = Event::new(EventId(self.next_event_id), self.current_time, payload);
        self.next_event_id += 1;

        if self.config.verbose {
            println!("[Event {}] {:?}", event.id.0, event.payload);
        }

        self.events.push(event);

        if self.events.len() > self.config.max_events {
            let drain_count = self.events.len() - self.config.max_events;
            self.events.drain(0..drain_count);
        }
    }
}
