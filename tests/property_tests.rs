//! Property-based tests for the book, signals, and engine counters.
//!
//! These tests verify invariants hold under random feed traffic.

use obi_scalper::*;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// Strategies for generating feed data. Prices collide often on purpose so
// upserts and deletions hit existing levels.
fn delta_strategy() -> impl Strategy<Value = BookDelta> {
    (90i64..=110i64, -2i64..=5i64, -500i64..=500i64).prop_map(|(price, count, amount)| {
        BookDelta::new(
            Price::new(Decimal::from(price)),
            count,
            Decimal::new(amount, 2), // -5.00 to 5.00
        )
    })
}

fn delta_sequence() -> impl Strategy<Value = Vec<BookDelta>> {
    prop::collection::vec(delta_strategy(), 0..200)
}

fn levels(book: &OrderBook) -> (Vec<Level>, Vec<Level>) {
    (book.bids().collect(), book.asks().collect())
}

proptest! {
    /// No stored price level ever has size <= 0, whatever the feed sends.
    #[test]
    fn stored_sizes_stay_strictly_positive(deltas in delta_sequence()) {
        let mut book = OrderBook::new();
        for delta in &deltas {
            book.apply(delta);
            for level in book.bids().chain(book.asks()) {
                prop_assert!(level.size > Decimal::ZERO);
            }
        }
    }

    /// Deleting a price absent from both sides leaves the book unchanged.
    #[test]
    fn absent_deletion_is_idempotent(deltas in delta_sequence()) {
        let mut book = OrderBook::new();
        for delta in &deltas {
            book.apply(delta);
        }

        // 500 never appears in the generated price range
        let before = levels(&book);
        book.apply(&BookDelta::new(Price::new(dec!(500)), 0, dec!(1)));
        prop_assert_eq!(levels(&book), before);
    }

    /// Imbalance stays in [-1, 1] for every two-sided book.
    #[test]
    fn imbalance_is_bounded(deltas in delta_sequence()) {
        let mut book = OrderBook::new();
        for delta in &deltas {
            book.apply(delta);
        }

        if let Some(signals) = MarketSignals::compute(&book) {
            prop_assert!(signals.imbalance >= dec!(-1));
            prop_assert!(signals.imbalance <= dec!(1));
        }
    }

    /// Microprice lies between best bid and best ask on an uncrossed book.
    #[test]
    fn microprice_between_best_prices(deltas in delta_sequence()) {
        let mut book = OrderBook::new();
        for delta in &deltas {
            book.apply(delta);
        }

        if let Some(signals) = MarketSignals::compute(&book) {
            if signals.best_bid <= signals.best_ask {
                prop_assert!(signals.microprice >= signals.best_bid);
                prop_assert!(signals.microprice <= signals.best_ask);
            }
        }
    }

    /// After any feed sequence, total trades == gains + losses and the
    /// open-trade count never exceeds capacity.
    #[test]
    fn engine_counters_stay_consistent(deltas in delta_sequence()) {
        let mut engine = Engine::new(EngineConfig::default());
        for delta in deltas {
            engine.process(FeedMessage::Delta(delta));

            let stats = engine.stats();
            prop_assert_eq!(stats.total_trades, stats.gains + stats.losses);
            prop_assert!(engine.open_trades().len() <= 100);

            let rate = stats.win_rate();
            prop_assert!(rate >= Decimal::ZERO);
            prop_assert!(rate <= dec!(100));
        }
    }

    /// Every close is accounted: events, counters, and remaining opens agree.
    #[test]
    fn closes_match_events_and_counters(deltas in delta_sequence()) {
        let mut engine = Engine::new(EngineConfig::default());
        let mut closed_total = 0u64;
        let mut opened_total = 0usize;

        for delta in deltas {
            let closed = engine.process(FeedMessage::Delta(delta));
            closed_total += closed.len() as u64;

            for close in &closed {
                match close.reason {
                    CloseReason::TakeProfit => prop_assert!(close.pnl >= dec!(0.90)),
                    CloseReason::StopLoss => prop_assert!(close.pnl <= dec!(-0.60)),
                }
            }
        }

        for event in engine.events() {
            if let EventPayload::TradeOpened(_) = event.payload {
                opened_total += 1;
            }
        }

        prop_assert_eq!(engine.stats().total_trades, closed_total);
        prop_assert_eq!(opened_total, engine.open_trades().len() + closed_total as usize);
    }
}
