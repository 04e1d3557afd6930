// 10.5 engine/entry.rs: the open pass. at most one entry per cycle, and only
// while capacity remains. a Buy fires on strong bid imbalance and enters at
// the best bid; a Sell fires on strong ask imbalance and enters at the best
// ask (the spread is charged on entry, so the close marks cross the book).
// declined entries are silent: the status message only moves on a fill.

use super::core::Engine;
use crate::events::{EventPayload, TradeOpenedEvent};
use crate::signal::MarketSignals;
use crate::trade::Trade;
use crate::types::{Price, Side};
use rust_decimal::Decimal;

impl Engine {
    pub(super) fn run_entry_pass(&mut self, signals: &MarketSignals) {
        if self.open_trades.len() >= self.config.max_open_trades {
            return;
        }

        let threshold = self.config.imbalance_threshold;
        let size = self.config.order_size;

        // the two triggers are mutually exclusive: imbalance cannot exceed
        // +threshold and -threshold at once
        if signals.imbalance > threshold {
            if self.wallet.can_afford_buy(size, signals.best_bid) {
                self.open_trade(Side::Buy, signals.best_bid, size, signals.imbalance);
            }
        } else if signals.imbalance < -threshold {
            if self.wallet.can_afford_sell(size) {
                self.open_trade(Side::Sell, signals.best_ask, size, signals.imbalance);
            }
        }
    }

    fn open_trade(&mut self, side: Side, entry_price: Price, size: Decimal, imbalance: Decimal) {
        self.wallet.settle_open(side, entry_price, size);
        self.open_trades
            .push(Trade::new(side, entry_price, size, self.current_time));
        self.status = format!("filled: {side} @ {entry_price}");

        self.emit_event(EventPayload::TradeOpened(TradeOpenedEvent {
            side,
            entry_price,
            size,
            imbalance,
        }));
    }
}

#[cfg(test)]
mod tests {
    use crate::book::BookDelta;
    use crate::config::EngineConfig;
    use crate::engine::Engine;
    use crate::feed::FeedMessage;
    use crate::types::{Base, Price, Quote, Side};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn delta(price: Decimal, count: i64, amount: Decimal) -> FeedMessage {
        FeedMessage::Delta(BookDelta::new(Price::new(price), count, amount))
    }

    /// bid 100 x 10 vs ask 101 x 1 -> imbalance 9/11 > 0.75: a Buy opens at
    /// 100 and the wallet moves by the entry notional.
    #[test]
    fn bid_imbalance_opens_a_buy_at_best_bid() {
        let mut engine = Engine::new(EngineConfig::default());
        engine.process(delta(dec!(100), 1, dec!(10)));
        engine.process(delta(dec!(101), 1, dec!(-1)));

        assert_eq!(engine.open_trades().len(), 1);
        let trade = engine.open_trades()[0];
        assert_eq!(trade.side, Side::Buy);
        assert_eq!(trade.entry_price, Price::new(dec!(100)));
        assert_eq!(engine.wallet().quote.value(), dec!(10000) - dec!(100) * dec!(0.01));
        assert_eq!(engine.wallet().base.value(), dec!(0.51));
        assert_eq!(engine.status(), "filled: BUY @ 100");
    }

    #[test]
    fn ask_imbalance_opens_a_sell_at_best_ask() {
        let mut engine = Engine::new(EngineConfig::default());
        engine.process(delta(dec!(100), 1, dec!(1)));
        engine.process(delta(dec!(100.5), 1, dec!(-10)));

        assert_eq!(engine.open_trades().len(), 1);
        let trade = engine.open_trades()[0];
        assert_eq!(trade.side, Side::Sell);
        assert_eq!(trade.entry_price, Price::new(dec!(100.5)));
        assert_eq!(engine.wallet().quote.value(), dec!(10000) + dec!(100.5) * dec!(0.01));
        assert_eq!(engine.wallet().base.value(), dec!(0.49));
    }

    #[test]
    fn weak_imbalance_opens_nothing() {
        let mut engine = Engine::new(EngineConfig::default());
        // 6 vs 2 -> imbalance 0.5, below the trigger
        engine.process(delta(dec!(100), 1, dec!(6)));
        engine.process(delta(dec!(100.5), 1, dec!(-2)));

        assert!(engine.open_trades().is_empty());
        assert_eq!(engine.status(), "engine started");
    }

    #[test]
    fn insufficient_quote_declines_the_buy_silently() {
        let config = EngineConfig {
            initial_quote: Quote::new(dec!(0.5)),
            ..EngineConfig::default()
        };
        let mut engine = Engine::new(config);
        engine.process(delta(dec!(100), 1, dec!(10)));
        engine.process(delta(dec!(100.5), 1, dec!(-1)));

        assert!(engine.open_trades().is_empty());
        assert_eq!(engine.wallet().quote.value(), dec!(0.5));
        assert_eq!(engine.status(), "engine started");
    }

    #[test]
    fn insufficient_base_declines_the_sell_silently() {
        let config = EngineConfig {
            initial_base: Base::new(dec!(0.005)),
            ..EngineConfig::default()
        };
        let mut engine = Engine::new(config);
        engine.process(delta(dec!(100), 1, dec!(1)));
        engine.process(delta(dec!(100.5), 1, dec!(-10)));

        assert!(engine.open_trades().is_empty());
        assert_eq!(engine.wallet().base.value(), dec!(0.005));
    }

    #[test]
    fn capacity_blocks_entries_regardless_of_imbalance() {
        let config = EngineConfig {
            max_open_trades: 2,
            ..EngineConfig::default()
        };
        let mut engine = Engine::new(config);
        engine.process(delta(dec!(100), 1, dec!(10)));
        engine.process(delta(dec!(100.5), 1, dec!(-1)));
        engine.process(delta(dec!(100), 2, dec!(10)));
        assert_eq!(engine.open_trades().len(), 2);

        // imbalance still 9/11, but the cap is reached
        engine.process(delta(dec!(100), 3, dec!(10)));
        assert_eq!(engine.open_trades().len(), 2);
    }

    #[test]
    fn at_most_one_entry_per_cycle() {
        let mut engine = Engine::new(EngineConfig::default());
        engine.process(delta(dec!(100), 1, dec!(10)));
        engine.process(delta(dec!(100.5), 1, dec!(-1)));
        assert_eq!(engine.open_trades().len(), 1);

        engine.process(delta(dec!(99.5), 1, dec!(10)));
        assert_eq!(engine.open_trades().len(), 2);
    }
}
