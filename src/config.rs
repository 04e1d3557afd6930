// 7.0: engine configuration. defaults reproduce the reference parameter set
// exactly: 0.01 order size, 0.60 stop, 0.90 take, 0.75 imbalance trigger,
// 100 concurrent trades, $10,000 quote and 0.5 base starting balances.

use crate::types::{Base, Quote};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Fixed size of every simulated order, in base units. Not signal-scaled.
    pub order_size: Decimal,
    /// Absolute per-unit loss (quote units) at which an open trade is cut.
    pub stop_loss: Decimal,
    /// Absolute per-unit profit (quote units) at which an open trade is taken.
    pub take_profit: Decimal,
    /// Imbalance magnitude that triggers an entry.
    pub imbalance_threshold: Decimal,
    /// Open-trade capacity; entries are declined at the cap.
    pub max_open_trades: usize,
    /// Starting quote-currency balance.
    pub initial_quote: Quote,
    /// Starting base-asset balance.
    pub initial_base: Base,
    /// Maximum number of audit events retained in memory.
    pub max_events: usize,
    /// Print audit events as they are emitted.
    pub verbose: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            order_size: dec!(0.01),
            stop_loss: dec!(0.60),
            take_profit: dec!(0.90),
            imbalance_threshold: dec!(0.75),
            max_open_trades: 100,
            initial_quote: Quote::new(dec!(10000)),
            initial_base: Base::new(dec!(0.5)),
            max_events: 10_000,
            verbose: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_parameters() {
        let config = EngineConfig::default();
        assert_eq!(config.order_size, dec!(0.01));
        assert_eq!(config.stop_loss, dec!(0.60));
        assert_eq!(config.take_profit, dec!(0.90));
        assert_eq!(config.imbalance_threshold, dec!(0.75));
        assert_eq!(config.max_open_trades, 100);
        assert_eq!(config.initial_quote.value(), dec!(10000));
        assert_eq!(config.initial_base.value(), dec!(0.5));
    }
}
