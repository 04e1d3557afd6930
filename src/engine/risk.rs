// 10.4 engine/risk.rs: the close pass. every open trade is marked against the
// crossing-side reference price and closed when pnl reaches take-profit or
// falls to stop-loss. all trades are evaluated once per cycle against the same
// signals, so closing one never changes another's eligibility.

use super::core::Engine;
use crate::events::{EventPayload, TradeClosedEvent};
use crate::signal::MarketSignals;
use crate::trade::{CloseReason, ClosedTrade};

impl Engine {
    pub(super) fn run_risk_pass(&mut self, signals: &MarketSignals) -> Vec<ClosedTrade> {
        let take_profit = self.config.take_profit;
        let stop_loss = self.config.stop_loss;

        // collect-then-compact: qualifying trades are pulled out in one scan,
        // settlement happens afterwards
        let mut closed = Vec::new();
        self.open_trades.retain(|trade| {
            let mark = signals.mark_price(trade.side);
            let pnl = trade.pnl(mark);

            if pnl >= take_profit {
                closed.push(ClosedTrade {
                    trade: *trade,
                    exit_price: mark,
                    pnl,
                    reason: CloseReason::TakeProfit,
                });
                false
            } else if pnl <= -stop_loss {
                closed.push(ClosedTrade {
                    trade: *trade,
                    exit_price: mark,
                    pnl,
                    reason: CloseReason::StopLoss,
                });
                false
            } else {
                true
            }
        });

        for close in &closed {
            self.wallet
                .settle_close(close.trade.side, close.exit_price, close.trade.size);
            self.stats.record_close(close.pnl);

            self.emit_event(EventPayload::TradeClosed(TradeClosedEvent {
                side: close.trade.side,
                entry_price: close.trade.entry_price,
                exit_price: close.exit_price,
                size: close.trade.size,
                pnl: close.pnl,
                reason: close.reason,
            }));
        }

        closed
    }
}
