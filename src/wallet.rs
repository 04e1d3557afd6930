// 5.0: paper wallet. two balances, mutated only by trade settlement: a buy
// moves quote into base at the entry price, a close reverses the opening
// transfer at the mark price. balances can go anywhere the settlement math
// takes them; affordability is the entry policy's check, not the wallet's.

use crate::types::{Base, Price, Quote, Side};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallet {
    pub quote: Quote,
    pub base: Base,
}

impl Wallet {
    pub fn new(quote: Quote, base: Base) -> Self {
        Self { quote, base }
    }

    pub fn can_afford_buy(&self, size: Decimal, price: Price) -> bool {
        self.quote.value() >= size * price.value()
    }

    pub fn can_afford_sell(&self, size: Decimal) -> bool {
        self.base.value() >= size
    }

    // 5.1: opening transfer. Buy: quote -> base at price. Sell: base -> quote.
    pub fn settle_open(&mut self, side: Side, price: Price, size: Decimal) {
        let notional = Quote::new(size * price.value());
        let inventory = Base::new(size);
        match side {
            Side::Buy => {
                self.quote = self.quote.sub(notional);
                self.base = self.base.add(inventory);
            }
            Side::Sell => {
                self.quote = self.quote.add(notional);
                self.base = self.base.sub(inventory);
            }
        }
    }

    // 5.2: closing transfer reverses the open at the mark price.
    pub fn settle_close(&mut self, side: Side, mark_price: Price, size: Decimal) {
        self.settle_open(side.opposite(), mark_price, size);
    }
}
