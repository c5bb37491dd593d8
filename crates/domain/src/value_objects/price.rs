use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// USD price of one BTC as reported by the price oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BitcoinPrice {
    pub usd: Decimal,
}

impl BitcoinPrice {
    /// Negative quotes are clamped to zero.
    pub fn new(usd: Decimal) -> Self {
        Self {
            usd: usd.max(Decimal::ZERO),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.usd.is_zero()
    }

    /// USD value of `btc` coins at this price.
    pub fn value_of(&self, btc: Decimal) -> Decimal {
        btc.saturating_mul(self.usd)
    }
}
