use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Listing-level view of an AMM pool as supplied by the pool data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolSummary {
    pub id: Option<String>,
    pub token0_symbol: String,
    pub token1_symbol: String,
    pub tvl_usd: Decimal,
    pub vol_24h_usd: Decimal,
}

impl PoolSummary {
    /// Creates a summary. Negative figures are clamped to zero.
    pub fn new(
        token0_symbol: impl Into<String>,
        token1_symbol: impl Into<String>,
        tvl_usd: Decimal,
        vol_24h_usd: Decimal,
    ) -> Self {
        Self {
            id: None,
            token0_symbol: token0_symbol.into(),
            token1_symbol: token1_symbol.into(),
            tvl_usd: tvl_usd.max(Decimal::ZERO),
            vol_24h_usd: vol_24h_usd.max(Decimal::ZERO),
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// True when either side of the pool is `symbol`.
    pub fn contains_symbol(&self, symbol: &str) -> bool {
        self.token0_symbol == symbol || self.token1_symbol == symbol
    }

    /// `TOKEN0/TOKEN1`
    pub fn pair_name(&self) -> String {
        format!("{}/{}", self.token0_symbol, self.token1_symbol)
    }
}
