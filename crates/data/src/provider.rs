//! Source traits for pools, the BTC price and token reflections.
//!
//! The dashboard never reaches for ambient context: every source is passed
//! in explicitly so calculations can be exercised against fixed data.

use crate::error::DataError;
use async_trait::async_trait;
use diesel_domain::entities::{PoolSummary, TokenCapState};
use diesel_domain::enums::{PoolSortField, SortOrder};
use diesel_domain::value_objects::{AlkaneId, BitcoinPrice};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Pools requested by the price card.
pub const DEFAULT_POOL_LIMIT: usize = 200;

/// Sort and page request sent to a pool source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolQuery {
    pub sort_by: PoolSortField,
    pub order: SortOrder,
    pub limit: usize,
}

impl Default for PoolQuery {
    fn default() -> Self {
        Self {
            sort_by: PoolSortField::Tvl,
            order: SortOrder::Desc,
            limit: DEFAULT_POOL_LIMIT,
        }
    }
}

impl PoolQuery {
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Sorts (stable) and truncates a pool list according to this query.
    ///
    /// For sources that hold unordered data; remote sources apply the query
    /// server-side.
    pub fn apply(&self, mut pools: Vec<PoolSummary>) -> Vec<PoolSummary> {
        pools.sort_by(|a, b| {
            let ordering = self.compare(a, b);
            match self.order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });
        pools.truncate(self.limit);
        pools
    }

    fn compare(&self, a: &PoolSummary, b: &PoolSummary) -> Ordering {
        match self.sort_by {
            PoolSortField::Tvl => a.tvl_usd.cmp(&b.tvl_usd),
            PoolSortField::Volume => a.vol_24h_usd.cmp(&b.vol_24h_usd),
        }
    }
}

/// Lists AMM pools.
#[async_trait]
pub trait PoolSource: Send + Sync {
    /// Returns pools ordered and limited as requested.
    async fn list_pools(&self, query: &PoolQuery) -> Result<Vec<PoolSummary>, DataError>;
}

/// Quotes the native asset price.
#[async_trait]
pub trait PriceOracle: Send + Sync {
    /// `Ok(None)` when the oracle has no quote yet.
    async fn bitcoin_price(&self) -> Result<Option<BitcoinPrice>, DataError>;
}

/// Reads a token contract's supply state.
#[async_trait]
pub trait TokenReflector: Send + Sync {
    async fn reflect(&self, id: &AlkaneId) -> Result<TokenCapState, DataError>;
}
