//! Loads source data and hands it to the calculators.
//!
//! Source failures never propagate to the price card: a failed pool listing
//! means no estimate, a failed quote means no BTC price.

use crate::error::DataError;
use crate::provider::{PoolQuery, PoolSource, PriceOracle, TokenReflector};
use diesel_domain::entities::TokenCapState;
use diesel_domain::pricing::{PriceEstimate, estimate_price};
use diesel_domain::value_objects::AlkaneId;
use std::sync::Arc;
use tracing::{debug, warn};

/// Dashboard data access over injected sources.
#[derive(Clone)]
pub struct DashboardLoader {
    pools: Arc<dyn PoolSource>,
    oracle: Arc<dyn PriceOracle>,
    reflector: Arc<dyn TokenReflector>,
    query: PoolQuery,
}

impl DashboardLoader {
    pub fn new(
        pools: Arc<dyn PoolSource>,
        oracle: Arc<dyn PriceOracle>,
        reflector: Arc<dyn TokenReflector>,
    ) -> Self {
        Self {
            pools,
            oracle,
            reflector,
            query: PoolQuery::default(),
        }
    }

    #[must_use]
    pub fn with_query(mut self, query: PoolQuery) -> Self {
        self.query = query;
        self
    }

    /// Price estimate for `symbol`, `None` when no pool holds it or the pool
    /// listing failed.
    pub async fn price_estimate(&self, symbol: &str) -> Option<PriceEstimate> {
        let pools = match self.pools.list_pools(&self.query).await {
            Ok(pools) => pools,
            Err(err) => {
                warn!(error = %err, "Pool listing unavailable");
                return None;
            }
        };
        let btc_price = self.oracle.bitcoin_price().await.unwrap_or_else(|err| {
            warn!(error = %err, "BTC price unavailable");
            None
        });
        debug!(pools = pools.len(), symbol, "Estimating price from pool listing");
        estimate_price(&pools, symbol, btc_price)
    }

    /// Current supply state of a token.
    ///
    /// # Errors
    /// Propagates the reflector's error so the caller can show it.
    pub async fn token_state(&self, id: &AlkaneId) -> Result<TokenCapState, DataError> {
        self.reflector.reflect(id).await.inspect_err(|err| {
            warn!(alkane = %id, error = %err, "Failed to load token data");
        })
    }
}
