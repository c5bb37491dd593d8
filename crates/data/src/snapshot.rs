//! JSON snapshot source.
//!
//! A snapshot bundles a pool listing, the BTC quote and token reflections in
//! one file, in the same shapes the live sources return. It serves all three
//! source traits.

use crate::dto::{AlkaneReflectionDto, BitcoinPriceDto, PoolListDto};
use crate::error::DataError;
use crate::provider::{PoolQuery, PoolSource, PriceOracle, TokenReflector};
use async_trait::async_trait;
use diesel_domain::entities::{PoolSummary, TokenCapState};
use diesel_domain::value_objects::{AlkaneId, BitcoinPrice};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    #[serde(default)]
    pub pools: PoolListDto,
    #[serde(default)]
    pub bitcoin_price: Option<BitcoinPriceDto>,
    /// Reflections keyed by alkane id (`"2:0"`).
    #[serde(default)]
    pub reflections: HashMap<String, AlkaneReflectionDto>,
}

/// Serves a [`DashboardSnapshot`].
#[derive(Debug, Clone)]
pub struct SnapshotProvider {
    snapshot: DashboardSnapshot,
}

impl SnapshotProvider {
    pub fn new(snapshot: DashboardSnapshot) -> Self {
        Self { snapshot }
    }

    /// # Errors
    /// Returns [`DataError::Json`] if the document does not match the schema.
    pub fn from_json(json: &str) -> Result<Self, DataError> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    /// Reads and parses a snapshot file.
    ///
    /// # Errors
    /// Returns [`DataError::Io`] if the file cannot be read and
    /// [`DataError::Json`] if it cannot be parsed.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let path = path.as_ref();
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| DataError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        let provider = Self::from_json(&contents)?;
        info!(
            path = %path.display(),
            pools = provider.snapshot.pools.items.len(),
            reflections = provider.snapshot.reflections.len(),
            "Loaded dashboard snapshot"
        );
        Ok(provider)
    }

    pub fn snapshot(&self) -> &DashboardSnapshot {
        &self.snapshot
    }
}

#[async_trait]
impl PoolSource for SnapshotProvider {
    async fn list_pools(&self, query: &PoolQuery) -> Result<Vec<PoolSummary>, DataError> {
        let pools: Vec<PoolSummary> = self
            .snapshot
            .pools
            .items
            .iter()
            .cloned()
            .map(PoolSummary::from)
            .collect();
        debug!(total = pools.len(), limit = query.limit, "Listing snapshot pools");
        Ok(query.apply(pools))
    }
}

#[async_trait]
impl PriceOracle for SnapshotProvider {
    async fn bitcoin_price(&self) -> Result<Option<BitcoinPrice>, DataError> {
        Ok(self.snapshot.bitcoin_price.and_then(BitcoinPriceDto::into_domain))
    }
}

#[async_trait]
impl TokenReflector for SnapshotProvider {
    async fn reflect(&self, id: &AlkaneId) -> Result<TokenCapState, DataError> {
        let dto = self
            .snapshot
            .reflections
            .get(&id.to_string())
            .cloned()
            .ok_or(DataError::ReflectionNotFound(*id))?;
        TokenCapState::try_from(dto)
    }
}
