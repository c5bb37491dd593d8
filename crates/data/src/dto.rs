//! Wire shapes of external payloads and their conversion into domain types.
//!
//! Every payload is deserialized into a strict DTO first. Conversion then
//! sanitizes the numeric content: missing or malformed figures become zero
//! (logged at `warn`) instead of reaching the calculators.

use crate::error::DataError;
use diesel_domain::entities::{PoolSummary, TokenCapState};
use diesel_domain::value_objects::{AlkaneId, Amount, BitcoinPrice};
use primitive_types::U256;
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// One side of a pool as listed by the pool source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenRefDto {
    #[serde(default)]
    pub id: Option<String>,
    pub symbol: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolSummaryDto {
    #[serde(default)]
    pub id: Option<String>,
    pub token0: TokenRefDto,
    pub token1: TokenRefDto,
    #[serde(default)]
    pub tvl_usd: Option<f64>,
    #[serde(default, rename = "vol24hUsd")]
    pub vol_24h_usd: Option<f64>,
}

/// Page of pools returned by the pool source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PoolListDto {
    #[serde(default)]
    pub items: Vec<PoolSummaryDto>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BitcoinPriceDto {
    #[serde(default)]
    pub usd: Option<f64>,
}

/// Token state as returned by an alkane reflection query.
///
/// Supply figures are base-unit integers encoded as strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlkaneReflectionDto {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub symbol: String,
    pub total_supply: String,
    pub cap: String,
    pub minted: String,
    pub value_per_mint: String,
    pub decimals: u8,
}

impl From<PoolSummaryDto> for PoolSummary {
    fn from(dto: PoolSummaryDto) -> Self {
        let pair = format!("{}/{}", dto.token0.symbol, dto.token1.symbol);
        let tvl_usd = usd_figure(dto.tvl_usd, "tvlUsd", &pair);
        let vol_24h_usd = usd_figure(dto.vol_24h_usd, "vol24hUsd", &pair);

        let summary = PoolSummary::new(dto.token0.symbol, dto.token1.symbol, tvl_usd, vol_24h_usd);
        match dto.id {
            Some(id) => summary.with_id(id),
            None => summary,
        }
    }
}

impl BitcoinPriceDto {
    /// The quote, or `None` when it is missing or unusable.
    pub fn into_domain(self) -> Option<BitcoinPrice> {
        let usd = self.usd?;
        match finite_non_negative(usd) {
            Some(value) => Some(BitcoinPrice::new(value)),
            None => {
                warn!(usd, "Discarding invalid BTC price quote");
                None
            }
        }
    }
}

impl TryFrom<AlkaneReflectionDto> for TokenCapState {
    type Error = DataError;

    /// Fails only on an invalid alkane id. An unparseable cap leaves the cap
    /// unknown; other unparseable supply figures are read as zero.
    fn try_from(dto: AlkaneReflectionDto) -> Result<Self, Self::Error> {
        let id: AlkaneId = dto.id.parse()?;
        let decimals = dto.decimals;
        let units = |value: &str, field: &'static str| base_units(value, decimals, field, &id);

        let state = TokenCapState::new(id, dto.name, dto.symbol, decimals)
            .with_minted(units(&dto.minted, "minted").unwrap_or_default())
            .with_value_per_mint(units(&dto.value_per_mint, "value_per_mint").unwrap_or_default())
            .with_total_supply(units(&dto.total_supply, "total_supply").unwrap_or_default());

        Ok(match units(&dto.cap, "cap") {
            Some(cap) => state.with_cap(cap),
            None => state,
        })
    }
}

fn usd_figure(value: Option<f64>, field: &'static str, pair: &str) -> Decimal {
    let Some(raw) = value else {
        return Decimal::ZERO;
    };
    finite_non_negative(raw).unwrap_or_else(|| {
        warn!(pair, field, value = raw, "Discarding invalid pool figure");
        Decimal::ZERO
    })
}

fn finite_non_negative(value: f64) -> Option<Decimal> {
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    Decimal::from_f64(value)
}

fn base_units(value: &str, decimals: u8, field: &'static str, id: &AlkaneId) -> Option<U256> {
    match Amount::from_base_units(value, decimals) {
        Ok(amount) => Some(amount.raw),
        Err(err) => {
            warn!(alkane = %id, field, error = %err, "Discarding malformed supply figure");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel_domain::enums::MintAvailability;
    use rust_decimal_macros::dec;

    #[test]
    fn test_pool_summary_from_json() {
        let json = r#"{
            "id": "2:68441",
            "token0": { "id": "2:0", "symbol": "DIESEL" },
            "token1": { "id": "32:0", "symbol": "frBTC" },
            "tvlUsd": 2000000,
            "vol24hUsd": 15000.5
        }"#;
        let dto: PoolSummaryDto = serde_json::from_str(json).unwrap();
        let pool = PoolSummary::from(dto);

        assert_eq!(pool.id.as_deref(), Some("2:68441"));
        assert_eq!(pool.token0_symbol, "DIESEL");
        assert_eq!(pool.tvl_usd, dec!(2000000));
        assert_eq!(pool.vol_24h_usd, dec!(15000.5));
    }

    #[test]
    fn test_pool_summary_missing_and_negative_figures() {
        let json = r#"{
            "token0": { "symbol": "DIESEL" },
            "token1": { "symbol": "BTC" },
            "vol24hUsd": -12
        }"#;
        let pool = PoolSummary::from(serde_json::from_str::<PoolSummaryDto>(json).unwrap());
        assert_eq!(pool.tvl_usd, Decimal::ZERO);
        assert_eq!(pool.vol_24h_usd, Decimal::ZERO);
        assert!(pool.id.is_none());
    }

    #[test]
    fn test_pool_summary_rejects_missing_symbol() {
        let json = r#"{ "token0": {}, "token1": { "symbol": "BTC" } }"#;
        assert!(serde_json::from_str::<PoolSummaryDto>(json).is_err());
    }

    #[test]
    fn test_bitcoin_price() {
        let dto: BitcoinPriceDto = serde_json::from_str(r#"{ "usd": 97000.5 }"#).unwrap();
        assert_eq!(dto.into_domain().unwrap().usd, dec!(97000.5));

        let dto: BitcoinPriceDto = serde_json::from_str("{}").unwrap();
        assert!(dto.into_domain().is_none());

        let dto = BitcoinPriceDto { usd: Some(f64::NAN) };
        assert!(dto.into_domain().is_none());
    }

    fn reflection() -> AlkaneReflectionDto {
        AlkaneReflectionDto {
            id: "2:0".to_string(),
            name: "DIESEL".to_string(),
            symbol: "DIESEL".to_string(),
            total_supply: "157500000000000".to_string(),
            cap: "500000".to_string(),
            minted: "315000".to_string(),
            value_per_mint: "500000000".to_string(),
            decimals: 8,
        }
    }

    #[test]
    fn test_reflection_into_state() {
        let state = TokenCapState::try_from(reflection()).unwrap();
        assert_eq!(state.id, AlkaneId::DIESEL);
        assert_eq!(state.minted, U256::from(315_000u64));
        assert_eq!(state.cap, Some(U256::from(500_000u64)));
        assert_eq!(state.value_per_mint, U256::from(500_000_000u64));
        assert_eq!(state.total_supply, U256::from(157_500_000_000_000u64));
        assert_eq!(state.decimals, 8);
    }

    #[test]
    fn test_reflection_malformed_figures() {
        let mut dto = reflection();
        dto.cap = "not-a-number".to_string();
        dto.minted = "".to_string();
        let state = TokenCapState::try_from(dto).unwrap();
        assert_eq!(state.cap, None);
        assert!(state.minted.is_zero());
        assert_eq!(state.progress().availability, MintAvailability::Disabled);
    }

    #[test]
    fn test_reflection_zero_cap_is_reached() {
        let mut dto = reflection();
        dto.cap = "0".to_string();
        dto.minted = "0".to_string();
        let state = TokenCapState::try_from(dto).unwrap();
        assert_eq!(state.cap, Some(U256::zero()));
        assert_eq!(state.progress().availability, MintAvailability::CapReached);
    }

    #[test]
    fn test_reflection_invalid_id() {
        let mut dto = reflection();
        dto.id = "diesel".to_string();
        assert!(matches!(
            TokenCapState::try_from(dto),
            Err(DataError::Domain(_))
        ));
    }

    #[test]
    fn test_reflection_schema_is_strict() {
        // Decimals must be an integer, supply figures must be present.
        let json = r#"{ "id": "2:0", "total_supply": "1", "cap": "1", "minted": "0",
                        "value_per_mint": "1", "decimals": "8" }"#;
        assert!(serde_json::from_str::<AlkaneReflectionDto>(json).is_err());

        let json = r#"{ "id": "2:0", "cap": "1", "minted": "0", "value_per_mint": "1",
                        "decimals": 8 }"#;
        assert!(serde_json::from_str::<AlkaneReflectionDto>(json).is_err());
    }
}
