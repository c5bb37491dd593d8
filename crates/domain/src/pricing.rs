//! Token price estimation from pool listings.
//!
//! Pool listings only carry TVL and volume, not reserves. The estimate below
//! assumes a fixed depth of [`REFERENCE_DEPTH_UNITS`] tokens on each side of
//! the top pool. It is an approximation for display, not a price oracle.

use crate::entities::PoolSummary;
use crate::value_objects::BitcoinPrice;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Symbol the dashboard prices.
pub const DIESEL_SYMBOL: &str = "DIESEL";

/// Token units assumed on each side of the top pool.
pub const REFERENCE_DEPTH_UNITS: u64 = 1_000_000;

/// Price in BTC reported when TVL or the BTC price is unknown.
pub fn fallback_price_in_btc() -> Decimal {
    Decimal::new(1, 5)
}

/// Price and liquidity overview for a token across its pools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceEstimate {
    pub price_in_btc: Decimal,
    pub price_in_usd: Decimal,
    /// Sum of TVL over every pool holding the token.
    pub total_tvl: Decimal,
    pub total_vol_24h: Decimal,
    pub pool_count: usize,
    /// Pool the price was derived from.
    pub top_pool: PoolSummary,
    pub btc_price_usd: Decimal,
}

/// Estimates the price of `symbol` from a pool list.
///
/// `pools` must already be ordered by the caller (TVL descending in the
/// dashboard); the first pool containing `symbol` is used for the price.
/// Returns `None` when no pool contains the token.
pub fn estimate_price(
    pools: &[PoolSummary],
    symbol: &str,
    btc_price: Option<BitcoinPrice>,
) -> Option<PriceEstimate> {
    let mut matching = pools.iter().filter(|p| p.contains_symbol(symbol));
    let top_pool = matching.next()?;

    let mut pool_count = 1;
    let mut total_tvl = top_pool.tvl_usd;
    let mut total_vol_24h = top_pool.vol_24h_usd;
    for pool in matching {
        pool_count += 1;
        total_tvl = total_tvl.saturating_add(pool.tvl_usd);
        total_vol_24h = total_vol_24h.saturating_add(pool.vol_24h_usd);
    }

    let btc_price = btc_price.unwrap_or(BitcoinPrice::new(Decimal::ZERO));
    let price_in_btc = price_from_tvl(top_pool.tvl_usd, btc_price);

    Some(PriceEstimate {
        price_in_btc,
        price_in_usd: btc_price.value_of(price_in_btc),
        total_tvl,
        total_vol_24h,
        pool_count,
        top_pool: top_pool.clone(),
        btc_price_usd: btc_price.usd,
    })
}

/// [`estimate_price`] for DIESEL.
pub fn estimate_diesel_price(
    pools: &[PoolSummary],
    btc_price: Option<BitcoinPrice>,
) -> Option<PriceEstimate> {
    estimate_price(pools, DIESEL_SYMBOL, btc_price)
}

/// `(tvl / 2) / (btc_usd * depth)`, or the fallback when either input is zero.
fn price_from_tvl(tvl_usd: Decimal, btc_price: BitcoinPrice) -> Decimal {
    if tvl_usd.is_zero() || btc_price.is_zero() {
        return fallback_price_in_btc();
    }
    let side_value_usd = tvl_usd / Decimal::TWO;
    btc_price
        .usd
        .checked_mul(Decimal::from(REFERENCE_DEPTH_UNITS))
        .and_then(|depth_value| side_value_usd.checked_div(depth_value))
        .unwrap_or_else(fallback_price_in_btc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn pool(token0: &str, token1: &str, tvl: Decimal, vol: Decimal) -> PoolSummary {
        PoolSummary::new(token0, token1, tvl, vol)
    }

    #[test]
    fn test_no_matching_pool_is_absent() {
        assert!(estimate_diesel_price(&[], Some(BitcoinPrice::new(dec!(50000)))).is_none());

        let pools = vec![pool("FROST", "BTC", dec!(1000), dec!(10))];
        assert!(estimate_diesel_price(&pools, Some(BitcoinPrice::new(dec!(50000)))).is_none());
    }

    #[test]
    fn test_single_pool_estimate() {
        let pools = vec![pool("DIESEL", "BTC", dec!(2000000), dec!(5000))];
        let estimate = estimate_diesel_price(&pools, Some(BitcoinPrice::new(dec!(50000)))).unwrap();

        assert_eq!(estimate.price_in_btc, dec!(0.00002));
        assert_eq!(estimate.price_in_usd, dec!(1));
        assert_eq!(estimate.pool_count, 1);
        assert_eq!(estimate.total_tvl, dec!(2000000));
        assert_eq!(estimate.btc_price_usd, dec!(50000));
    }

    #[test]
    fn test_zero_btc_price_uses_fallback() {
        let pools = vec![pool("DIESEL", "BTC", dec!(2000000), dec!(5000))];

        let estimate = estimate_diesel_price(&pools, Some(BitcoinPrice::new(dec!(0)))).unwrap();
        assert_eq!(estimate.price_in_btc, dec!(0.00001));
        assert_eq!(estimate.price_in_usd, Decimal::ZERO);

        let estimate = estimate_diesel_price(&pools, None).unwrap();
        assert_eq!(estimate.price_in_btc, dec!(0.00001));
    }

    #[test]
    fn test_zero_tvl_uses_fallback() {
        let pools = vec![pool("BTC", "DIESEL", Decimal::ZERO, Decimal::ZERO)];
        let estimate = estimate_diesel_price(&pools, Some(BitcoinPrice::new(dec!(60000)))).unwrap();
        assert_eq!(estimate.price_in_btc, dec!(0.00001));
        assert_eq!(estimate.price_in_usd, dec!(0.6));
    }

    #[test]
    fn test_top_pool_is_first_match_and_totals_cover_all() {
        let pools = vec![
            pool("FROST", "BTC", dec!(9000000), dec!(900)),
            pool("DIESEL", "BTC", dec!(1000000), dec!(100)),
            pool("FROST", "DIESEL", dec!(3000000), dec!(300)),
            pool("DIESEL", "bUSD", dec!(500000), dec!(50)),
        ];
        let estimate = estimate_diesel_price(&pools, Some(BitcoinPrice::new(dec!(100000)))).unwrap();

        // No re-sort: the 1M pool comes first even though a larger one follows.
        assert_eq!(estimate.top_pool.tvl_usd, dec!(1000000));
        assert_eq!(estimate.price_in_btc, dec!(0.000005));
        assert_eq!(estimate.pool_count, 3);
        assert_eq!(estimate.total_tvl, dec!(4500000));
        assert_eq!(estimate.total_vol_24h, dec!(450));
    }

    #[test]
    fn test_usd_is_btc_times_btc_price() {
        let pools = vec![pool("DIESEL", "BTC", dec!(1234567.89), dec!(1))];
        let btc = BitcoinPrice::new(dec!(97123.45));
        let estimate = estimate_diesel_price(&pools, Some(btc)).unwrap();
        assert_eq!(estimate.price_in_usd, estimate.price_in_btc * btc.usd);
    }

    #[test]
    fn test_idempotent() {
        let pools = vec![
            pool("DIESEL", "BTC", dec!(777777.77), dec!(12.5)),
            pool("DIESEL", "FROST", dec!(1000), dec!(3)),
        ];
        let btc = Some(BitcoinPrice::new(dec!(64000)));
        assert_eq!(
            estimate_diesel_price(&pools, btc),
            estimate_diesel_price(&pools, btc)
        );
    }
}
