//! Display formatting for prices, USD values and token amounts.
//!
//! Precision depends on magnitude so that tiny prices keep their significant
//! digits while large values stay readable. Negative inputs are clamped to
//! zero before formatting.

use crate::value_objects::Amount;
use rust_decimal::{Decimal, RoundingStrategy};
use thousands::Separable;

/// Formats a plain number (e.g. a price in BTC).
///
/// | magnitude | output |
/// |---|---|
/// | `0` | `"0"` |
/// | `< 1e-8` | scientific, 2 fraction digits (`"9.90e-9"`) |
/// | `< 1e-4` | 8 decimals |
/// | `< 1` | 6 decimals |
/// | `< 100` | 4 decimals |
/// | otherwise | grouped, at most 2 decimals |
pub fn format_price(n: Decimal) -> String {
    let n = n.max(Decimal::ZERO);
    if n.is_zero() {
        "0".to_string()
    } else if n < Decimal::new(1, 8) {
        scientific(n, 2)
    } else if n < Decimal::new(1, 4) {
        format_fixed(n, 8)
    } else if n < Decimal::ONE {
        format_fixed(n, 6)
    } else if n < Decimal::ONE_HUNDRED {
        format_fixed(n, 4)
    } else {
        let rounded = n.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        rounded.normalize().separate_with_commas()
    }
}

/// Formats a USD value.
///
/// `0` is `"$0.00"`, values below one cent get 6 decimals, values below one
/// dollar get 4, everything else is grouped with exactly 2 decimals.
pub fn format_usd(n: Decimal) -> String {
    let n = n.max(Decimal::ZERO);
    if n.is_zero() {
        "$0.00".to_string()
    } else if n < Decimal::new(1, 2) {
        format!("${}", format_fixed(n, 6))
    } else if n < Decimal::ONE {
        format!("${}", format_fixed(n, 4))
    } else {
        format!("${}", format_fixed(n, 2).separate_with_commas())
    }
}

/// Formats base units as display units: grouped, trailing zeros dropped.
pub fn format_token_amount(amount: &Amount) -> String {
    match amount.to_decimal() {
        Ok(value) => value.normalize().separate_with_commas(),
        // Too large for a decimal: show the whole units only.
        Err(_) => amount.whole_units().separate_with_commas(),
    }
}

/// `12.3456` -> `"12.35%"`
pub fn format_percent(pct: Decimal) -> String {
    format!("{}%", format_fixed(pct, 2))
}

/// Rounds half away from zero and pads to exactly `dp` decimals.
pub fn format_fixed(n: Decimal, dp: u32) -> String {
    let mut rounded = n.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(dp);
    rounded.to_string()
}

/// Shortens a wallet address to its first six and last four characters,
/// `abcdef…wxyz`. Empty input stays empty.
pub fn truncate_address(address: &str) -> String {
    if address.is_empty() {
        return String::new();
    }
    let chars: Vec<char> = address.chars().collect();
    let head: String = chars.iter().take(6).collect();
    let tail: String = chars[chars.len().saturating_sub(4)..].iter().collect();
    format!("{head}…{tail}")
}

fn scientific(n: Decimal, fraction_digits: u32) -> String {
    let mut mantissa = n;
    let mut exponent: i32 = 0;
    while mantissa < Decimal::ONE {
        mantissa *= Decimal::TEN;
        exponent -= 1;
    }
    while mantissa >= Decimal::TEN {
        mantissa /= Decimal::TEN;
        exponent += 1;
    }

    let mut rounded =
        mantissa.round_dp_with_strategy(fraction_digits, RoundingStrategy::MidpointAwayFromZero);
    // 9.999 rounds up to 10.00
    if rounded >= Decimal::TEN {
        rounded /= Decimal::TEN;
        exponent += 1;
    }

    let sign = if exponent < 0 { '-' } else { '+' };
    format!(
        "{}e{}{}",
        format_fixed(rounded, fraction_digits),
        sign,
        exponent.unsigned_abs()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use primitive_types::U256;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_price_zero() {
        assert_eq!(format_price(Decimal::ZERO), "0");
    }

    #[test]
    fn test_format_price_band_boundaries() {
        assert_eq!(format_price(dec!(0.0000000099)), "9.90e-9");
        assert_eq!(format_price(dec!(0.00000001)), "0.00000001");
        assert_eq!(format_price(dec!(0.000099)), "0.00009900");
        assert_eq!(format_price(dec!(0.0001)), "0.000100");
        assert_eq!(format_price(dec!(0.999)), "0.999000");
        assert_eq!(format_price(dec!(1)), "1.0000");
        assert_eq!(format_price(dec!(99.99)), "99.9900");
        assert_eq!(format_price(dec!(100)), "100");
    }

    #[test]
    fn test_format_price_large_values() {
        assert_eq!(format_price(dec!(1234.5)), "1,234.5");
        assert_eq!(format_price(dec!(1234567.891)), "1,234,567.89");
        assert_eq!(format_price(dec!(100.004)), "100");
    }

    #[test]
    fn test_format_price_scientific_rounding() {
        assert_eq!(format_price(dec!(0.000000001234)), "1.23e-9");
        assert_eq!(format_price(dec!(0.0000000099999)), "1.00e-8");
    }

    #[test]
    fn test_format_price_fallback_constant() {
        assert_eq!(format_price(dec!(0.00001)), "0.00001000");
        assert_eq!(format_price(dec!(0.00002)), "0.00002000");
    }

    #[test]
    fn test_format_price_negative_clamped() {
        assert_eq!(format_price(dec!(-5)), "0");
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(Decimal::ZERO), "$0.00");
        assert_eq!(format_usd(dec!(0.005)), "$0.005000");
        assert_eq!(format_usd(dec!(0.0099)), "$0.009900");
        assert_eq!(format_usd(dec!(0.01)), "$0.0100");
        assert_eq!(format_usd(dec!(0.5)), "$0.5000");
        assert_eq!(format_usd(dec!(1)), "$1.00");
        assert_eq!(format_usd(dec!(1234.567)), "$1,234.57");
        assert_eq!(format_usd(dec!(50000)), "$50,000.00");
        assert_eq!(format_usd(dec!(-1)), "$0.00");
    }

    #[test]
    fn test_format_usd_band_is_chosen_before_rounding() {
        assert_eq!(format_usd(dec!(0.999999)), "$1.0000");
        assert_eq!(format_usd(dec!(0.0099999)), "$0.010000");
        assert_eq!(format_usd(dec!(0.99999)), "$1.0000");
        assert_eq!(format_usd(dec!(999.999)), "$1,000.00");
    }

    #[test]
    fn test_formatting_is_idempotent() {
        for n in [dec!(0.0000000042), dec!(0.00002), dec!(0.5), dec!(42.42), dec!(98765.4321)] {
            assert_eq!(format_price(n), format_price(n));
            assert_eq!(format_usd(n), format_usd(n));
        }
    }

    #[test]
    fn test_format_token_amount() {
        assert_eq!(format_token_amount(&Amount::new(1_500_000_000u64, 8)), "15");
        assert_eq!(format_token_amount(&Amount::new(123_456_789u64, 8)), "1.23456789");
        assert_eq!(
            format_token_amount(&Amount::new(1_234_567_850_000_000u64, 8)),
            "12,345,678.5"
        );
        assert_eq!(format_token_amount(&Amount::zero(8)), "0");
    }

    #[test]
    fn test_format_token_amount_too_large() {
        let amount = Amount::new(U256::MAX, 0);
        let formatted = format_token_amount(&amount);
        assert!(formatted.starts_with("115,792,089"));
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(dec!(12.3456)), "12.35%");
        assert_eq!(format_percent(Decimal::ZERO), "0.00%");
    }

    #[test]
    fn test_truncate_address() {
        assert_eq!(
            truncate_address("bc1qxy2kgdygjrsqtzq2n0yrf2493p83kkfjhx0wlh"),
            "bc1qxy…0wlh"
        );
        assert_eq!(truncate_address("bc1q2wxyz"), "bc1q2w…wxyz");
        assert_eq!(truncate_address("abc"), "abc…abc");
        assert_eq!(truncate_address(""), "");
    }
}
