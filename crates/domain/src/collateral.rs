//! Borrow limits and health factor for the BTC collateral vault.
//!
//! Pure calculations only. Depositing collateral and borrowing go through a
//! lending backend that is not part of this crate.

use crate::enums::HealthBand;
use crate::format::format_fixed;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Pricing and risk parameters of the collateral vault.
///
/// The defaults are fixed placeholder values until an oracle feeds them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollateralParams {
    /// DIESEL received per BTC of collateral value.
    pub diesel_per_btc: Decimal,
    /// Share of collateral value that can be borrowed, in percent.
    pub max_borrow_ratio_pct: Decimal,
    /// Loan-to-value at which liquidation starts, in percent.
    pub liquidation_threshold_pct: Decimal,
    /// Required collateralization, in percent.
    pub collateral_ratio_pct: Decimal,
}

impl Default for CollateralParams {
    fn default() -> Self {
        Self {
            diesel_per_btc: Decimal::from(100_000),
            max_borrow_ratio_pct: Decimal::new(6667, 2), // 66.67%
            liquidation_threshold_pct: Decimal::from(80),
            collateral_ratio_pct: Decimal::from(150),
        }
    }
}

/// Collateral deposited (BTC) against DIESEL borrowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BorrowPosition {
    pub collateral_amount: Decimal,
    pub borrow_amount: Decimal,
}

impl BorrowPosition {
    /// Negative amounts are clamped to zero.
    pub fn new(collateral_amount: Decimal, borrow_amount: Decimal) -> Self {
        Self {
            collateral_amount: collateral_amount.max(Decimal::ZERO),
            borrow_amount: borrow_amount.max(Decimal::ZERO),
        }
    }

    /// Builds a position from raw form input; see [`parse_amount_input`].
    pub fn from_inputs(collateral: &str, borrow: &str) -> Self {
        Self::new(parse_amount_input(collateral), parse_amount_input(borrow))
    }

    pub fn has_debt(&self) -> bool {
        !self.borrow_amount.is_zero()
    }
}

/// Lenient parse of a form field.
///
/// Reads the leading number and ignores the rest, so `"1.5btc"` is `1.5`.
/// Exponents are accepted (`"1e-3"`). Empty, non-numeric and negative input
/// all read as zero.
pub fn parse_amount_input(input: &str) -> Decimal {
    let number = leading_number(input.trim_start());
    if number.is_empty() || number.starts_with('-') {
        return Decimal::ZERO;
    }
    let number = number.trim_start_matches('+');
    let number = if number.starts_with('.') {
        format!("0{number}")
    } else {
        number.to_string()
    };
    let parsed = if number.contains(['e', 'E']) {
        Decimal::from_scientific(&number.to_ascii_lowercase())
    } else {
        Decimal::from_str(&number)
    };
    parsed.unwrap_or(Decimal::ZERO)
}

/// Longest prefix of `input` shaped like `[+-]digits[.digits][e[+-]digits]`.
fn leading_number(input: &str) -> &str {
    let bytes = input.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_start = end;
    end = digits_from(end);
    let mut mantissa_digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        if frac_end > end + 1 {
            mantissa_digits += frac_end - end - 1;
            end = frac_end;
        }
    }
    if mantissa_digits == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exp_end = digits_from(end + 1 + sign);
        if exp_end > end + 1 + sign {
            end = exp_end;
        }
    }
    &input[..end]
}

impl HealthBand {
    /// `>= 1.5` healthy, `>= 1.2` caution, otherwise danger.
    pub fn from_health_factor(health_factor: Decimal) -> Self {
        if health_factor >= Decimal::new(15, 1) {
            Self::Healthy
        } else if health_factor >= Decimal::new(12, 1) {
            Self::Caution
        } else {
            Self::Danger
        }
    }
}

/// Borrow figures for one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorrowQuote {
    /// Most DIESEL the collateral allows.
    pub max_borrow: Decimal,
    /// `None` when nothing is borrowed.
    pub health_factor: Option<Decimal>,
    pub band: Option<HealthBand>,
}

impl BorrowQuote {
    pub fn max_borrow_display(&self) -> String {
        format_fixed(self.max_borrow, 2)
    }

    /// Two decimals, or `"N/A"` without debt.
    pub fn health_factor_display(&self) -> String {
        format_health_factor(self.health_factor)
    }
}

pub fn format_health_factor(health_factor: Option<Decimal>) -> String {
    match health_factor {
        Some(hf) => format_fixed(hf, 2),
        None => "N/A".to_string(),
    }
}

impl CollateralParams {
    /// `btc * diesel_per_btc * max_borrow_ratio_pct / 100`
    pub fn max_borrow(&self, btc_amount: Decimal) -> Decimal {
        let ratio = self.max_borrow_ratio_pct / Decimal::ONE_HUNDRED;
        btc_amount
            .max(Decimal::ZERO)
            .saturating_mul(self.diesel_per_btc)
            .saturating_mul(ratio)
    }

    /// Collateral value in DIESEL over debt. No debt means no health factor.
    pub fn health_factor(&self, position: &BorrowPosition) -> Option<Decimal> {
        if !position.has_debt() {
            return None;
        }
        let collateral_value = position
            .collateral_amount
            .saturating_mul(self.diesel_per_btc);
        Some(
            collateral_value
                .checked_div(position.borrow_amount)
                .unwrap_or(Decimal::MAX),
        )
    }

    /// The band follows the factor as displayed, rounded to two decimals.
    pub fn quote(&self, position: &BorrowPosition) -> BorrowQuote {
        let health_factor = self.health_factor(position);
        BorrowQuote {
            max_borrow: self.max_borrow(position.collateral_amount),
            health_factor,
            band: health_factor.map(|hf| {
                HealthBand::from_health_factor(
                    hf.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
                )
            }),
        }
    }
}
