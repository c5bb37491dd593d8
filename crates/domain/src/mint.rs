//! Mint-cap progress, mint availability and expected mint yield.

use crate::entities::TokenCapState;
use crate::enums::MintAvailability;
use crate::error::DomainError;
use crate::value_objects::Amount;
use primitive_types::U256;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Opcode of the alkane `mint` call.
pub const MINT_OPCODE: u128 = 77;
/// Fewest mints per request.
pub const MIN_MINT_COUNT: u8 = 1;
/// Most mints per request.
pub const MAX_MINT_COUNT: u8 = 10;

/// Fraction digits kept when computing progress from base units.
const PROGRESS_SCALE: u32 = 10;

/// Number of mint operations in one request, always within
/// `MIN_MINT_COUNT..=MAX_MINT_COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct MintMultiplier(u8);

impl MintMultiplier {
    /// # Errors
    /// Returns [`DomainError::InvalidMintCount`] when `count` is out of bounds.
    pub fn new(count: u8) -> Result<Self, DomainError> {
        if (MIN_MINT_COUNT..=MAX_MINT_COUNT).contains(&count) {
            Ok(Self(count))
        } else {
            Err(invalid_count(&count.to_string()))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for MintMultiplier {
    fn default() -> Self {
        Self(MIN_MINT_COUNT)
    }
}

impl FromStr for MintMultiplier {
    type Err = DomainError;

    /// Parses user input such as `"3"`. Fractions, signs and anything out of
    /// bounds are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid_count(s));
        }
        let count: u8 = trimmed.parse().map_err(|_| invalid_count(s))?;
        Self::new(count).map_err(|_| invalid_count(s))
    }
}

impl TryFrom<u8> for MintMultiplier {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MintMultiplier> for u8 {
    fn from(value: MintMultiplier) -> Self {
        value.0
    }
}

impl fmt::Display for MintMultiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn invalid_count(input: &str) -> DomainError {
    DomainError::InvalidMintCount {
        input: input.to_string(),
        min: MIN_MINT_COUNT,
        max: MAX_MINT_COUNT,
    }
}

/// How far a token is through its mint cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintProgress {
    /// `100 * minted / cap`, unclamped. Can exceed 100 on inconsistent data.
    pub progress_pct: Decimal,
    pub availability: MintAvailability,
}

impl MintProgress {
    /// Progress clamped to `[0, 100]` for progress bars.
    pub fn display_pct(&self) -> Decimal {
        self.progress_pct.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
    }

    pub fn is_active(&self) -> bool {
        self.availability.is_active()
    }
}

/// Progress for an optional token state. Missing state (still loading or
/// failed to load) or an unknown cap reports zero progress and disabled
/// minting.
pub fn mint_progress(state: Option<&TokenCapState>) -> MintProgress {
    match state.and_then(|state| state.cap.map(|cap| (state.minted, cap))) {
        Some((minted, cap)) => MintProgress {
            progress_pct: progress_pct(minted, cap),
            availability: availability(minted, cap),
        },
        None => MintProgress {
            progress_pct: Decimal::ZERO,
            availability: MintAvailability::Disabled,
        },
    }
}

/// `100 * minted / cap` in percent; zero when `cap` is zero.
pub fn progress_pct(minted: U256, cap: U256) -> Decimal {
    if cap.is_zero() {
        return Decimal::ZERO;
    }
    let factor = U256::from(100u8) * U256::exp10(PROGRESS_SCALE as usize);
    let scaled = match minted.checked_mul(factor) {
        Some(product) => product / cap,
        None => (minted / cap).saturating_mul(factor),
    };
    if scaled.bits() > 96 {
        // Far beyond the cap; only reachable on corrupt data.
        return Decimal::MAX;
    }
    Decimal::from_i128_with_scale(scaled.low_u128() as i128, PROGRESS_SCALE)
}

/// `Active` while `minted < cap`, `CapReached` otherwise. A zero cap counts
/// as reached.
pub fn availability(minted: U256, cap: U256) -> MintAvailability {
    if minted < cap {
        MintAvailability::Active
    } else {
        MintAvailability::CapReached
    }
}

/// Base units received for `count` mints: `count * value_per_mint`.
///
/// # Errors
/// Returns [`DomainError::YieldOverflow`] if the product leaves the base-unit
/// range.
pub fn expected_yield(
    state: &TokenCapState,
    count: MintMultiplier,
) -> Result<Amount, DomainError> {
    state
        .amount(state.value_per_mint)
        .checked_mul(u64::from(count.get()))
        .ok_or(DomainError::YieldOverflow)
}

impl TokenCapState {
    pub fn progress(&self) -> MintProgress {
        mint_progress(Some(self))
    }
}
