use crate::error::DomainError;
use primitive_types::U256;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Largest scale a `Decimal` can carry.
const MAX_DECIMAL_SCALE: u32 = 28;
/// Bits available in a `Decimal` mantissa.
const DECIMAL_MANTISSA_BITS: usize = 96;

/// A token amount held as an integer count of base units.
///
/// Chain values arrive as decimal strings in base units. They stay in this
/// scaled-integer form for every comparison and multiplication and are only
/// turned into a `Decimal` for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Amount {
    pub raw: U256,
    pub decimals: u8,
}

impl Amount {
    pub fn new(raw: impl Into<U256>, decimals: u8) -> Self {
        Self {
            raw: raw.into(),
            decimals,
        }
    }

    pub fn zero(decimals: u8) -> Self {
        Self {
            raw: U256::zero(),
            decimals,
        }
    }

    /// Parses a base-unit integer string such as `"500000000"`.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidAmount`] if the string is empty, signed,
    /// fractional or otherwise not a base-10 integer.
    pub fn from_base_units(value: &str, decimals: u8) -> Result<Self, DomainError> {
        let trimmed = value.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::InvalidAmount(value.to_string()));
        }
        let raw = U256::from_dec_str(trimmed)
            .map_err(|_| DomainError::InvalidAmount(value.to_string()))?;
        Ok(Self { raw, decimals })
    }

    pub fn is_zero(&self) -> bool {
        self.raw.is_zero()
    }

    /// Multiplies the base units by a whole factor, `None` on overflow.
    pub fn checked_mul(&self, factor: u64) -> Option<Self> {
        self.raw.checked_mul(U256::from(factor)).map(|raw| Self {
            raw,
            decimals: self.decimals,
        })
    }

    /// Whole display units, truncated. Always succeeds.
    pub fn whole_units(&self) -> U256 {
        match U256::from(10u8).checked_pow(U256::from(self.decimals)) {
            Some(divisor) => self.raw / divisor,
            None => U256::zero(),
        }
    }

    /// Converts base units to display units (`raw / 10^decimals`).
    ///
    /// Digits beyond the decimal's precision are dropped from the least
    /// significant end.
    ///
    /// # Errors
    /// Returns [`DomainError::AmountOverflow`] when the whole part alone does
    /// not fit into a decimal mantissa.
    pub fn to_decimal(&self) -> Result<Decimal, DomainError> {
        let ten = U256::from(10u8);
        let mut raw = self.raw;
        let mut scale = u32::from(self.decimals);

        while scale > 0 && (scale > MAX_DECIMAL_SCALE || raw.bits() > DECIMAL_MANTISSA_BITS) {
            raw /= ten;
            scale -= 1;
        }
        if raw.bits() > DECIMAL_MANTISSA_BITS {
            return Err(self.overflow());
        }

        Decimal::try_from_i128_with_scale(raw.low_u128() as i128, scale)
            .map_err(|_| self.overflow())
    }

    fn overflow(&self) -> DomainError {
        DomainError::AmountOverflow {
            raw: self.raw.to_string(),
            decimals: self.decimals,
        }
    }
}
