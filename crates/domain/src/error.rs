//! Error types for domain value parsing and validation.

/// Errors raised while building domain values from external input.
///
/// Calculators never return these: they are total over their inputs. Only
/// constructors that parse strings or validate user input can fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// An alkane identifier was not a `block:tx` pair.
    #[error("Invalid alkane id: {0:?}")]
    InvalidAlkaneId(String),
    /// A base-unit amount was not a non-negative integer string.
    #[error("Invalid base-unit amount: {0:?}")]
    InvalidAmount(String),
    /// An amount is too large to be represented as a decimal.
    #[error("Amount {raw} with {decimals} decimals does not fit into a decimal")]
    AmountOverflow {
        /// Raw base units.
        raw: String,
        /// Token decimals.
        decimals: u8,
    },
    /// The requested number of mints is not a whole number within bounds.
    #[error("Number of mints must be a whole number between {min} and {max}, got {input:?}")]
    InvalidMintCount {
        /// Input as received.
        input: String,
        /// Lower bound (inclusive).
        min: u8,
        /// Upper bound (inclusive).
        max: u8,
    },
    /// The expected mint yield exceeded the base-unit range.
    #[error("Mint yield overflowed")]
    YieldOverflow,
}
