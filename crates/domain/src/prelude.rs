//! Prelude module for convenient imports.
//!
//! # Example
//!
//! ```rust
//! use diesel_domain::prelude::*;
//! ```

// Calculations
pub use crate::collateral::{BorrowPosition, BorrowQuote, CollateralParams};
pub use crate::mint::{MintMultiplier, MintProgress, expected_yield, mint_progress};
pub use crate::pricing::{DIESEL_SYMBOL, PriceEstimate, estimate_diesel_price, estimate_price};

// Entities and values
pub use crate::entities::{PoolSummary, TokenCapState, VaultConfig, available_vaults};
pub use crate::enums::{HealthBand, MintAvailability, PoolSortField, SortOrder};
pub use crate::error::DomainError;
pub use crate::value_objects::{AlkaneId, Amount, BitcoinPrice};

// Formatting
pub use crate::format::{format_percent, format_price, format_token_amount, format_usd};
