//! Domain model and pure calculations for the DIESEL dashboard.
//!
//! This crate provides:
//! - Value objects for base-unit amounts, alkane ids and the BTC price
//! - Pool, token-cap and vault entities
//! - Magnitude-aware number and currency formatting
//! - TVL-based price estimation
//! - Mint-cap progress, availability and yield
//! - Collateral borrow limits and health factor
//!
//! Every calculation is a pure function of its inputs.

/// Prelude module for convenient imports.
pub mod prelude;

/// Collateral and borrow calculations.
pub mod collateral;
/// Domain entities.
pub mod entities;
/// Shared enumerations.
pub mod enums;
/// Error types.
pub mod error;
/// Display formatting.
pub mod format;
/// Mint-cap calculations.
pub mod mint;
/// Price estimation.
pub mod pricing;
/// Value objects.
pub mod value_objects;

pub use error::DomainError;
