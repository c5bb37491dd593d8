//! Data sources and payload parsing for the DIESEL dashboard.
//!
//! This crate provides:
//! - Strict DTOs for pool listings, BTC quotes and alkane reflections
//! - Conversion of those payloads into domain types
//! - Source traits for dependency injection
//! - A JSON snapshot source implementing every trait
//! - A loader that feeds source data to the price estimator

/// Dashboard loader.
pub mod dashboard;
/// Wire payloads.
pub mod dto;
/// Error types.
pub mod error;
/// Source traits.
pub mod provider;
/// JSON snapshot source.
pub mod snapshot;

pub use dashboard::DashboardLoader;
pub use error::DataError;
pub use provider::{PoolQuery, PoolSource, PriceOracle, TokenReflector};
pub use snapshot::{DashboardSnapshot, SnapshotProvider};
