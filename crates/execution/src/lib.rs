//! Mint and lending dispatch for the DIESEL dashboard.
//!
//! This crate turns validated user intent into requests for the wallet's
//! transaction layer:
//! - Wallet session handling
//! - Mint request construction and submission
//! - Lending backend seam for the collateral vault

/// Prelude module for convenient imports.
pub mod prelude;

/// Error types.
pub mod error;
/// Collateral deposit and borrow dispatch.
pub mod lending;
/// Mint validation and submission.
pub mod mint;
/// Mint requests and the executor trait.
pub mod transaction;
/// Wallet session.
pub mod wallet;

pub use error::ExecutionError;
