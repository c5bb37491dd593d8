//! Error types for mint and lending dispatch.

use diesel_domain::DomainError;
use diesel_domain::enums::MintAvailability;

/// Errors raised before or while handing a request to the transaction layer.
#[derive(Debug, thiserror::Error)]
pub enum ExecutionError {
    /// No wallet address is available.
    #[error("Wallet is not connected")]
    WalletNotConnected,
    /// The token does not accept mints right now.
    #[error("Minting unavailable: {reason}")]
    MintUnavailable {
        /// Why minting is closed.
        availability: MintAvailability,
        /// User-facing explanation.
        reason: String,
    },
    /// The request failed validation.
    #[error(transparent)]
    InvalidRequest(#[from] DomainError),
    /// The transaction layer answered without a transaction id.
    #[error("Mint transaction failed - no txid returned")]
    MissingTxid,
    /// The transaction layer rejected or failed the request.
    #[error("Transaction failed: {0}")]
    Rejected(String),
    /// The operation has no backend yet.
    #[error("{0} is not available yet")]
    NotAvailable(&'static str),
}
