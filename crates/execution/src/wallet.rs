//! Wallet session passed explicitly to every operation that needs one.

use crate::error::ExecutionError;
use diesel_domain::format::truncate_address;
use serde::{Deserialize, Serialize};

/// Connection state of the user's wallet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletSession {
    address: Option<String>,
}

impl WalletSession {
    /// A connected wallet. An empty address counts as disconnected.
    pub fn connected(address: impl Into<String>) -> Self {
        let address = address.into();
        Self {
            address: (!address.trim().is_empty()).then_some(address),
        }
    }

    pub fn disconnected() -> Self {
        Self::default()
    }

    pub fn is_connected(&self) -> bool {
        self.address.is_some()
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    /// # Errors
    /// Returns [`ExecutionError::WalletNotConnected`] without an address.
    pub fn require_address(&self) -> Result<&str, ExecutionError> {
        self.address().ok_or(ExecutionError::WalletNotConnected)
    }

    /// Shortened address for headers, `None` when disconnected.
    pub fn short_address(&self) -> Option<String> {
        self.address().map(truncate_address)
    }
}
