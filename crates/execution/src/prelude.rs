//! Prelude module for convenient imports.
//!
//! # Example
//!
//! ```rust
//! use diesel_execution::prelude::*;
//! ```

pub use crate::error::ExecutionError;

// Lending
pub use crate::lending::{LendingBackend, UnavailableLending};

// Mint
pub use crate::mint::{MintConfig, MintOutcome, MintService, PreparedMint, prepare_mint};

// Transaction
pub use crate::transaction::{
    DEFAULT_FEE_RATE, ExecutionReceipt, MintRequest, TransactionExecutor,
};

// Wallet
pub use crate::wallet::WalletSession;
