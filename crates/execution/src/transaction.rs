//! Mint request handed to the transaction layer, and its receipt.
//!
//! Building, signing and broadcasting the transaction belong to the
//! [`TransactionExecutor`] implementation.

use crate::error::ExecutionError;
use async_trait::async_trait;
use diesel_domain::mint::MintMultiplier;
use diesel_domain::value_objects::AlkaneId;
use serde::{Deserialize, Serialize};

/// Fee rate in sat/vB used when none is configured.
pub const DEFAULT_FEE_RATE: u32 = 10;

/// Validated request to mint `count` times from an alkane contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintRequest {
    /// Addresses receiving the minted tokens.
    pub to_addresses: Vec<String>,
    pub alkane_id: AlkaneId,
    pub opcode: u128,
    pub count: MintMultiplier,
    /// sat/vB
    pub fee_rate: u32,
}

impl MintRequest {
    /// `block,tx,opcode,count`
    pub fn cellpack(&self) -> String {
        format!(
            "{},{},{},{}",
            self.alkane_id.block, self.alkane_id.tx, self.opcode, self.count
        )
    }

    /// Protostone with pointer and refund both on output 0.
    pub fn protostone(&self) -> String {
        format!("[{}]:0:0", self.cellpack())
    }
}

/// Answer of the transaction layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionReceipt {
    #[serde(default)]
    pub txid: Option<String>,
    /// Set instead of `txid` for commit/reveal submissions.
    #[serde(default)]
    pub reveal_txid: Option<String>,
}

impl ExecutionReceipt {
    /// `txid`, falling back to `reveal_txid`. Empty ids are ignored.
    pub fn transaction_id(&self) -> Option<&str> {
        [self.txid.as_deref(), self.reveal_txid.as_deref()]
            .into_iter()
            .flatten()
            .find(|id| !id.is_empty())
    }
}

/// Submits requests to the chain.
#[async_trait]
pub trait TransactionExecutor: Send + Sync {
    async fn execute_mint(&self, request: &MintRequest) -> Result<ExecutionReceipt, ExecutionError>;
}
