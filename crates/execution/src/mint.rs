//! Mint flow: validation, request construction and submission.

use crate::error::ExecutionError;
use crate::transaction::{DEFAULT_FEE_RATE, MintRequest, TransactionExecutor};
use crate::wallet::WalletSession;
use diesel_domain::entities::TokenCapState;
use diesel_domain::mint::{MINT_OPCODE, MintMultiplier, expected_yield};
use diesel_domain::value_objects::Amount;
use tracing::{info, warn};

/// Configuration for mint submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MintConfig {
    /// Fee rate in sat/vB.
    pub fee_rate: u32,
}

impl Default for MintConfig {
    fn default() -> Self {
        Self {
            fee_rate: DEFAULT_FEE_RATE,
        }
    }
}

/// A request that passed every check, with the yield it should produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedMint {
    pub request: MintRequest,
    pub expected_yield: Amount,
}

/// A submitted mint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MintOutcome {
    pub txid: String,
    pub prepared: PreparedMint,
}

/// Validates a mint and builds its request.
///
/// Checks run in order: connected wallet, open mint, valid count.
///
/// # Errors
/// - [`ExecutionError::WalletNotConnected`] without a wallet address
/// - [`ExecutionError::MintUnavailable`] when the cap is reached or minting is disabled
/// - [`ExecutionError::InvalidRequest`] when `count_input` is not a whole number in bounds
pub fn prepare_mint(
    wallet: &WalletSession,
    state: &TokenCapState,
    count_input: &str,
    config: &MintConfig,
) -> Result<PreparedMint, ExecutionError> {
    let address = wallet.require_address()?;

    let availability = state.progress().availability;
    if let Some(reason) = availability.reason(&state.symbol) {
        return Err(ExecutionError::MintUnavailable {
            availability,
            reason,
        });
    }

    let count: MintMultiplier = count_input.parse()?;
    let expected_yield = expected_yield(state, count)?;

    Ok(PreparedMint {
        request: MintRequest {
            to_addresses: vec![address.to_string()],
            alkane_id: state.id,
            opcode: MINT_OPCODE,
            count,
            fee_rate: config.fee_rate,
        },
        expected_yield,
    })
}

/// Submits mints through an injected [`TransactionExecutor`].
pub struct MintService<E> {
    executor: E,
    config: MintConfig,
}

impl<E: TransactionExecutor> MintService<E> {
    pub fn new(executor: E, config: MintConfig) -> Self {
        Self { executor, config }
    }

    pub fn config(&self) -> &MintConfig {
        &self.config
    }

    /// Validates, builds and submits a mint.
    ///
    /// # Errors
    /// Any error from [`prepare_mint`], the executor's error, or
    /// [`ExecutionError::MissingTxid`] when the executor returns no id.
    pub async fn mint(
        &self,
        wallet: &WalletSession,
        state: &TokenCapState,
        count_input: &str,
    ) -> Result<MintOutcome, ExecutionError> {
        let prepared = prepare_mint(wallet, state, count_input, &self.config)?;
        info!(
            alkane = %prepared.request.alkane_id,
            count = prepared.request.count.get(),
            protostone = %prepared.request.protostone(),
            fee_rate = prepared.request.fee_rate,
            "Submitting mint"
        );

        let receipt = self
            .executor
            .execute_mint(&prepared.request)
            .await
            .inspect_err(|err| warn!(error = %err, "Mint failed"))?;

        let Some(txid) = receipt.transaction_id() else {
            warn!("Mint returned no transaction id");
            return Err(ExecutionError::MissingTxid);
        };
        info!(txid, "Mint submitted");

        Ok(MintOutcome {
            txid: txid.to_string(),
            prepared,
        })
    }
}
