//! Seam for the BTC collateral vault's deposit and borrow calls.

use crate::error::ExecutionError;
use crate::wallet::WalletSession;
use async_trait::async_trait;
use diesel_domain::collateral::BorrowPosition;
use rust_decimal::Decimal;
use tracing::{debug, warn};

/// Name reported while no lending protocol is wired in.
pub const BORROWING_FEATURE: &str = "BTC collateral borrowing";

/// Submits collateral deposits and borrows. Each call returns a transaction id.
#[async_trait]
pub trait LendingBackend: Send + Sync {
    /// Deposits `btc_amount` BTC of collateral from the wallet.
    async fn deposit_collateral(
        &self,
        wallet: &WalletSession,
        btc_amount: Decimal,
    ) -> Result<String, ExecutionError>;

    /// Borrows `position.borrow_amount` DIESEL against the position's collateral.
    async fn borrow(
        &self,
        wallet: &WalletSession,
        position: &BorrowPosition,
    ) -> Result<String, ExecutionError>;
}

/// Backend used until a lending protocol exists. Every call is refused.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableLending;

#[async_trait]
impl LendingBackend for UnavailableLending {
    async fn deposit_collateral(
        &self,
        wallet: &WalletSession,
        btc_amount: Decimal,
    ) -> Result<String, ExecutionError> {
        wallet.require_address()?;
        debug!(%btc_amount, "Collateral deposit requested");
        warn!("{BORROWING_FEATURE} is not available yet");
        Err(ExecutionError::NotAvailable(BORROWING_FEATURE))
    }

    async fn borrow(
        &self,
        wallet: &WalletSession,
        position: &BorrowPosition,
    ) -> Result<String, ExecutionError> {
        wallet.require_address()?;
        debug!(
            collateral = %position.collateral_amount,
            borrow = %position.borrow_amount,
            "Borrow requested"
        );
        warn!("{BORROWING_FEATURE} is not available yet");
        Err(ExecutionError::NotAvailable(BORROWING_FEATURE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn wallet() -> WalletSession {
        WalletSession::connected("bc1qar0srrr7xfkvy5l643lydnw9re59gtzzwf5mdq")
    }

    #[tokio::test]
    async fn test_deposit_not_available() {
        let err = UnavailableLending
            .deposit_collateral(&wallet(), dec!(0.5))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "BTC collateral borrowing is not available yet");
    }

    #[tokio::test]
    async fn test_borrow_not_available() {
        let position = BorrowPosition::new(dec!(1), dec!(50000));
        let err = UnavailableLending
            .borrow(&wallet(), &position)
            .await
            .unwrap_err();
        assert!(matches!(err, ExecutionError::NotAvailable(_)));
    }

    #[tokio::test]
    async fn test_wallet_checked_first() {
        let backend: Box<dyn LendingBackend> = Box::new(UnavailableLending);
        let err = backend
            .borrow(&WalletSession::disconnected(), &BorrowPosition::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ExecutionError::WalletNotConnected));
    }
}
