use crate::enums::{RiskLevel, VaultKind};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Boost attached to a vault's yield.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultBoost {
    pub token_symbol: String,
    pub token_name: String,
    pub multiplier: Option<Decimal>,
    pub coming_soon: bool,
}

/// Static description of a vault offered by the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultConfig {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Alkane id such as `2:0`, or `btc` for native BTC.
    pub token_id: String,
    pub token_symbol: String,
    pub icon_path: Option<String>,
    pub contract_address: String,
    pub badge: Option<String>,
    pub kind: VaultKind,
    pub input_asset: String,
    pub output_asset: String,
    /// Percent, e.g. `21` for 21% APY.
    pub estimated_apy: Option<Decimal>,
    pub historical_apy: Option<Decimal>,
    pub risk_level: Option<RiskLevel>,
    pub boost: Option<VaultBoost>,
    pub escrow_nft_name: Option<String>,
}

impl VaultConfig {
    pub fn has_boost(&self) -> bool {
        self.boost.is_some()
    }
}

/// Vaults available in the DIESEL dashboard: the veDIESEL staking vault and
/// the BTC collateral vault.
pub fn available_vaults() -> Vec<VaultConfig> {
    vec![
        VaultConfig {
            id: "ve-diesel".to_string(),
            name: "veDIESEL Vault".to_string(),
            description: "Stake DIESEL for boosted yield and governance power".to_string(),
            token_id: "2:0".to_string(),
            token_symbol: "DIESEL".to_string(),
            icon_path: Some("https://asset.oyl.gg/alkanes/mainnet/2-0.png".to_string()),
            contract_address: "2:0".to_string(),
            badge: Some("Active".to_string()),
            kind: VaultKind::UnitVault,
            input_asset: "DIESEL".to_string(),
            output_asset: "veDIESEL".to_string(),
            estimated_apy: Some(Decimal::from(21)),
            historical_apy: None,
            risk_level: Some(RiskLevel::Medium),
            boost: Some(VaultBoost {
                token_symbol: "vxDIESEL".to_string(),
                token_name: "Staked DIESEL Gauge".to_string(),
                multiplier: Some(Decimal::new(15, 1)),
                coming_soon: false,
            }),
            escrow_nft_name: None,
        },
        VaultConfig {
            id: "btc-collateral".to_string(),
            name: "BTC Collateral Vault".to_string(),
            description: "Deposit BTC as collateral to borrow DIESEL".to_string(),
            token_id: "btc".to_string(),
            token_symbol: "BTC".to_string(),
            icon_path: Some("/tokens/btc.svg".to_string()),
            contract_address: "4:7936".to_string(),
            badge: Some("Coming Soon".to_string()),
            kind: VaultKind::UnitVault,
            input_asset: "BTC".to_string(),
            output_asset: "DIESEL".to_string(),
            estimated_apy: Some(Decimal::ZERO),
            historical_apy: None,
            risk_level: Some(RiskLevel::Medium),
            boost: None,
            escrow_nft_name: None,
        },
    ]
}

pub fn find_vault(id: &str) -> Option<VaultConfig> {
    available_vaults().into_iter().find(|v| v.id == id)
}
