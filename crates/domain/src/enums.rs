use serde::{Deserialize, Serialize};

/// Field a pool listing is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PoolSortField {
    #[default]
    Tvl,
    Volume,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// Whether the mint flow may currently be offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MintAvailability {
    Active,
    /// Everything up to the cap has been minted.
    CapReached,
    /// No usable cap or no token data.
    Disabled,
}

impl MintAvailability {
    pub fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }

    /// User-facing explanation when minting is not offered.
    pub fn reason(self, symbol: &str) -> Option<String> {
        match self {
            Self::Active => None,
            Self::CapReached => Some(format!("{symbol} has reached its maximum supply cap.")),
            Self::Disabled => Some("Minting is currently disabled for this token.".to_string()),
        }
    }
}

/// UI severity of a borrow position's health factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HealthBand {
    Danger,
    Caution,
    Healthy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    VeryHigh,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VaultKind {
    UnitVault,
}
