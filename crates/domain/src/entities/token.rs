use crate::value_objects::{AlkaneId, Amount};
use primitive_types::U256;
use serde::{Deserialize, Serialize};

/// Supply and mint-cap figures of a token, all in base units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenCapState {
    pub id: AlkaneId,
    pub name: String,
    pub symbol: String,
    pub minted: U256,
    /// `None` when the cap is unknown or could not be read.
    pub cap: Option<U256>,
    pub value_per_mint: U256,
    pub total_supply: U256,
    pub decimals: u8,
}

impl TokenCapState {
    /// Creates an empty state: nothing minted and no cap.
    pub fn new(
        id: AlkaneId,
        name: impl Into<String>,
        symbol: impl Into<String>,
        decimals: u8,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            symbol: symbol.into(),
            minted: U256::zero(),
            cap: None,
            value_per_mint: U256::zero(),
            total_supply: U256::zero(),
            decimals,
        }
    }

    #[must_use]
    pub fn with_minted(mut self, minted: impl Into<U256>) -> Self {
        self.minted = minted.into();
        self
    }

    /// Sets the mint cap in base units.
    #[must_use]
    pub fn with_cap(mut self, cap: impl Into<U256>) -> Self {
        self.cap = Some(cap.into());
        self
    }

    /// Sets the base units issued per mint.
    #[must_use]
    pub fn with_value_per_mint(mut self, value_per_mint: impl Into<U256>) -> Self {
        self.value_per_mint = value_per_mint.into();
        self
    }

    #[must_use]
    pub fn with_total_supply(mut self, total_supply: impl Into<U256>) -> Self {
        self.total_supply = total_supply.into();
        self
    }

    /// Wraps base units of this token into an [`Amount`].
    pub fn amount(&self, raw: U256) -> Amount {
        Amount::new(raw, self.decimals)
    }

    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.symbol
        } else {
            &self.name
        }
    }
}
