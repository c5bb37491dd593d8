use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of an alkane contract, written as `block:tx`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AlkaneId {
    pub block: u128,
    pub tx: u128,
}

impl AlkaneId {
    /// The DIESEL token, alkane `2:0`.
    pub const DIESEL: AlkaneId = AlkaneId { block: 2, tx: 0 };

    pub const fn new(block: u128, tx: u128) -> Self {
        Self { block, tx }
    }
}

impl FromStr for AlkaneId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidAlkaneId(s.to_string());
        let (block, tx) = s.trim().split_once(':').ok_or_else(invalid)?;
        Ok(Self {
            block: block.parse().map_err(|_| invalid())?,
            tx: tx.parse().map_err(|_| invalid())?,
        })
    }
}

impl TryFrom<String> for AlkaneId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AlkaneId> for String {
    fn from(id: AlkaneId) -> Self {
        id.to_string()
    }
}

impl fmt::Display for AlkaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.block, self.tx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let id: AlkaneId = "2:0".parse().unwrap();
        assert_eq!(id, AlkaneId::DIESEL);
        assert_eq!(id.to_string(), "2:0");

        let id: AlkaneId = "4:7936".parse().unwrap();
        assert_eq!(id, AlkaneId::new(4, 7936));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for input in ["", "2", "2:", ":0", "a:b", "2:0:1", "-1:0"] {
            assert!(input.parse::<AlkaneId>().is_err(), "{input:?}");
        }
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&AlkaneId::DIESEL).unwrap();
        assert_eq!(json, "\"2:0\"");
        let back: AlkaneId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, AlkaneId::DIESEL);
        assert!(serde_json::from_str::<AlkaneId>("\"btc\"").is_err());
    }
}
