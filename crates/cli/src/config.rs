//! Environment configuration for the CLI.

use anyhow::{Context, Result};
use diesel_data::provider::DEFAULT_POOL_LIMIT;
use diesel_execution::transaction::DEFAULT_FEE_RATE;
use std::env;
use std::path::PathBuf;

/// Snapshot read when `DIESEL_SNAPSHOT` is unset.
pub const DEFAULT_SNAPSHOT_PATH: &str = "snapshot.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Dashboard snapshot to read pools, the BTC quote and reflections from.
    pub snapshot_path: PathBuf,
    /// Pools requested for the price estimate.
    pub pool_limit: usize,
    /// Fee rate in sat/vB for mint requests.
    pub fee_rate: u32,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            snapshot_path: PathBuf::from(DEFAULT_SNAPSHOT_PATH),
            pool_limit: DEFAULT_POOL_LIMIT,
            fee_rate: DEFAULT_FEE_RATE,
        }
    }
}

impl CliConfig {
    /// Reads `DIESEL_SNAPSHOT`, `DIESEL_POOL_LIMIT` and `DIESEL_FEE_RATE`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup. Unset or blank keys keep their
    /// defaults; set keys must parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(path) = value("DIESEL_SNAPSHOT") {
            config.snapshot_path = PathBuf::from(path);
        }
        if let Some(limit) = value("DIESEL_POOL_LIMIT") {
            config.pool_limit = limit
                .trim()
                .parse()
                .with_context(|| format!("DIESEL_POOL_LIMIT must be a positive integer: {limit}"))?;
            anyhow::ensure!(config.pool_limit > 0, "DIESEL_POOL_LIMIT must be greater than 0");
        }
        if let Some(rate) = value("DIESEL_FEE_RATE") {
            config.fee_rate = rate
                .trim()
                .parse()
                .with_context(|| format!("DIESEL_FEE_RATE must be an integer sat/vB: {rate}"))?;
        }

        Ok(config)
    }

    /// Applies command-line values over the environment.
    #[must_use]
    pub fn with_overrides(
        mut self,
        snapshot_path: Option<PathBuf>,
        pool_limit: Option<usize>,
        fee_rate: Option<u32>,
    ) -> Self {
        if let Some(path) = snapshot_path {
            self.snapshot_path = path;
        }
        if let Some(limit) = pool_limit.filter(|limit| *limit > 0) {
            self.pool_limit = limit;
        }
        if let Some(rate) = fee_rate {
            self.fee_rate = rate;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = CliConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.pool_limit, 200);
        assert_eq!(config.fee_rate, 10);
    }

    #[test]
    fn test_overrides() {
        let config = CliConfig::from_lookup(lookup(&[
            ("DIESEL_SNAPSHOT", "/tmp/dashboard.json"),
            ("DIESEL_POOL_LIMIT", "50"),
            ("DIESEL_FEE_RATE", " 3 "),
        ]))
        .unwrap();
        assert_eq!(config.snapshot_path, PathBuf::from("/tmp/dashboard.json"));
        assert_eq!(config.pool_limit, 50);
        assert_eq!(config.fee_rate, 3);
    }

    #[test]
    fn test_blank_values_keep_defaults() {
        let config = CliConfig::from_lookup(lookup(&[("DIESEL_POOL_LIMIT", "  ")])).unwrap();
        assert_eq!(config.pool_limit, DEFAULT_POOL_LIMIT);
    }

    #[test]
    fn test_command_line_overrides() {
        let config = CliConfig::from_lookup(lookup(&[("DIESEL_FEE_RATE", "3")]))
            .unwrap()
            .with_overrides(Some(PathBuf::from("other.json")), Some(0), Some(7));
        assert_eq!(config.snapshot_path, PathBuf::from("other.json"));
        assert_eq!(config.pool_limit, DEFAULT_POOL_LIMIT);
        assert_eq!(config.fee_rate, 7);
    }

    #[test]
    fn test_invalid_values() {
        assert!(CliConfig::from_lookup(lookup(&[("DIESEL_POOL_LIMIT", "many")])).is_err());
        assert!(CliConfig::from_lookup(lookup(&[("DIESEL_POOL_LIMIT", "0")])).is_err());
        assert!(CliConfig::from_lookup(lookup(&[("DIESEL_FEE_RATE", "-1")])).is_err());
    }
}
