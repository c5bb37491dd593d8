pub mod pool;
pub mod token;
pub mod vault;

pub use pool::PoolSummary;
pub use token::TokenCapState;
pub use vault::{VaultBoost, VaultConfig, available_vaults, find_vault};
