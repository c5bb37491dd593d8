pub mod alkane_id;
pub mod amount;
pub mod price;

pub use alkane_id::AlkaneId;
pub use amount::Amount;
pub use price::BitcoinPrice;
