//! Ledger module containing category resolution, transaction recording and import

pub mod category;
pub mod core;
pub mod import;
pub mod transaction;

pub use category::*;
pub use self::core::*;
pub use import::*;
pub use transaction::*;
