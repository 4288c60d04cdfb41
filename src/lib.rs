//! # Finance Ledger
//!
//! A personal finance ledger core: income and outcome transactions filed under
//! categories, with a running balance and bulk import from CSV files.
//!
//! ## Features
//!
//! - **Overdraft check**: outcomes larger than the current balance are refused
//! - **Lazy categories**: categories are created the first time a title is used
//! - **CSV import**: batch category resolution and batch persistence
//! - **Storage abstraction**: database-agnostic design with trait-based storage
//!
//! ## Quick Start
//!
//! ```rust
//! use bigdecimal::BigDecimal;
//! use finance_ledger::utils::MemoryStorage;
//! use finance_ledger::{Ledger, NewTransaction, TransactionType};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), finance_ledger::LedgerError> {
//!     let mut ledger = Ledger::new(MemoryStorage::new());
//!
//!     ledger
//!         .create_transaction(NewTransaction::new(
//!             "Salary",
//!             BigDecimal::from(5000),
//!             TransactionType::Income,
//!             "Job",
//!         ))
//!         .await?;
//!
//!     let balance = ledger.balance().await?;
//!     assert_eq!(balance.total, BigDecimal::from(5000));
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod ledger;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use config::ImportOptions;
pub use ledger::*;
pub use traits::*;
pub use types::*;
