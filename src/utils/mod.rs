//! Utility modules

pub mod csv_rows;
pub mod memory_storage;
#[cfg(test)]
pub(crate) mod test_storage;
pub mod validation;

pub use csv_rows::*;
pub use memory_storage::*;
pub use validation::*;
