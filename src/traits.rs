//! Traits for storage abstraction and extensibility

use async_trait::async_trait;

use crate::types::*;

/// Storage abstraction for the ledger system
///
/// This trait allows the ledger to work with any storage backend
/// (PostgreSQL, SQLite, in-memory, etc.) by implementing these methods.
/// Entities are built with [`Category::new`] and [`Transaction::new`] and
/// only become visible to other callers once saved here.
#[async_trait]
pub trait LedgerStorage: Send + Sync {
    /// Sum of income and outcome over every persisted transaction
    async fn get_balance(&self) -> LedgerResult<Balance>;

    /// Find a category whose title matches exactly
    async fn find_category_by_title(&self, title: &str) -> LedgerResult<Option<Category>>;

    /// Find every category whose title is in `titles`
    async fn find_categories_by_titles(&self, titles: &[String]) -> LedgerResult<Vec<Category>>;

    /// List all categories
    async fn list_categories(&self) -> LedgerResult<Vec<Category>>;

    /// Save a category to storage
    async fn save_category(&mut self, category: &Category) -> LedgerResult<()>;

    /// Save several categories in one call
    async fn save_categories(&mut self, categories: &[Category]) -> LedgerResult<()>;

    /// Save a transaction to storage
    async fn save_transaction(&mut self, transaction: &Transaction) -> LedgerResult<()>;

    /// Save several transactions in one call
    async fn save_transactions(&mut self, transactions: &[Transaction]) -> LedgerResult<()>;

    /// List all transactions in the order they were saved
    async fn list_transactions(&self) -> LedgerResult<Vec<Transaction>>;
}

/// Trait for implementing custom transaction validation rules
pub trait TransactionValidator: Send + Sync {
    /// Validate a request before anything is read from or written to storage
    fn validate_new_transaction(&self, request: &NewTransaction) -> LedgerResult<()>;
}

/// Default transaction validator with basic rules
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTransactionValidator;

impl TransactionValidator for DefaultTransactionValidator {
    fn validate_new_transaction(&self, request: &NewTransaction) -> LedgerResult<()> {
        crate::utils::validate_transaction_title(&request.title)?;
        crate::utils::validate_non_negative_value(&request.value)
    }
}
