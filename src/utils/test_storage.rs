//! Store doubles shared by unit tests

use async_trait::async_trait;

use crate::traits::*;
use crate::types::*;
use crate::utils::memory_storage::MemoryStorage;

/// Store that keeps categories but refuses every transaction write
#[derive(Debug, Clone, Default)]
pub(crate) struct FailingTransactionStorage {
    pub(crate) inner: MemoryStorage,
}

pub(crate) const WRITE_FAILURE: &str = "transaction table is read-only";

#[async_trait]
impl LedgerStorage for FailingTransactionStorage {
    async fn get_balance(&self) -> LedgerResult<Balance> {
        self.inner.get_balance().await
    }

    async fn find_category_by_title(&self, title: &str) -> LedgerResult<Option<Category>> {
        self.inner.find_category_by_title(title).await
    }

    async fn find_categories_by_titles(&self, titles: &[String]) -> LedgerResult<Vec<Category>> {
        self.inner.find_categories_by_titles(titles).await
    }

    async fn list_categories(&self) -> LedgerResult<Vec<Category>> {
        self.inner.list_categories().await
    }

    async fn save_category(&mut self, category: &Category) -> LedgerResult<()> {
        self.inner.save_category(category).await
    }

    async fn save_categories(&mut self, categories: &[Category]) -> LedgerResult<()> {
        self.inner.save_categories(categories).await
    }

    async fn save_transaction(&mut self, _transaction: &Transaction) -> LedgerResult<()> {
        Err(LedgerError::Storage(WRITE_FAILURE.to_string()))
    }

    async fn save_transactions(&mut self, _transactions: &[Transaction]) -> LedgerResult<()> {
        Err(LedgerError::Storage(WRITE_FAILURE.to_string()))
    }

    async fn list_transactions(&self) -> LedgerResult<Vec<Transaction>> {
        self.inner.list_transactions().await
    }
}
