//! In-memory storage implementation for testing

use async_trait::async_trait;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::traits::*;
use crate::types::*;

/// In-memory storage implementation for testing and development
///
/// Clones share the same underlying data, so a ledger and the services it
/// builds all see each other's writes.
#[derive(Debug, Clone)]
pub struct MemoryStorage {
    categories: Arc<RwLock<Vec<Category>>>,
    transactions: Arc<RwLock<Vec<Transaction>>>,
}

impl MemoryStorage {
    /// Create a new memory storage instance
    pub fn new() -> Self {
        Self {
            categories: Arc::new(RwLock::new(Vec::new())),
            transactions: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Clear all data (useful for testing)
    pub fn clear(&self) -> LedgerResult<()> {
        write(&self.categories)?.clear();
        write(&self.transactions)?.clear();
        Ok(())
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

fn read<T>(lock: &RwLock<T>) -> LedgerResult<RwLockReadGuard<'_, T>> {
    lock.read()
        .map_err(|e| LedgerError::Storage(format!("lock poisoned: {e}")))
}

fn write<T>(lock: &RwLock<T>) -> LedgerResult<RwLockWriteGuard<'_, T>> {
    lock.write()
        .map_err(|e| LedgerError::Storage(format!("lock poisoned: {e}")))
}

#[async_trait]
impl LedgerStorage for MemoryStorage {
    async fn get_balance(&self) -> LedgerResult<Balance> {
        let transactions = read(&self.transactions)?;
        Ok(Balance::from_transactions(transactions.iter()))
    }

    async fn find_category_by_title(&self, title: &str) -> LedgerResult<Option<Category>> {
        Ok(read(&self.categories)?
            .iter()
            .find(|category| category.title == title)
            .cloned())
    }

    async fn find_categories_by_titles(&self, titles: &[String]) -> LedgerResult<Vec<Category>> {
        Ok(read(&self.categories)?
            .iter()
            .filter(|category| titles.contains(&category.title))
            .cloned()
            .collect())
    }

    async fn list_categories(&self) -> LedgerResult<Vec<Category>> {
        Ok(read(&self.categories)?.clone())
    }

    async fn save_category(&mut self, category: &Category) -> LedgerResult<()> {
        self.save_categories(std::slice::from_ref(category)).await
    }

    async fn save_categories(&mut self, categories: &[Category]) -> LedgerResult<()> {
        let mut stored = write(&self.categories)?;
        for category in categories {
            match stored.iter_mut().find(|c| c.id == category.id) {
                Some(existing) => *existing = category.clone(),
                None => stored.push(category.clone()),
            }
        }
        Ok(())
    }

    async fn save_transaction(&mut self, transaction: &Transaction) -> LedgerResult<()> {
        self.save_transactions(std::slice::from_ref(transaction))
            .await
    }

    async fn save_transactions(&mut self, transactions: &[Transaction]) -> LedgerResult<()> {
        let mut stored = write(&self.transactions)?;
        for transaction in transactions {
            match stored.iter_mut().find(|t| t.id == transaction.id) {
                Some(existing) => *existing = transaction.clone(),
                None => stored.push(transaction.clone()),
            }
        }
        Ok(())
    }

    async fn list_transactions(&self) -> LedgerResult<Vec<Transaction>> {
        Ok(read(&self.transactions)?.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;

    #[tokio::test]
    async fn test_balance_reflects_saved_transactions() {
        let mut storage = MemoryStorage::new();
        let category = Category::new("Job");
        storage.save_category(&category).await.unwrap();

        storage
            .save_transactions(&[
                Transaction::new(
                    "Salary",
                    BigDecimal::from(5000),
                    TransactionType::Income,
                    category.clone(),
                ),
                Transaction::new(
                    "Lunch",
                    BigDecimal::from(20),
                    TransactionType::Outcome,
                    category,
                ),
            ])
            .await
            .unwrap();

        let balance = storage.get_balance().await.unwrap();
        assert_eq!(balance.income, BigDecimal::from(5000));
        assert_eq!(balance.outcome, BigDecimal::from(20));
        assert_eq!(balance.total, BigDecimal::from(4980));
    }

    #[tokio::test]
    async fn test_category_lookups() {
        let mut storage = MemoryStorage::new();
        storage
            .save_categories(&[Category::new("Job"), Category::new("House")])
            .await
            .unwrap();

        assert!(storage
            .find_category_by_title("Job")
            .await
            .unwrap()
            .is_some());
        assert!(storage
            .find_category_by_title("job")
            .await
            .unwrap()
            .is_none());

        let found = storage
            .find_categories_by_titles(&["House".to_string(), "Food".to_string()])
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "House");
    }

    #[tokio::test]
    async fn test_clones_share_data_and_clear() {
        let storage = MemoryStorage::new();
        let mut other = storage.clone();
        other.save_category(&Category::new("Job")).await.unwrap();

        assert_eq!(storage.list_categories().await.unwrap().len(), 1);

        storage.clear().unwrap();
        assert!(other.list_categories().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_saving_same_id_twice_keeps_one_record() {
        let mut storage = MemoryStorage::new();
        let category = Category::new("Job");
        storage.save_category(&category).await.unwrap();
        storage.save_category(&category).await.unwrap();

        assert_eq!(storage.list_categories().await.unwrap().len(), 1);
    }
}
