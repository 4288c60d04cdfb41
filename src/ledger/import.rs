//! Bulk import of transactions from CSV files

use std::path::Path;

use crate::config::ImportOptions;
use crate::ledger::category::{find_by_title, CategoryResolver};
use crate::traits::*;
use crate::types::*;
use crate::utils::csv_rows::{read_rows, ImportRow};

/// Imports transactions in bulk from CSV files
///
/// Files are expected to have a header row followed by `title, type, value,
/// category` rows. Imports are not idempotent: importing the same rows twice
/// records them twice.
pub struct TransactionImporter<S: LedgerStorage> {
    storage: S,
    categories: CategoryResolver<S>,
    validator: Box<dyn TransactionValidator>,
    options: ImportOptions,
}

impl<S: LedgerStorage + Clone> TransactionImporter<S> {
    /// Create a new importer with default options
    pub fn new(storage: S) -> Self {
        Self::with_options(
            storage,
            Box::new(DefaultTransactionValidator),
            ImportOptions::default(),
        )
    }

    /// Create a new importer with custom validator and options
    pub fn with_options(
        storage: S,
        validator: Box<dyn TransactionValidator>,
        options: ImportOptions,
    ) -> Self {
        Self {
            categories: CategoryResolver::new(storage.clone()),
            storage,
            validator,
            options,
        }
    }
}

impl<S: LedgerStorage> TransactionImporter<S> {
    /// Import every usable row of the CSV file at `path`
    ///
    /// Missing categories are created in one batch and the transactions saved
    /// in another. The file is deleted afterwards unless
    /// [`ImportOptions::remove_source`] is off. Transactions are returned in
    /// file order. Outcomes are not checked against the balance.
    pub async fn import_from(&mut self, path: impl AsRef<Path>) -> LedgerResult<Vec<Transaction>> {
        let path = path.as_ref();
        let rows = read_rows(path, &self.options)?;

        for row in &rows {
            self.validator
                .validate_new_transaction(&row.to_request())
                .map_err(|e| LedgerError::InvalidRow {
                    line: row.line,
                    reason: e.to_string(),
                })?;
        }

        let titles: Vec<String> = rows.iter().map(|row| row.category.clone()).collect();
        let categories = self.categories.resolve_all(&titles).await?;

        let transactions = build_transactions(rows, &categories)?;
        if !transactions.is_empty() {
            self.storage.save_transactions(&transactions).await?;
        }

        if self.options.remove_source {
            std::fs::remove_file(path)?;
        }

        tracing::info!(
            path = %path.display(),
            transactions = transactions.len(),
            "imported transactions"
        );

        Ok(transactions)
    }
}

fn build_transactions(
    rows: Vec<ImportRow>,
    categories: &[Category],
) -> LedgerResult<Vec<Transaction>> {
    rows.into_iter()
        .map(|row| {
            let category = find_by_title(categories, &row.category)?.clone();
            Ok(Transaction::new(
                row.title,
                row.value,
                row.transaction_type,
                category,
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::memory_storage::MemoryStorage;
    use crate::utils::test_storage::{FailingTransactionStorage, WRITE_FAILURE};
    use bigdecimal::BigDecimal;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn csv_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_import_creates_transactions_and_categories() {
        let storage = MemoryStorage::new();
        let mut importer = TransactionImporter::new(storage.clone());
        let file = csv_file(
            "title,type,value,category\nSalary,income,5000,Job\nRent,outcome,1200,House\n",
        );
        let path = file.path().to_path_buf();

        let transactions = importer.import_from(&path).await.unwrap();

        assert_eq!(transactions.len(), 2);
        assert_eq!(transactions[0].title, "Salary");
        assert_eq!(transactions[0].category.title, "Job");
        assert_eq!(transactions[1].title, "Rent");
        assert_eq!(transactions[1].value, BigDecimal::from(1200));
        assert_eq!(transactions[1].category.title, "House");

        assert_eq!(storage.list_categories().await.unwrap().len(), 2);
        assert_eq!(storage.list_transactions().await.unwrap(), transactions);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_import_reuses_existing_categories() {
        let mut storage = MemoryStorage::new();
        let job = Category::new("Job");
        storage.save_category(&job).await.unwrap();

        let mut importer = TransactionImporter::new(storage.clone());
        let file = csv_file("title,type,value,category\nSalary,income,5000,Job\n");

        let transactions = importer.import_from(file.path()).await.unwrap();

        assert_eq!(transactions[0].category.id, job.id);
        assert_eq!(storage.list_categories().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_row_fails_before_any_write() {
        let storage = MemoryStorage::new();
        let mut importer = TransactionImporter::new(storage.clone());
        let file = csv_file(
            "title,type,value,category\nSalary,income,5000,Job\nRefund,income,-5,Shop\n",
        );

        let result = importer.import_from(file.path()).await;

        assert!(matches!(result, Err(LedgerError::InvalidRow { line: 3, .. })));
        assert!(storage.list_categories().await.unwrap().is_empty());
        assert!(storage.list_transactions().await.unwrap().is_empty());
        assert!(file.path().exists());
    }

    #[tokio::test]
    async fn test_keep_source_file_when_configured() {
        let storage = MemoryStorage::new();
        let mut importer = TransactionImporter::with_options(
            storage,
            Box::new(DefaultTransactionValidator),
            ImportOptions::new().with_remove_source(false),
        );
        let file = csv_file("title,type,value,category\nSalary,income,5000,Job\n");

        importer.import_from(file.path()).await.unwrap();

        assert!(file.path().exists());
    }

    #[tokio::test]
    async fn test_header_only_file_imports_nothing() {
        let storage = MemoryStorage::new();
        let mut importer = TransactionImporter::new(storage.clone());
        let file = csv_file("title,type,value,category\n");
        let path = file.path().to_path_buf();

        let transactions = importer.import_from(&path).await.unwrap();

        assert!(transactions.is_empty());
        assert!(storage.list_categories().await.unwrap().is_empty());
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_missing_file() {
        let mut importer = TransactionImporter::new(MemoryStorage::new());

        let result = importer.import_from("/no/such/import.csv").await;

        assert!(matches!(result, Err(LedgerError::FileNotFound(_))));
    }

    #[tokio::test]
    async fn test_failed_batch_save_keeps_source_file() {
        let storage = FailingTransactionStorage::default();
        let mut importer = TransactionImporter::new(storage.clone());
        let file = csv_file("title,type,value,category
Salary,income,5000,Job
");

        let result = importer.import_from(file.path()).await;

        match result {
            Err(LedgerError::Storage(message)) => assert_eq!(message, WRITE_FAILURE),
            other => panic!("expected storage error, got {other:?}"),
        }
        assert!(storage.list_transactions().await.unwrap().is_empty());
        assert!(file.path().exists());
    }

    #[tokio::test]
    async fn test_undecodable_file_is_a_csv_error() {
        let storage = MemoryStorage::new();
        let mut importer = TransactionImporter::new(storage.clone());
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"title,type,value,category\nSal\xffary,income,5,Job\n")
            .unwrap();

        let result = importer.import_from(file.path()).await;

        assert!(matches!(result, Err(LedgerError::Csv(_))));
        assert!(storage.list_transactions().await.unwrap().is_empty());
        assert!(file.path().exists());
    }
}
