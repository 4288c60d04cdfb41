//! Main ledger orchestrator that coordinates recording and importing

use std::path::Path;

use crate::config::ImportOptions;
use crate::ledger::{TransactionCreator, TransactionImporter};
use crate::traits::*;
use crate::types::*;

/// Main ledger system that owns both entry points over one store
pub struct Ledger<S: LedgerStorage> {
    creator: TransactionCreator<S>,
    importer: TransactionImporter<S>,
}

impl<S: LedgerStorage + Clone> Ledger<S> {
    /// Create a new ledger with the given storage backend
    pub fn new(storage: S) -> Self {
        Self {
            creator: TransactionCreator::new(storage.clone()),
            importer: TransactionImporter::new(storage),
        }
    }

    /// Create a new ledger with a custom validator and import options
    pub fn with_options<V>(storage: S, validator: V, options: ImportOptions) -> Self
    where
        V: TransactionValidator + Clone + 'static,
    {
        Self {
            creator: TransactionCreator::with_validator(
                storage.clone(),
                Box::new(validator.clone()),
            ),
            importer: TransactionImporter::with_options(storage, Box::new(validator), options),
        }
    }
}

impl<S: LedgerStorage> Ledger<S> {
    /// Record a new transaction
    pub async fn create_transaction(&mut self, request: NewTransaction) -> LedgerResult<Transaction> {
        self.creator.create(request).await
    }

    /// Import transactions from the CSV file at `path`
    pub async fn import_transactions(
        &mut self,
        path: impl AsRef<Path>,
    ) -> LedgerResult<Vec<Transaction>> {
        self.importer.import_from(path).await
    }

    /// Current income, outcome and total
    pub async fn balance(&self) -> LedgerResult<Balance> {
        self.creator.storage.get_balance().await
    }

    /// Every transaction recorded so far together with the balance
    pub async fn statement(&self) -> LedgerResult<Statement> {
        let transactions = self.creator.storage.list_transactions().await?;
        let balance = self.creator.storage.get_balance().await?;

        Ok(Statement {
            transactions,
            balance,
        })
    }
}
