//! Recording single transactions

use crate::ledger::CategoryResolver;
use crate::traits::*;
use crate::types::*;

/// Records one transaction at a time, refusing outcomes that would overdraw
/// the balance
///
/// The balance is read and the transaction written without any isolation
/// between the two steps. Two creators running at the same time over the same
/// store can both pass the overdraft check; backends that need a hard guarantee
/// must serialize calls to [`TransactionCreator::create`] themselves.
pub struct TransactionCreator<S: LedgerStorage> {
    pub(crate) storage: S,
    categories: CategoryResolver<S>,
    validator: Box<dyn TransactionValidator>,
}

impl<S: LedgerStorage + Clone> TransactionCreator<S> {
    /// Create a new transaction creator
    pub fn new(storage: S) -> Self {
        Self::with_validator(storage, Box::new(DefaultTransactionValidator))
    }

    /// Create a new transaction creator with custom validator
    pub fn with_validator(storage: S, validator: Box<dyn TransactionValidator>) -> Self {
        Self {
            categories: CategoryResolver::new(storage.clone()),
            storage,
            validator,
        }
    }
}

impl<S: LedgerStorage> TransactionCreator<S> {
    /// Record a new transaction
    ///
    /// Fails with [`LedgerError::InsufficientBalance`] when an outcome is
    /// larger than the current balance; nothing is written in that case.
    /// The category is looked up by exact title and created if missing.
    pub async fn create(&mut self, request: NewTransaction) -> LedgerResult<Transaction> {
        self.validator.validate_new_transaction(&request)?;

        let balance = self.storage.get_balance().await?;
        if request.transaction_type == TransactionType::Outcome && request.value > balance.total {
            tracing::warn!(
                title = %request.title,
                requested = %request.value,
                available = %balance.total,
                "rejected outcome larger than balance"
            );
            return Err(LedgerError::InsufficientBalance {
                requested: request.value,
                available: balance.total,
            });
        }

        let category = self.categories.find_or_create(&request.category).await?;

        let transaction = Transaction::new(
            request.title,
            request.value,
            request.transaction_type,
            category,
        );
        self.storage.save_transaction(&transaction).await?;

        tracing::info!(
            id = %transaction.id,
            kind = %transaction.transaction_type,
            value = %transaction.value,
            category = %transaction.category.title,
            "recorded transaction"
        );

        Ok(transaction)
    }
}
