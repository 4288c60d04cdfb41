//! Core types and data structures for the ledger

use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use uuid::Uuid;

/// Direction of a transaction relative to the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money coming in, adds to the balance
    Income,
    /// Money going out, subtracts from the balance
    Outcome,
}

impl TransactionType {
    /// The literal tag used in requests and CSV files
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Outcome => "outcome",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(TransactionType::Income),
            "outcome" => Ok(TransactionType::Outcome),
            other => Err(LedgerError::Validation(format!(
                "Unknown transaction type '{other}', expected 'income' or 'outcome'"
            ))),
        }
    }
}

/// A named bucket transactions are filed under
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier for the category
    pub id: Uuid,
    /// Human-readable title, unique by convention only
    pub title: String,
    /// When the category was created
    pub created_at: NaiveDateTime,
    /// When the category was last updated
    pub updated_at: NaiveDateTime,
}

impl Category {
    /// Create a new, not yet persisted, category
    pub fn new(title: impl Into<String>) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// A single income or outcome entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier for the transaction
    pub id: Uuid,
    /// Description of the transaction
    pub title: String,
    /// Amount of the transaction, never negative
    pub value: BigDecimal,
    /// Whether the amount is added to or subtracted from the balance
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// The category the transaction is filed under
    pub category: Category,
    /// When the transaction was created
    pub created_at: NaiveDateTime,
    /// When the transaction was last updated
    pub updated_at: NaiveDateTime,
}

impl Transaction {
    /// Create a new, not yet persisted, transaction
    pub fn new(
        title: impl Into<String>,
        value: BigDecimal,
        transaction_type: TransactionType,
        category: Category,
    ) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            value,
            transaction_type,
            category,
            created_at: now,
            updated_at: now,
        }
    }

    /// The value with the sign it contributes to the balance
    pub fn signed_value(&self) -> BigDecimal {
        match self.transaction_type {
            TransactionType::Income => self.value.clone(),
            TransactionType::Outcome => -self.value.clone(),
        }
    }
}

/// Request to record a single transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    pub title: String,
    pub value: BigDecimal,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// Title of the category, created on first use
    pub category: String,
}

impl NewTransaction {
    pub fn new(
        title: impl Into<String>,
        value: BigDecimal,
        transaction_type: TransactionType,
        category: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            value,
            transaction_type,
            category: category.into(),
        }
    }
}

/// Aggregated income, outcome and the resulting total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    pub income: BigDecimal,
    pub outcome: BigDecimal,
    /// `income - outcome`
    pub total: BigDecimal,
}

impl Balance {
    /// Sum a set of transactions into a balance
    pub fn from_transactions<'a, I>(transactions: I) -> Self
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let mut income = BigDecimal::from(0);
        let mut outcome = BigDecimal::from(0);
        let mut total = BigDecimal::from(0);

        for transaction in transactions {
            match transaction.transaction_type {
                TransactionType::Income => income += &transaction.value,
                TransactionType::Outcome => outcome += &transaction.value,
            }
            total += transaction.signed_value();
        }

        Self {
            income,
            outcome,
            total,
        }
    }
}

impl Default for Balance {
    fn default() -> Self {
        Self {
            income: BigDecimal::from(0),
            outcome: BigDecimal::from(0),
            total: BigDecimal::from(0),
        }
    }
}

/// Every persisted transaction together with the current balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    pub transactions: Vec<Transaction>,
    pub balance: Balance,
}

/// Errors that can occur in the ledger system
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("Insufficient balance: requested {requested}, available {available}")]
    InsufficientBalance {
        requested: BigDecimal,
        available: BigDecimal,
    },
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Invalid row at line {line}: {reason}")]
    InvalidRow { line: u64, reason: String },
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Category not found: {0}")]
    CategoryNotFound(String),
}

impl LedgerError {
    /// The HTTP status a caller should surface for this error
    pub fn status_code(&self) -> u16 {
        match self {
            LedgerError::InsufficientBalance { .. }
            | LedgerError::InvalidRow { .. }
            | LedgerError::Validation(_) => 400,
            LedgerError::FileNotFound(_) => 404,
            LedgerError::Storage(_)
            | LedgerError::Io(_)
            | LedgerError::Csv(_)
            | LedgerError::CategoryNotFound(_) => 500,
        }
    }

    /// Whether the error was caused by the request rather than the system
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }
}

/// Result type for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
