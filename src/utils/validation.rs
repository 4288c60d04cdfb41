//! Validation utilities

use crate::traits::*;
use crate::types::*;
use bigdecimal::BigDecimal;

/// Largest number of decimal places, and of trailing zeros in exponent
/// notation, a value may carry
///
/// Summing values whose scales are far apart builds integers with as many
/// digits as the gap, so `1e99999999` would stall every balance computation.
pub const MAX_VALUE_SCALE: i64 = 28;

/// Validate that a value's scale is within [`MAX_VALUE_SCALE`] either way
pub fn validate_value_scale(value: &BigDecimal) -> LedgerResult<()> {
    let (_, scale) = value.as_bigint_and_exponent();
    if scale.abs() > MAX_VALUE_SCALE {
        return Err(LedgerError::Validation(format!(
            "Transaction value has a scale of {scale}, at most {MAX_VALUE_SCALE} either way is supported"
        )));
    }

    Ok(())
}

/// Validate that a value is zero or positive
pub fn validate_non_negative_value(value: &BigDecimal) -> LedgerResult<()> {
    validate_value_scale(value)?;

    if *value < BigDecimal::from(0) {
        Err(LedgerError::Validation(
            "Transaction value cannot be negative".to_string(),
        ))
    } else {
        Ok(())
    }
}

/// Validate that a transaction title is present
pub fn validate_transaction_title(title: &str) -> LedgerResult<()> {
    if title.trim().is_empty() {
        return Err(LedgerError::Validation(
            "Transaction title cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validate that a title fits in `max_len` characters
pub fn validate_title_length(field: &str, title: &str, max_len: usize) -> LedgerResult<()> {
    if title.chars().count() > max_len {
        return Err(LedgerError::Validation(format!(
            "{field} cannot exceed {max_len} characters"
        )));
    }

    Ok(())
}

/// Enhanced transaction validator with length limits
///
/// Mirrors the column sizes of a typical SQL schema for the ledger.
#[derive(Debug, Clone)]
pub struct EnhancedTransactionValidator {
    pub max_title_len: usize,
    pub max_category_len: usize,
}

impl Default for EnhancedTransactionValidator {
    fn default() -> Self {
        Self {
            max_title_len: 255,
            max_category_len: 255,
        }
    }
}

impl TransactionValidator for EnhancedTransactionValidator {
    fn validate_new_transaction(&self, request: &NewTransaction) -> LedgerResult<()> {
        // Basic validation
        DefaultTransactionValidator.validate_new_transaction(request)?;

        validate_title_length("Transaction title", &request.title, self.max_title_len)?;
        validate_title_length("Category title", &request.category, self.max_category_len)?;

        if request.category.trim().is_empty() {
            return Err(LedgerError::Validation(
                "Category title cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
