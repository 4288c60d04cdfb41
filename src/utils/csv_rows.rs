//! Reading transaction rows out of CSV files

use bigdecimal::BigDecimal;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;
use std::str::FromStr;

use crate::config::ImportOptions;
use crate::types::*;
use crate::utils::validation::validate_value_scale;

const TITLE_COLUMN: usize = 0;
const TYPE_COLUMN: usize = 1;
const VALUE_COLUMN: usize = 2;
const CATEGORY_COLUMN: usize = 3;

/// A transaction candidate parsed from one CSV row
#[derive(Debug, Clone, PartialEq)]
pub struct ImportRow {
    /// Line in the source file the row was read from (1-based)
    pub line: u64,
    pub title: String,
    pub transaction_type: TransactionType,
    pub value: BigDecimal,
    /// Category title, may be empty
    pub category: String,
}

impl ImportRow {
    /// View the row as a creation request so validators can check it
    pub fn to_request(&self) -> NewTransaction {
        NewTransaction::new(
            self.title.clone(),
            self.value.clone(),
            self.transaction_type,
            self.category.clone(),
        )
    }
}

/// Open `path` and read every usable row from it
///
/// The file is closed before this function returns, on success or error.
pub fn read_rows(path: &Path, options: &ImportOptions) -> LedgerResult<Vec<ImportRow>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => LedgerError::FileNotFound(path.to_path_buf()),
        _ => LedgerError::Io(e),
    })?;

    read_rows_from(file, options)
}

/// Read every usable row from `reader`
///
/// Rows missing a title, type or value are skipped with a warning, as are
/// zero-valued rows when [`ImportOptions::skip_zero_values`] is set. A row with
/// an unknown type, or a value that is not a decimal number or is out of range,
/// fails the whole read.
pub fn read_rows_from<R: Read>(reader: R, options: &ImportOptions) -> LedgerResult<Vec<ImportRow>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(options.has_header)
        .delimiter(options.delimiter_byte())
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let line = record.position().map_or(0, |p| p.line());

        if let Some(row) = parse_record(&record, line, options)? {
            rows.push(row);
        }
    }

    tracing::debug!(rows = rows.len(), "parsed CSV rows");
    Ok(rows)
}

fn parse_record(
    record: &StringRecord,
    line: u64,
    options: &ImportOptions,
) -> LedgerResult<Option<ImportRow>> {
    let field = |index: usize| record.get(index).unwrap_or("").trim();

    let title = field(TITLE_COLUMN);
    let kind = field(TYPE_COLUMN);
    let raw_value = field(VALUE_COLUMN);
    let category = field(CATEGORY_COLUMN);

    if title.is_empty() || kind.is_empty() || raw_value.is_empty() {
        tracing::warn!(line, "skipping row with missing title, type or value");
        return Ok(None);
    }

    let value = BigDecimal::from_str(raw_value).map_err(|e| LedgerError::InvalidRow {
        line,
        reason: format!("invalid value '{raw_value}': {e}"),
    })?;
    validate_value_scale(&value).map_err(|e| LedgerError::InvalidRow {
        line,
        reason: e.to_string(),
    })?;

    let transaction_type = kind.parse().map_err(|_| LedgerError::InvalidRow {
        line,
        reason: format!("unknown transaction type '{kind}'"),
    })?;

    if options.skip_zero_values && value == BigDecimal::from(0) {
        tracing::warn!(line, "skipping row with zero value");
        return Ok(None);
    }

    Ok(Some(ImportRow {
        line,
        title: title.to_string(),
        transaction_type,
        value,
        category: category.to_string(),
    }))
}
