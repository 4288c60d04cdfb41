//! Import configuration

use serde::{Deserialize, Serialize};

/// Options controlling how a CSV file is read by the importer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportOptions {
    /// Field delimiter
    pub delimiter: char,
    /// Whether the first row is a header and should be skipped
    pub has_header: bool,
    /// Skip rows whose value is zero, the same way empty values are skipped
    ///
    /// On by default, matching the documented import behavior. Earlier
    /// importers only dropped rows whose raw value string was empty, so a row
    /// with the text `0` was kept; turn this off to get that behavior back.
    pub skip_zero_values: bool,
    /// Delete the source file once its transactions are saved
    pub remove_source: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            delimiter: ',',
            has_header: true,
            skip_zero_values: true,
            remove_source: true,
        }
    }
}

impl ImportOptions {
    /// Create the default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the delimiter
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set whether first row is header
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// Set whether zero-valued rows are skipped
    pub fn with_skip_zero_values(mut self, skip: bool) -> Self {
        self.skip_zero_values = skip;
        self
    }

    /// Set whether the source file is deleted after a successful import
    pub fn with_remove_source(mut self, remove: bool) -> Self {
        self.remove_source = remove;
        self
    }

    /// The delimiter as the single byte the CSV reader expects
    ///
    /// Non-ASCII delimiters fall back to a comma.
    pub(crate) fn delimiter_byte(&self) -> u8 {
        if self.delimiter.is_ascii() {
            self.delimiter as u8
        } else {
            tracing::warn!(
                delimiter = %self.delimiter,
                "non-ASCII delimiter is not supported, using ','"
            );
            b','
        }
    }
}
