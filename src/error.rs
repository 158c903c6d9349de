//! Error types for workbook generation.

use thiserror::Error;

/// Result type for generator operations
pub type GeneratorResult<T> = std::result::Result<T, GeneratorError>;

/// Errors that can occur while building the reference workbooks
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Literal table data failed a structural check
    #[error("invalid table data in sheet '{sheet}': {detail}")]
    Table { sheet: String, detail: String },

    /// Sheet geometry exceeded an Excel limit
    #[error("sheet layout error: {0}")]
    Layout(String),

    /// The spreadsheet engine rejected a write
    #[error("workbook write failed: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GeneratorError {
    /// Create a table-structure error
    #[must_use]
    pub fn table(sheet: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Table {
            sheet: sheet.into(),
            detail: detail.into(),
        }
    }
}
