//! Error types for the reconciliation run.
//!
//! Every variant is fatal: a VAT filing is all-or-nothing, so the first bad
//! row aborts the pass and no partial totals are reported.

use thiserror::Error;

/// Result type alias for reconciliation operations
pub type Result<T> = std::result::Result<T, ReconError>;

/// Errors that abort a reconciliation run.
#[derive(Error, Debug)]
pub enum ReconError {
    /// Failed to open or read the input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// An in-scope row is denominated in something other than the
    /// settlement currency. Mixed currencies cannot be summed without
    /// conversion, which this tool does not do.
    #[error("Row {row}: transaction currency '{currency}' is not the settlement currency")]
    CurrencyMismatch { row: usize, currency: String },

    /// An in-scope row has no card country, so the transaction cannot be
    /// attributed to a VAT jurisdiction.
    #[error("Row {row}: no card country for transaction")]
    MissingCountry { row: usize },

    /// A gross/fee/net field is present but not valid decimal text
    #[error("Row {row}: invalid {field} amount: {source}")]
    Amount {
        row: usize,
        field: &'static str,
        source: rust_decimal::Error,
    },

    /// Missing input file argument
    #[error("Missing input file argument. Usage: vat-recon [list] <export.csv>")]
    MissingArgument,
}
