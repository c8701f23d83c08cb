//! Row model for the processor export, classification, and validation.

use crate::error::{ReconError, Result};
use crate::money::Money;
use serde::Deserialize;

/// Settlement currency every in-scope row must be denominated in.
pub const SETTLEMENT_CURRENCY: &str = "sek";

/// Raw export row as read from CSV.
///
/// Column order is irrelevant and extra export columns are ignored; only
/// the fields named here are consumed. Amount fields stay as strings so
/// that parse failures can be reported with row and field context.
#[derive(Debug, Deserialize)]
pub struct RowRecord {
    /// Opaque transaction identifier, informational only
    #[serde(rename = "balance_transaction_id", default)]
    pub id: String,

    /// Creation timestamp, carried through unparsed
    #[serde(rename = "created_utc", default)]
    pub created: String,

    /// Card country code; required for in-scope rows
    #[serde(rename = "card_country", default)]
    pub country: String,

    /// Settlement currency of the row
    #[serde(default)]
    pub currency: String,

    /// Charged amount (empty means zero)
    #[serde(default)]
    pub gross: Option<String>,

    /// Processor fee (empty means zero)
    #[serde(default)]
    pub fee: Option<String>,

    /// Gross minus fee, taken as given from the export
    #[serde(default)]
    pub net: Option<String>,

    /// Classification tag; only charges and refunds are in scope
    #[serde(rename = "reporting_category", default)]
    pub category: String,
}

/// In-scope transaction categories.
///
/// Every other `reporting_category` value in the export (payouts,
/// adjustments, and so on) is excluded from the reconciliation entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Charge,
    Refund,
}

impl Category {
    /// Classifies a `reporting_category` value; `None` means out of scope.
    ///
    /// Matching is exact: the export writes lowercase tags, and any other
    /// spelling is just another excluded category.
    pub fn classify(raw: &str) -> Option<Category> {
        match raw.trim() {
            "charge" => Some(Category::Charge),
            "refund" => Some(Category::Refund),
            _ => None,
        }
    }
}

/// An accepted in-scope transaction with exact amounts.
#[derive(Debug, Clone)]
pub struct Transaction {
    /// Transaction identifier from the export
    pub id: String,

    /// Creation timestamp string from the export
    pub created: String,

    /// Lowercased card country code, never empty
    pub country: String,

    /// Charge or refund
    pub category: Category,

    /// Charged amount
    pub gross: Money,

    /// Processor fee
    pub fee: Money,

    /// Gross minus fee
    pub net: Money,
}

impl RowRecord {
    /// Validates and converts the row into an accepted transaction.
    ///
    /// Returns `Ok(None)` when the category is out of scope: exclusion is
    /// silent and total, and no field of an excluded row is validated.
    /// For in-scope rows a currency mismatch, a missing country, or a
    /// malformed amount is fatal for the whole run.
    pub fn accept(&self, row: usize) -> Result<Option<Transaction>> {
        let category = match Category::classify(&self.category) {
            Some(c) => c,
            None => return Ok(None),
        };

        if self.currency.trim() != SETTLEMENT_CURRENCY {
            return Err(ReconError::CurrencyMismatch {
                row,
                currency: self.currency.trim().to_string(),
            });
        }

        let country = self.country.trim().to_lowercase();
        if country.is_empty() {
            return Err(ReconError::MissingCountry { row });
        }

        Ok(Some(Transaction {
            id: self.id.clone(),
            created: self.created.clone(),
            country,
            category,
            gross: parse_amount("gross", &self.gross, row)?,
            fee: parse_amount("fee", &self.fee, row)?,
            net: parse_amount("net", &self.net, row)?,
        }))
    }
}

/// Parses an amount field, attributing failures to the row and field.
fn parse_amount(field: &'static str, value: &Option<String>, row: usize) -> Result<Money> {
    let raw = value.as_deref().unwrap_or("");
    Money::parse(raw).map_err(|source| ReconError::Amount { row, field, source })
}
