//! Core aggregation engine for the reconciliation.
//!
//! Makes a single streaming pass over the export, classifies each row, and
//! maintains the grand totals alongside a per-country breakdown. Once the
//! pass is done the three VAT ledger lines are derived from the accrued
//! VAT figure.

use crate::error::Result;
use crate::eu::is_eu_member;
use crate::money::Money;
use crate::totals::Totals;
use crate::transaction::{RowRecord, Transaction};
use csv::{ReaderBuilder, Trim};
use log::debug;
use std::collections::BTreeMap;
use std::io::Read;

/// The three bookkeeping lines of a periodic VAT filing, derived once
/// from the final accrued VAT.
///
/// The export sales base reuses the VAT-derived figure rather than actual
/// non-EU net sales; this mirrors the established filing computation and
/// must not be changed without domain confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VatLedger {
    /// Output VAT collected over the period
    pub output_vat: Money,

    /// Net sales value implied by the VAT rate, excluding the VAT itself
    pub domestic_sales_base: Money,

    /// Gross sales value implied by the VAT rate
    pub export_sales_base: Money,
}

/// The reconciliation engine.
///
/// Owns the grand totals, the per-country breakdown, and the accepted
/// transactions in input order. All three are mutated only by the single
/// aggregation pass and are read-only once it completes.
///
/// # Output Ordering
///
/// Countries are kept in a `BTreeMap`, so the breakdown iterates in
/// sorted country-code order for deterministic, reproducible output.
pub struct ReconEngine {
    /// Totals across every accepted transaction.
    grand: Totals,

    /// Per-country totals, created zeroed on first sight of a country.
    countries: BTreeMap<String, Totals>,

    /// Accepted transactions in exact input order, for the listing.
    transactions: Vec<Transaction>,
}

impl ReconEngine {
    /// Creates a new empty engine.
    pub fn new() -> Self {
        ReconEngine {
            grand: Totals::new(),
            countries: BTreeMap::new(),
            transactions: Vec::new(),
        }
    }

    /// Processes export rows from a CSV reader in a single streaming pass.
    ///
    /// Out-of-scope rows are skipped silently. The first invalid in-scope
    /// row aborts the run with an error; there is no skip-and-continue
    /// mode, so a returned error means no totals can be trusted.
    pub fn process_csv<R: Read>(&mut self, reader: R) -> Result<()> {
        let mut csv_reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        for (row_idx, result) in csv_reader.deserialize::<RowRecord>().enumerate() {
            let row_num = row_idx + 2; // 1-indexed, accounting for header row

            let record = result?;
            match record.accept(row_num)? {
                Some(tx) => self.record_transaction(tx, row_num),
                None => {
                    debug!(
                        "Row {}: category '{}' out of scope, skipped",
                        row_num, record.category
                    );
                }
            }
        }

        Ok(())
    }

    /// Records one accepted transaction into both accumulators.
    ///
    /// The double write (grand plus country entry, same membership
    /// verdict) is what sustains the cross-foot property: the grand
    /// totals always equal the sum over the country entries.
    fn record_transaction(&mut self, tx: Transaction, row: usize) {
        let eu_member = is_eu_member(&tx.country);

        self.grand.record(&tx, eu_member);
        self.countries
            .entry(tx.country.clone())
            .or_default()
            .record(&tx, eu_member);

        debug!(
            "Row {}: {:?} {} in {} net {}",
            row, tx.category, tx.id, tx.country, tx.net
        );

        self.transactions.push(tx);
    }

    /// Derives the VAT ledger lines from the final accrued VAT.
    pub fn ledger(&self) -> VatLedger {
        let vat = self.grand.vat;
        let grossed_up = vat.gross_up();

        VatLedger {
            output_vat: vat,
            domestic_sales_base: grossed_up - vat,
            export_sales_base: grossed_up,
        }
    }

    /// Totals across every accepted transaction.
    pub fn grand_totals(&self) -> &Totals {
        &self.grand
    }

    /// Per-country totals in sorted country-code order.
    pub fn countries(&self) -> &BTreeMap<String, Totals> {
        &self.countries
    }

    /// Accepted transactions in exact input order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }
}

impl Default for ReconEngine {
    fn default() -> Self {
        Self::new()
    }
}
