//! Running totals for the reconciliation pass.
//!
//! The same accumulator type backs the per-country entries and the grand
//! total. Every accepted transaction is recorded into both with the same
//! call, which is what keeps the grand total footing exactly with the
//! country breakdown at every point in the run.

use crate::money::Money;
use crate::transaction::{Category, Transaction};

/// Addition-only accumulator for one country, or for the whole run.
///
/// # Invariants
///
/// - Fields are only ever increased by [`Totals::record`]; nothing resets
///   or rewinds them mid-run.
/// - `vat` stays exactly zero for the life of the run on entries whose
///   country is not an EU member.
#[derive(Debug, Clone, Default)]
pub struct Totals {
    /// Number of charge rows recorded
    pub charge_count: u64,

    /// Number of refund rows recorded
    pub refund_count: u64,

    /// Sum of charged amounts
    pub gross: Money,

    /// Sum of processor fees
    pub fee: Money,

    /// Sum of net amounts
    pub net: Money,

    /// Accrued VAT on net amounts, EU entries only
    pub vat: Money,
}

impl Totals {
    /// Creates a zeroed accumulator.
    pub fn new() -> Self {
        Totals::default()
    }

    /// Folds one accepted transaction into the accumulator.
    ///
    /// The caller passes the EU membership verdict so the same call
    /// updates a country entry and the grand total consistently.
    pub fn record(&mut self, tx: &Transaction, eu_member: bool) {
        match tx.category {
            Category::Charge => self.charge_count += 1,
            Category::Refund => self.refund_count += 1,
        }

        self.gross += tx.gross;
        self.fee += tx.fee;
        self.net += tx.net;

        if eu_member {
            self.vat += tx.net.vat_portion();
        }
    }
}
