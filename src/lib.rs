//! # VAT Reconciliation
//!
//! Reconciles a payment-processor transaction export into a periodic VAT
//! filing report: gross/fee/net totals, a per-country breakdown, EU VAT
//! liability, and the derived ledger lines.
//!
//! ## Design Principles
//!
//! - **Exact arithmetic**: all money flows through `rust_decimal`, with
//!   rounding applied only when a figure is rendered
//! - **All-or-nothing**: the first bad in-scope row aborts the run, no
//!   partial report is ever produced
//! - **Cross-foot**: the grand totals always equal the sum of the
//!   per-country totals
//! - **Deterministic output**: countries reported in sorted order
//!
//! ## Example
//!
//! ```no_run
//! use vat_recon::ReconEngine;
//! use std::io::Cursor;
//!
//! let csv = "balance_transaction_id,created_utc,card_country,currency,gross,fee,net,reporting_category\n\
//!            txn_1,2023-01-01,se,sek,103.00,3.00,100.00,charge\n";
//! let mut engine = ReconEngine::new();
//! engine.process_csv(Cursor::new(csv)).unwrap();
//! vat_recon::report::write_report(&engine, false, std::io::stdout()).unwrap();
//! ```

pub mod engine;
pub mod error;
pub mod eu;
pub mod money;
pub mod report;
pub mod totals;
pub mod transaction;

pub use engine::{ReconEngine, VatLedger};
pub use error::{ReconError, Result};
pub use money::Money;
pub use totals::Totals;
pub use transaction::{Category, RowRecord, Transaction, SETTLEMENT_CURRENCY};
