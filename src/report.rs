//! Plain-text rendering of the reconciliation report.
//!
//! Pure presentation: every figure is computed by the engine, this module
//! only aligns and writes it.

use crate::engine::ReconEngine;
use crate::eu::is_eu_member;
use crate::totals::Totals;
use std::io::{self, Write};

const COUNTRY_WIDTH: usize = 8;
const COUNT_WIDTH: usize = 8;
const AMOUNT_WIDTH: usize = 12;
const LEDGER_LABEL_WIDTH: usize = 24;

/// Writes the full report: the optional transaction listing, the
/// per-country summary table, and the three VAT ledger lines.
pub fn write_report<W: Write>(engine: &ReconEngine, with_listing: bool, mut w: W) -> io::Result<()> {
    if with_listing {
        write_listing(engine, &mut w)?;
        writeln!(w)?;
    }

    write_summary(engine, &mut w)?;
    writeln!(w)?;
    write_ledger(engine, &mut w)?;

    Ok(())
}

/// Writes one line per accepted transaction, in input order.
pub fn write_listing<W: Write>(engine: &ReconEngine, mut w: W) -> io::Result<()> {
    for tx in engine.transactions() {
        writeln!(
            w,
            "{} {} {} {} {} {}",
            tx.id, tx.created, tx.country, tx.gross, tx.fee, tx.net
        )?;
    }
    Ok(())
}

/// Writes the summary table: one row per country plus a grand-total row.
///
/// The VAT column is left blank for non-EU countries.
pub fn write_summary<W: Write>(engine: &ReconEngine, mut w: W) -> io::Result<()> {
    write_summary_row(&mut w, "country", "charges", "refunds", "gross", "fee", "net", "vat")?;

    for (country, totals) in engine.countries() {
        let vat = if is_eu_member(country) {
            totals.vat.to_string()
        } else {
            String::new()
        };
        write_totals_row(&mut w, country, totals, &vat)?;
    }

    let grand = engine.grand_totals();
    write_totals_row(&mut w, "total", grand, &grand.vat.to_string())?;

    Ok(())
}

/// Writes the three ledger lines for the filing.
pub fn write_ledger<W: Write>(engine: &ReconEngine, mut w: W) -> io::Result<()> {
    let ledger = engine.ledger();

    write_ledger_line(&mut w, "Output VAT (25%):", &ledger.output_vat.to_string())?;
    write_ledger_line(&mut w, "Domestic sales base:", &ledger.domestic_sales_base.to_string())?;
    write_ledger_line(&mut w, "Export sales base:", &ledger.export_sales_base.to_string())?;

    Ok(())
}

fn write_totals_row<W: Write>(w: &mut W, label: &str, totals: &Totals, vat: &str) -> io::Result<()> {
    write_summary_row(
        w,
        label,
        &totals.charge_count.to_string(),
        &totals.refund_count.to_string(),
        &totals.gross.to_string(),
        &totals.fee.to_string(),
        &totals.net.to_string(),
        vat,
    )
}

#[allow(clippy::too_many_arguments)]
fn write_summary_row<W: Write>(
    w: &mut W,
    country: &str,
    charges: &str,
    refunds: &str,
    gross: &str,
    fee: &str,
    net: &str,
    vat: &str,
) -> io::Result<()> {
    writeln!(
        w,
        "{:<cw$} {:>nw$} {:>nw$} {:>aw$} {:>aw$} {:>aw$} {:>aw$}",
        country,
        charges,
        refunds,
        gross,
        fee,
        net,
        vat,
        cw = COUNTRY_WIDTH,
        nw = COUNT_WIDTH,
        aw = AMOUNT_WIDTH,
    )
}

fn write_ledger_line<W: Write>(w: &mut W, label: &str, amount: &str) -> io::Result<()> {
    writeln!(
        w,
        "{:<lw$} {:>aw$}",
        label,
        amount,
        lw = LEDGER_LABEL_WIDTH,
        aw = AMOUNT_WIDTH,
    )
}
