//! Integration tests for the reconciliation CLI.
//!
//! These run the actual binary against temp-file exports and verify the
//! printed report and the failure behavior.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

const HEADER: &str =
    "balance_transaction_id,created_utc,card_country,currency,gross,fee,net,reporting_category";

/// Writes an export with the given rows to a temp file.
fn export_file(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{}", HEADER).unwrap();
    for row in rows {
        writeln!(file, "{}", row).unwrap();
    }
    file.flush().unwrap();
    file
}

fn run_report(rows: &[&str]) -> String {
    let file = export_file(rows);
    let mut cmd = Command::cargo_bin("vat-recon").unwrap();
    let assert = cmd.arg(file.path()).assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

#[test]
fn test_report_contains_country_rows_and_grand_total() {
    let output = run_report(&[
        "txn_1,2023-01-01,se,sek,103.00,3.00,100.00,charge",
        "txn_2,2023-01-02,us,sek,51.50,1.50,50.00,charge",
        "txn_3,2023-01-03,se,sek,-20.00,0.00,-20.00,refund",
    ]);

    let se_line = output.lines().find(|l| l.starts_with("se")).unwrap();
    assert!(se_line.contains("80.00"));
    assert!(se_line.contains("20.00"));

    let total_line = output.lines().find(|l| l.starts_with("total")).unwrap();
    assert!(total_line.contains("130.00"));
    assert!(total_line.contains("20.00"));
}

#[test]
fn test_report_contains_ledger_lines() {
    let output = run_report(&["txn_1,2023-01-01,se,sek,100.00,0.00,100.00,charge"]);

    assert!(output.contains("Output VAT (25%):"));
    assert!(output.contains("Domestic sales base:"));
    assert!(output.contains("Export sales base:"));
    assert!(output.contains("75.00"));
    assert!(output.contains("100.00"));
}

#[test]
fn test_listing_only_when_requested() {
    let rows = ["txn_1,2023-01-01,se,sek,10.00,0.00,10.00,charge"];

    let output = run_report(&rows);
    assert!(!output.contains("txn_1"));

    let file = export_file(&rows);
    let mut cmd = Command::cargo_bin("vat-recon").unwrap();
    let assert = cmd.arg("list").arg(file.path()).assert().success();
    let listed = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(listed.contains("txn_1"));
}

#[test]
fn test_excluded_categories_do_not_appear() {
    let output = run_report(&[
        "txn_1,2023-01-01,se,sek,10.00,0.00,10.00,charge",
        "po_1,2023-01-02,se,sek,-10.00,0.00,-10.00,payout",
    ]);

    let total_line = output.lines().find(|l| l.starts_with("total")).unwrap();
    let cells: Vec<&str> = total_line.split_whitespace().collect();
    // country, charges, refunds, gross, fee, net, vat
    assert_eq!(cells, ["total", "1", "0", "10.00", "0.00", "10.00", "2.50"]);
}

#[test]
fn test_currency_mismatch_fails_with_no_report() {
    let file = export_file(&[
        "txn_1,2023-01-01,se,sek,10.00,0.00,10.00,charge",
        "txn_2,2023-01-02,us,usd,5.00,0.00,5.00,charge",
    ]);

    let mut cmd = Command::cargo_bin("vat-recon").unwrap();
    cmd.arg(file.path())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("settlement currency"));
}

#[test]
fn test_missing_country_fails_with_no_report() {
    let file = export_file(&["txn_1,2023-01-01,,sek,10.00,0.00,10.00,charge"]);

    let mut cmd = Command::cargo_bin("vat-recon").unwrap();
    cmd.arg(file.path())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("no card country"));
}

#[test]
fn test_missing_file_error() {
    let mut cmd = Command::cargo_bin("vat-recon").unwrap();
    cmd.arg("nonexistent.csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error").or(predicate::str::contains("Error")));
}

#[test]
fn test_missing_argument_error() {
    let mut cmd = Command::cargo_bin("vat-recon").unwrap();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Missing input file"));
}

#[test]
fn test_listing_mode_without_filename_is_usage_error() {
    let mut cmd = Command::cargo_bin("vat-recon").unwrap();
    cmd.arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing input file"));
}

#[test]
fn test_money_rendered_with_two_decimal_places() {
    let output = run_report(&["txn_1,2023-01-01,se,sek,10.5,0.5,10,charge"]);

    let se_line = output.lines().find(|l| l.starts_with("se")).unwrap();
    assert!(se_line.contains("10.50"));
    assert!(se_line.contains("0.50"));
    assert!(se_line.contains("10.00"));
}
