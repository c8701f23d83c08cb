//! VAT Reconciliation CLI
//!
//! Reads a payment-processor CSV export and prints the VAT filing report
//! to standard output.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- export.csv
//! cargo run -- list export.csv   # include the transaction listing
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::process;
use vat_recon::{report, ReconEngine, ReconError, Result};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut args = env::args().skip(1);

    let first = args.next().ok_or(ReconError::MissingArgument)?;
    let (with_listing, input_path) = if first == "list" {
        (true, args.next().ok_or(ReconError::MissingArgument)?)
    } else {
        (false, first)
    };

    let file = File::open(input_path)?;
    let reader = BufReader::new(file);

    let mut engine = ReconEngine::new();
    engine.process_csv(reader)?;

    // The pass completed, so the report is internally consistent and safe
    // to emit.
    let stdout = io::stdout();
    let handle = stdout.lock();
    report::write_report(&engine, with_listing, handle)?;

    Ok(())
}
