//! Daily Totals CLI
//!
//! Reads a transaction CSV (header line first) and writes one JSON line per
//! day with the summed amount of qualifying transactions.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- transactions.csv > results.jsonl
//! cargo run -- transactions.csv results.jsonl
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `info` or `debug` to control logging verbosity

use daily_totals::{Pipeline, PipelineError, Result};
use log::info;
use std::env;
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return Err(PipelineError::MissingArgument);
    }

    let input_path = &args[1];
    let file = File::open(input_path)?;
    let reader = BufReader::new(file);

    let mut pipeline = Pipeline::new();
    pipeline.process_csv(reader)?;

    // The output file is only created once the whole input has parsed.
    match args.get(2) {
        Some(output_path) => {
            let writer = BufWriter::new(File::create(output_path)?);
            pipeline.write_output(writer)?;
            info!("Wrote results to {}", output_path);
        }
        None => {
            let stdout = io::stdout();
            let handle = stdout.lock();
            pipeline.write_output(handle)?;
        }
    }

    Ok(())
}
