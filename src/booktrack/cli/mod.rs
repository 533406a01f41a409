//! # CLI Layer
//!
//! One possible UI client for booktrack. This is the only place that knows
//! about stdout/stderr and argument parsing.
//!
//! ## Flow
//!
//! 1. Parse arguments (`args.rs`) and install the tracing subscriber
//! 2. Open the catalog through `Tracker::open` (validates the `.txt` name,
//!    creates missing files, loads `booktrack.json`)
//! 3. Ingest any `--ingest` files concurrently
//! 4. Run the single operation argument
//! 5. Always print the session statistics and the closing line, even when
//!    opening the catalog failed
//!
//! Failures after step 2 are counted, logged to the error log and shown, but
//! never change the exit status.

mod args;
mod print;

use args::Cli;
use booktrack::api::Tracker;
use booktrack::error::Result;
use booktrack::metrics::MetricsSnapshot;
use clap::Parser;
use print::{print_error, print_ingest_reports, print_operation_report, print_statistics};
use tracing_subscriber::EnvFilter;

pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stats = match execute(&cli) {
        Ok(stats) => stats,
        Err(e) => {
            print_error(&e.to_string());
            MetricsSnapshot {
                errors: 1,
                ..MetricsSnapshot::default()
            }
        }
    };

    print_statistics(&stats);
    println!("Thank you for using the Library Book Tracker.");
}

fn execute(cli: &Cli) -> Result<MetricsSnapshot> {
    let mut tracker = Tracker::open(&cli.catalog)?;
    if let Some(workers) = cli.workers {
        tracker = tracker.with_workers(workers);
    }

    if !cli.ingest.is_empty() {
        let reports = tracker.ingest(cli.ingest.iter().cloned());
        print_ingest_reports(&reports);
    }

    let report = tracker.run_operation(&cli.operation);
    print_operation_report(&report);

    Ok(tracker.metrics())
}

/// Logs go to stderr; `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default_directive = if verbose { "booktrack=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
