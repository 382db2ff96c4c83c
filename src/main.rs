//! Nodal - resistive network DC solver
//!
//! Loads a circuit file, solves it, and prints node voltages and resistor
//! currents.
//!
//! # Usage
//!
//! ```bash
//! nodal divider.cir
//! nodal divider.cir --precision 6 --no-matrix -vv
//! ```

use std::path::PathBuf;

use clap::Parser;
use log::{LevelFilter, Log, Metadata, Record};
use nodal_core::{
    dsl,
    error::{NodalError, Result},
    report::{self, ReportConfig, DEFAULT_PRECISION},
    Analysis,
};

/// Resistive network DC solver
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the circuit description file
    #[arg(value_name = "CIRCUIT_FILE")]
    circuit_file: PathBuf,

    /// Maximum decimals in reported values
    #[arg(short, long, default_value_t = DEFAULT_PRECISION)]
    precision: usize,

    /// Do not print the augmented matrix
    #[arg(long)]
    no_matrix: bool,

    /// Increase log output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Writes log records to stderr.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging(verbose: u8) {
    // Skipped lines are printed directly, so warnings stay quiet by default.
    let level = match verbose {
        0 => LevelFilter::Error,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(err) = run(&args) {
        eprintln!("{}", error_message(&err));
        std::process::exit(1);
    }
}

/// The line printed for a failed run.
fn error_message(err: &NodalError) -> String {
    format!("Error: {}", err)
}

fn run(args: &Args) -> Result<()> {
    // Load the circuit file, reporting skipped lines
    let loaded = dsl::load_file(&args.circuit_file)?;
    for diagnostic in &loaded.diagnostics {
        eprintln!("warning: {}", diagnostic);
    }

    let config = ReportConfig::new()
        .with_precision(args.precision)
        .with_matrix(!args.no_matrix);

    // Validate and assemble
    let analysis = Analysis::new(&loaded.circuit)?;

    // Solve
    let solution = match analysis.solve() {
        Ok(solution) => solution,
        Err(err) => {
            if config.show_matrix {
                eprintln!("--- Augmented matrix ---");
                eprintln!("{}", analysis.matrix().augmented_string());
            }
            return Err(err);
        }
    };

    print!("{}", report::render(&solution, &config));

    Ok(())
}
