//! Command-line front end.
//!
//! Reads a workload from stdin (or `--input`), runs one policy and prints
//! the report on stdout. Logs go to stderr; `RUST_LOG` overrides `-v`.
//!
//! Exit codes: 0 on success, 1 on any usage, configuration or input error.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use cpu_schedule::input::read_processes;
use cpu_schedule::report::{render_text, Report};
use cpu_schedule::scheduler::Algorithm;

/// Report format options
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
enum OutputFormat {
    /// Gantt line, process table and averages
    Text,
    /// Pretty-printed JSON with extra KPIs
    Json,
}

/// CPU scheduling simulator
#[derive(Parser, Debug)]
#[command(name = "cpu-schedule", version)]
#[command(about = "Simulate a CPU scheduling policy over a process workload", long_about = None)]
struct Args {
    /// Scheduling algorithm
    #[arg(value_enum)]
    algorithm: Algorithm,

    /// Time quantum for round robin
    #[arg(allow_negative_numbers = true)]
    quantum: Option<i64>,

    /// Read the workload from a file instead of stdin
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            // --help and --version are not failures.
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_tracing(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let algorithm = args.algorithm;

    // Configuration is checked before any input is read.
    let policy = algorithm
        .policy(args.quantum)
        .context("invalid configuration")?;
    if args.quantum.is_some() && algorithm != Algorithm::RoundRobin {
        warn!(%algorithm, "quantum ignored for non round robin policy");
    }

    let processes = match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("cannot open {}", path.display()))?;
            read_processes(file)
        }
        None => read_processes(io::stdin().lock()),
    }
    .context("failed to read process records")?;

    info!(
        %algorithm,
        policy = policy.description(),
        processes = processes.len(),
        "starting simulation"
    );
    let outcome = policy.schedule(&processes);

    let rendered = match args.format {
        OutputFormat::Text => render_text(&outcome),
        OutputFormat::Json => {
            let mut json = Report::new(algorithm.as_str(), &outcome)
                .to_json()
                .context("failed to serialize report")?;
            json.push('\n');
            json
        }
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_rr_with_quantum() {
        let args = Args::try_parse_from(["cpu-schedule", "rr", "2"]).unwrap();
        assert_eq!(args.algorithm, Algorithm::RoundRobin);
        assert_eq!(args.quantum, Some(2));
        assert_eq!(args.format, OutputFormat::Text);
    }

    #[test]
    fn test_parse_negative_quantum_reaches_validation() {
        let args = Args::try_parse_from(["cpu-schedule", "rr", "-3"]).unwrap();
        assert_eq!(args.quantum, Some(-3));
        assert!(args.algorithm.policy(args.quantum).is_err());
    }

    #[test]
    fn test_parse_unknown_algorithm() {
        assert!(Args::try_parse_from(["cpu-schedule", "lottery"]).is_err());
        assert!(Args::try_parse_from(["cpu-schedule"]).is_err());
    }

    #[test]
    fn test_parse_json_and_input() {
        let args =
            Args::try_parse_from(["cpu-schedule", "sjf", "-f", "json", "-i", "w.txt", "-vv"])
                .unwrap();
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.input, Some(PathBuf::from("w.txt")));
        assert_eq!(args.verbose, 2);
    }
}
