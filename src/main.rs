mod cli;

use clap::Parser;
use climate_report::config;
use climate_report::error::ReportError;
use climate_report::input;
use climate_report::report::{self, severity, OutputFormat};
use climate_report::{AnalysisResult, IssueSeverity, Sha256Hasher};
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const BLOCKING: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}

fn run() -> Result<i32, ReportError> {
    let cli = cli::Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let loaded = config::load_config(Path::new("."), cli.config.as_deref())?;
    let results = input::read_results(cli.input.as_deref())?;

    let format = if cli.pretty || loaded.output.pretty {
        OutputFormat::Pretty
    } else {
        OutputFormat::Compact
    };
    let rendered = report::render(&results, format, &Sha256Hasher)?;

    match cli.output.as_ref().or(loaded.output.path.as_ref()) {
        Some(path) => {
            std::fs::write(path, &rendered)?;
            info!(path = %path.display(), "wrote code climate report");
        }
        None => println!("{rendered}"),
    }

    if cli.exit_zero || loaded.exit.zero {
        return Ok(exit_code::SUCCESS);
    }
    Ok(exit_code_for(&results))
}

fn exit_code_for(results: &[AnalysisResult]) -> i32 {
    let mut severities = results
        .iter()
        .flat_map(|result| result.messages.iter())
        .map(severity::classify)
        .peekable();

    if severities.peek().is_none() {
        return exit_code::SUCCESS;
    }
    if severities.any(|level| level == IssueSeverity::Critical) {
        info!(level = IssueSeverity::Critical.as_str(), "report contains blocking issues");
        exit_code::BLOCKING
    } else {
        exit_code::WARNINGS
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
