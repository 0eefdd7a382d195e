use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "climate-report",
    version,
    about = "Convert ESLint JSON results into a Code Climate issue report"
)]
pub struct Cli {
    /// ESLint JSON results file; reads stdin when omitted or `-`
    pub input: Option<PathBuf>,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pretty-print the report
    #[arg(long)]
    pub pretty: bool,

    /// Exit with 0 even when the report contains issues
    #[arg(long)]
    pub exit_zero: bool,

    /// Config file to use instead of ./climate-report.toml
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}
