//! CLI argument definitions for `fss`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use fss_model::{Layout, Machine};

#[derive(Parser)]
#[command(
    name = "fss",
    version,
    about = "Factory Simulation Studio - configure and run factory line simulations",
    long_about = "Configure shoe factory and car assembly simulations, submit them to the\n\
                  simulation service and view or export the results."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the factory layouts and their machines.
    Layouts,

    /// Show the parameter table of a layout.
    Params(ParamsArgs),

    /// Edit parameters, run a simulation and show the result.
    Simulate(SimulateArgs),

    /// Render a previously saved result.
    Report(ReportArgs),

    /// Print the delimited export text of a saved result.
    Flatten(FlattenArgs),

    /// Show the effective settings.
    Config(ConfigArgs),
}

#[derive(Parser)]
pub struct ParamsArgs {
    /// Factory layout (shoe or car).
    #[arg(value_name = "LAYOUT")]
    pub layout: Layout,

    /// Start from a saved JSON parameter object instead of the defaults.
    #[arg(long = "params", value_name = "FILE")]
    pub params: Option<PathBuf>,
}

#[derive(Parser)]
pub struct SimulateArgs {
    /// Factory layout (shoe or car).
    #[arg(value_name = "LAYOUT")]
    pub layout: Layout,

    /// Start from a saved JSON parameter object instead of the defaults.
    #[arg(long = "params", value_name = "FILE")]
    pub params: Option<PathBuf>,

    /// Edit one field, as typed into its dialog (repeatable).
    #[arg(long = "set", value_name = "NAME=TEXT", value_parser = parse_assignment)]
    pub set: Vec<(String, String)>,

    /// Machine whose timing dialog to edit.
    #[arg(long = "machine", value_name = "MACHINE")]
    pub machine: Option<Machine>,

    /// Mean processing time typed into the machine dialog.
    #[arg(long = "mean", value_name = "TEXT", requires = "machine")]
    pub mean: Option<String>,

    /// Standard deviation typed into the machine dialog.
    #[arg(long = "std", value_name = "TEXT", requires = "machine")]
    pub std_dev: Option<String>,

    /// Setup time typed into the machine dialog.
    #[arg(long = "setup", value_name = "TEXT", requires = "machine")]
    pub setup: Option<String>,

    /// Simulation service base URL (overrides FSS_API_URL and settings).
    #[arg(long = "endpoint", value_name = "URL")]
    pub endpoint: Option<String>,

    /// Write the raw JSON result to a file.
    #[arg(long = "save-result", value_name = "FILE")]
    pub save_result: Option<PathBuf>,

    #[command(flatten)]
    pub export: ExportArgs,
}

#[derive(Parser)]
pub struct ReportArgs {
    /// Layout the result belongs to.
    #[arg(value_name = "LAYOUT")]
    pub layout: Layout,

    /// Saved JSON result.
    #[arg(value_name = "RESULT_JSON")]
    pub result: PathBuf,

    #[command(flatten)]
    pub export: ExportArgs,
}

#[derive(Parser)]
pub struct FlattenArgs {
    /// Saved JSON result.
    #[arg(value_name = "RESULT_JSON")]
    pub result: PathBuf,
}

#[derive(Parser)]
pub struct ConfigArgs {
    /// Write the effective settings back to the settings file.
    #[arg(long = "write")]
    pub write: bool,
}

#[derive(Args)]
pub struct ExportArgs {
    /// Save the export file into DIR (settings `export.output_dir` when omitted).
    #[arg(
        long = "export",
        value_name = "DIR",
        num_args = 0..=1,
        conflicts_with = "share"
    )]
    pub export: Option<Option<PathBuf>>,

    /// Hand the export file to the configured share command.
    #[arg(long = "share")]
    pub share: bool,
}

fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(name, text)| (name.trim().to_string(), text.to_string()))
        .filter(|(name, _)| !name.is_empty())
        .ok_or_else(|| format!("expected NAME=TEXT, got '{raw}'"))
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
