//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "roster",
    version,
    about = "Check people-import sheets before they are imported",
    long_about = "Check people-import sheets before they are imported.\n\n\
                  Reads a CSV file and a JSON column mapping, reports which kinds of\n\
                  problems the sheet has, and resolves organization, tag and\n\
                  identifier columns against a directory."
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

    /// Allow cell values (personal data) in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Report the kinds of problems a configured sheet has.
    Check(CheckArgs),

    /// Resolve organization, tag and identifier columns against a directory.
    Resolve(ResolveArgs),

    /// Print a starting column configuration guessed from the header row.
    Suggest(SuggestArgs),

    /// List the fields a column can be mapped to.
    Fields,
}

/// Where the sheet comes from and how to read it.
#[derive(Args)]
pub struct SheetArgs {
    /// CSV file with the people to import.
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,

    /// JSON column configuration for the CSV.
    #[arg(long = "config", value_name = "JSON")]
    pub config: PathBuf,

    /// Field delimiter of the CSV file.
    #[arg(long = "delimiter", default_value_t = ',')]
    pub delimiter: char,

    /// Treat the first row as data even if the configuration says it is a header.
    #[arg(long = "no-headers")]
    pub no_headers: bool,
}

#[derive(Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub sheet: SheetArgs,

    /// Country for phone numbers, e.g. SE (overrides the configuration).
    #[arg(long = "country", value_name = "CODE")]
    pub country: Option<String>,

    /// Print the report as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub sheet: SheetArgs,

    /// JSON directory of organizations, tags and people.
    #[arg(long = "directory", value_name = "JSON")]
    pub directory: PathBuf,

    /// Print the report as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct SuggestArgs {
    /// CSV file with a header row.
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,

    /// Field delimiter of the CSV file.
    #[arg(long = "delimiter", default_value_t = ',')]
    pub delimiter: char,
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
