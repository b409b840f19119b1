//! CLI argument definitions for the NAICS lookup tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use naics_model::CodeLevel;

#[derive(Parser)]
#[command(
    name = "naics",
    version,
    about = "Look up NAICS industry codes and titles",
    long_about = "Look up NAICS industry codes and titles.\n\n\
                  Reads data/2-6 digit_2017_Codes.csv (the census 2017 table saved \
                  as CSV) unless --table or NAICS_TABLE_PATH points elsewhere."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub table: TableArgs,

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

    /// Include timestamps in log lines.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the module path in log lines.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,
}

/// Where the code table comes from and which columns to read.
#[derive(Args)]
pub struct TableArgs {
    /// Code table CSV (default: $NAICS_TABLE_PATH, then data/2-6 digit_2017_Codes.csv).
    #[arg(long = "table", value_name = "PATH", global = true)]
    pub table: Option<PathBuf>,

    /// Spreadsheet-style code and title columns, e.g. "B:C".
    ///
    /// Takes precedence over --code-column and --title-column.
    #[arg(long = "columns", value_name = "RANGE", global = true)]
    pub columns: Option<String>,

    /// Header name of the code column (default: detected).
    #[arg(long = "code-column", value_name = "NAME", global = true)]
    pub code_column: Option<String>,

    /// Header name of the title column (default: detected).
    #[arg(long = "title-column", value_name = "NAME", global = true)]
    pub title_column: Option<String>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Report whether each code is in the table (exit status 1 if any is not).
    Check(CodesArgs),

    /// Print the title of each code ("-" when the code is unknown).
    Title(TitleArgs),

    /// List table entries.
    List(ListArgs),

    /// Summarize the loaded table.
    Info,
}

#[derive(Parser)]
pub struct CodesArgs {
    /// Codes to look up (exact, case-sensitive).
    #[arg(value_name = "CODE", required = true)]
    pub codes: Vec<String>,
}

#[derive(Parser)]
pub struct TitleArgs {
    /// Codes to look up (exact, case-sensitive).
    #[arg(value_name = "CODE", required = true)]
    pub codes: Vec<String>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormatArg,
}

#[derive(Parser)]
pub struct ListArgs {
    /// Only codes starting with this prefix.
    #[arg(long = "prefix", value_name = "PREFIX")]
    pub prefix: Option<String>,

    /// Only codes at this hierarchy level.
    #[arg(long = "level", value_enum)]
    pub level: Option<LevelArg>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormatArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Text,
    Json,
}

/// NAICS hierarchy level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LevelArg {
    Sector,
    Subsector,
    IndustryGroup,
    NaicsIndustry,
    NationalIndustry,
}

impl From<LevelArg> for CodeLevel {
    fn from(level: LevelArg) -> Self {
        match level {
            LevelArg::Sector => CodeLevel::Sector,
            LevelArg::Subsector => CodeLevel::Subsector,
            LevelArg::IndustryGroup => CodeLevel::IndustryGroup,
            LevelArg::NaicsIndustry => CodeLevel::NaicsIndustry,
            LevelArg::NationalIndustry => CodeLevel::NationalIndustry,
        }
    }
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
