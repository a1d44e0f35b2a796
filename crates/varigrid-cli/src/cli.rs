//! CLI argument definitions for the varigrid tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use varigrid_model::GroupLabeling;

#[derive(Parser)]
#[command(
    name = "varigrid",
    version,
    about = "varigrid - Classify spec-sheet columns into variation groups",
    long_about = "Classify the data columns of a spec-sheet grid into variation groups.\n\n\
                  Columns sharing the same apply/not-apply marks across the selected\n\
                  feature/item rows land in one group with a stable id and color."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
    /// Classify a grid's data columns into variation groups.
    Analyze(AnalyzeArgs),

    /// Show the feature/item tree extracted from a grid.
    Features(FeaturesArgs),

    /// Rename groups in a saved analysis, keeping mappings consistent.
    Relabel(RelabelArgs),
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Path to the grid CSV (positional cells, no header row).
    #[arg(value_name = "GRID_CSV")]
    pub grid: PathBuf,

    /// Analysis configuration file (JSON).
    #[arg(long = "config", value_name = "PATH")]
    pub config: PathBuf,

    /// Named selections file (JSON). Defaults to one selection covering
    /// every extracted feature/item.
    #[arg(long = "selections", value_name = "PATH")]
    pub selections: Option<PathBuf>,

    /// Group id convention.
    #[arg(long = "labels", value_enum, default_value = "letters")]
    pub labels: LabelArg,

    /// Write the grid with appended group rows to this CSV.
    #[arg(long = "out-grid", value_name = "PATH")]
    pub out_grid: Option<PathBuf>,

    /// Write the analysis as JSON to this path.
    #[arg(long = "out-analysis", value_name = "PATH")]
    pub out_analysis: Option<PathBuf>,
}

#[derive(Parser)]
pub struct FeaturesArgs {
    /// Path to the grid CSV.
    #[arg(value_name = "GRID_CSV")]
    pub grid: PathBuf,

    /// Analysis configuration file (JSON).
    #[arg(long = "config", value_name = "PATH")]
    pub config: PathBuf,
}

#[derive(Parser)]
pub struct RelabelArgs {
    /// Analysis JSON written by `analyze --out-analysis`.
    #[arg(value_name = "ANALYSIS_JSON")]
    pub analysis: PathBuf,

    /// Rename a group id (repeatable).
    #[arg(long = "rename", value_name = "OLD=NEW", required = true)]
    pub renames: Vec<String>,

    /// Write the renamed analysis here (defaults to stdout).
    #[arg(long = "out", value_name = "PATH")]
    pub out: Option<PathBuf>,
}

/// Group id conventions.
#[derive(Clone, Copy, ValueEnum)]
pub enum LabelArg {
    /// A, B, ..., Z, AA, ...
    Letters,
    /// 1, 2, 3, ...
    Numbers,
}

impl From<LabelArg> for GroupLabeling {
    fn from(value: LabelArg) -> Self {
        match value {
            LabelArg::Letters => Self::Letters,
            LabelArg::Numbers => Self::Numeric,
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
