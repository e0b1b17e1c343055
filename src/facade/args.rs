use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};
use stat_config::ReportFormat;

#[derive(Parser, Debug)]
#[command(
    name = "statlab",
    version,
    about = "Learn descriptive statistics with your own numbers"
)]
pub enum StatLabCLI {
    /// Compute and explain mean, median, mode, variance, std deviation and percentiles
    #[command(name = "report")]
    Report(ReportArgs),

    /// Print a single percentile of the input
    #[command(name = "percentile", visible_alias = "pct")]
    Percentile(PercentileArgs),

    /// Write a default stat-lab.toml
    #[command(name = "init")]
    Init(InitArgs),
}

/// Log profile preset, overrides `[log].level`
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogProfile {
    Dev,
    Int,
    Prod,
}

impl LogProfile {
    pub fn level_filter(self) -> log::LevelFilter {
        match self {
            LogProfile::Dev => log::LevelFilter::Debug,
            LogProfile::Int => log::LevelFilter::Info,
            LogProfile::Prod => log::LevelFilter::Warn,
        }
    }
}

#[derive(Args, Debug, Default, Clone)]
pub struct InputArgs {
    /// Numbers separated by the delimiter, e.g. "3, 5, 2, 5, 8, 10, 3"
    #[clap(short = 'v', long)]
    pub values: Option<String>,
    /// Read numbers from a file; `-` reads stdin
    #[clap(short = 'f', long)]
    pub file: Option<PathBuf>,
    /// Single-character delimiter; falls back to conf [input].delimiter
    #[clap(short = 'd', long)]
    pub delimiter: Option<String>,
    /// Config file; default is ./stat-lab.toml when present
    #[clap(long = "conf")]
    pub conf: Option<PathBuf>,
    /// Log profile: dev/int/prod (override [log].level)
    #[clap(long = "log-profile", value_enum)]
    pub log_profile: Option<LogProfile>,
}

#[derive(Args, Debug, Default, Clone)]
pub struct ReportArgs {
    #[command(flatten)]
    pub input: InputArgs,
    /// Output format: table, json or lesson
    #[clap(long)]
    pub format: Option<ReportFormat>,
    /// Decimal places for printed numbers
    #[clap(long)]
    pub precision: Option<usize>,
    /// Histogram bin count
    #[clap(long)]
    pub bins: Option<usize>,
    /// Extra percentile to compute, repeatable: -p 10 -p 90
    #[clap(short = 'p', long = "percentile")]
    pub percentiles: Vec<f64>,
}

#[derive(Args, Debug, Clone)]
pub struct PercentileArgs {
    /// Percentile in [0, 100]
    pub p: f64,
    #[command(flatten)]
    pub input: InputArgs,
    /// Decimal places for the printed value
    #[clap(long)]
    pub precision: Option<usize>,
}

#[derive(Args, Debug, Clone)]
pub struct InitArgs {
    /// Target directory
    #[clap(long, default_value = ".")]
    pub dir: PathBuf,
    /// Overwrite an existing stat-lab.toml
    #[clap(long)]
    pub force: bool,
}
