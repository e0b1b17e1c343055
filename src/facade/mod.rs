//! Command line facade for the `statlab` binary.

pub mod args;
pub mod logging;
pub mod run;

pub use args::{InitArgs, InputArgs, LogProfile, PercentileArgs, ReportArgs, StatLabCLI};
pub use run::{dispatch, load_conf, read_sample, run_init, run_percentile, run_report};
