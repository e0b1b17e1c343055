//! Configuration for stat-lab (`stat-lab.toml`).

pub mod error;
pub mod lab;
pub mod loader;
pub mod types;

pub use error::{ConfError, ConfResult};
pub use lab::{
    CONF_FILE_NAME, InputConf, LabConfig, LogConf, MAX_HISTOGRAM_BINS, MAX_PRECISION, ReportConf,
    validate_delimiter, validate_histogram_bins, validate_precision,
};
pub use loader::ConfigLoader;
pub use types::{LogLevel, ReportFormat};
