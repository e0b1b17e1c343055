//! Descriptive statistics engine.
//!
//! Parses a delimiter-separated list of numbers into a [`Sample`] and computes
//! mean, median, mode(s), sample variance, standard deviation and percentiles.
//! Nothing here knows about rendering; [`Report`] is the structured result
//! handed to presentation code.

pub mod engine;
pub mod error;
pub mod sample;
pub mod shape;
pub mod summary;

pub use engine::{mean, median, modes, percentile, std_dev, variance};
pub use error::{InputFault, StatError, StatResult};
pub use sample::{DEFAULT_DELIMITER, Sample};
pub use shape::{
    Bin, BoxPlot, DEFAULT_HISTOGRAM_BINS, DeviationRow, Deviations, Histogram, box_plot,
    deviations, histogram,
};
pub use summary::{Report, ReportOptions, StatSummary, summarize};
