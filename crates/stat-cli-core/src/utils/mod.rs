//! Utility functions and helper modules
//!
//! Formatting helpers shared by the renderers; no statistics here.

pub mod chart;
pub mod fmt;

pub use fmt::{fmt_list, fmt_num, fmt_opt, fmt_plain};
