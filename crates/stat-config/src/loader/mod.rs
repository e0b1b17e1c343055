//! 统一的配置加载模块
//!
//! 本模块提供统一的配置加载接口 [`traits::ConfigLoader`] trait。
//!
//! ## 示例
//!
//! ```no_run
//! use stat_config::loader::ConfigLoader;
//! use stat_config::LabConfig;
//! use std::path::Path;
//!
//! let conf = LabConfig::load_from_path(Path::new("stat-lab.toml"))?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod traits;

pub use traits::ConfigLoader;
