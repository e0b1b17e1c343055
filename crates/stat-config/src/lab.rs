use std::path::{Path, PathBuf};

use derive_getters::Getters;
use serde_derive::{Deserialize, Serialize};

use crate::error::{ConfError, ConfResult};
use crate::loader::ConfigLoader;
use crate::types::{LogLevel, ReportFormat};

pub const CONF_FILE_NAME: &str = "stat-lab.toml";

/// 精度上限，超过后 f64 的小数位已无意义
pub const MAX_PRECISION: usize = 12;

/// 直方图分箱上限，文本图表超过这个数已不可读
pub const MAX_HISTOGRAM_BINS: usize = 200;

#[derive(Debug, PartialEq, Deserialize, Serialize, Clone)]
pub struct InputConf {
    /// 单个字符的分隔符
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    /// 未提供任何输入时使用的数字
    #[serde(default = "default_values")]
    pub default_values: String,
    /// 从文件读取输入；相对路径以配置文件所在目录为基准
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for InputConf {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            default_values: default_values(),
            file: None,
        }
    }
}

impl InputConf {
    /// 校验通过后恒有值
    pub fn delimiter_char(&self) -> char {
        self.delimiter.chars().next().unwrap_or(',')
    }
}

#[derive(Debug, PartialEq, Deserialize, Serialize, Clone)]
pub struct ReportConf {
    #[serde(default)]
    pub format: ReportFormat,
    #[serde(default = "default_precision")]
    pub precision: usize,
    #[serde(default = "default_histogram_bins")]
    pub histogram_bins: usize,
    /// 除 Q1/Q2/Q3 外额外计算的百分位
    #[serde(default)]
    pub extra_percentiles: Vec<f64>,
}

impl Default for ReportConf {
    fn default() -> Self {
        Self {
            format: ReportFormat::default(),
            precision: default_precision(),
            histogram_bins: default_histogram_bins(),
            extra_percentiles: Vec::new(),
        }
    }
}

#[derive(Debug, PartialEq, Deserialize, Serialize, Clone, Default)]
pub struct LogConf {
    #[serde(default)]
    pub level: LogLevel,
}

/// `stat-lab.toml` 的完整内容，所有段落均可省略
#[derive(Debug, PartialEq, Deserialize, Serialize, Clone, Default, Getters)]
pub struct LabConfig {
    #[serde(default)]
    input: InputConf,
    #[serde(default)]
    report: ReportConf,
    #[serde(default, rename = "log")]
    log_conf: LogConf,
}

impl LabConfig {
    /// 在 `dir` 下生成默认配置文件，已存在时除非 `force` 否则报错
    pub fn init_in(dir: &Path, force: bool) -> ConfResult<PathBuf> {
        let path = dir.join(CONF_FILE_NAME);
        if path.exists() && !force {
            return Err(ConfError::Exists { path });
        }
        let content = toml::to_string_pretty(&LabConfig::default())?;
        std::fs::write(&path, content).map_err(|source| ConfError::Write {
            path: path.clone(),
            source,
        })?;
        log::info!("wrote default config to {:?}", path);
        Ok(path)
    }

    /// 查找 `dir` 下的配置文件，不存在时使用默认配置
    pub fn load_or_default(dir: &Path) -> ConfResult<Self> {
        let path = dir.join(CONF_FILE_NAME);
        if path.is_file() {
            Self::load_from_path(&path)
        } else {
            log::debug!("no {} in {:?}, using defaults", CONF_FILE_NAME, dir);
            Ok(Self::default())
        }
    }
}

impl ConfigLoader for LabConfig {
    fn config_type_name() -> &'static str {
        "Stat Lab"
    }

    fn load_from_str(content: &str, base: &Path) -> ConfResult<Self> {
        let mut conf: LabConfig = toml::from_str(content)?;
        if let Some(file) = conf.input.file.take() {
            conf.input.file = Some(if file.is_relative() {
                base.join(file)
            } else {
                file
            });
        }
        Ok(conf)
    }

    fn validate(&self) -> ConfResult<()> {
        validate_delimiter(&self.input.delimiter)?;
        validate_histogram_bins(self.report.histogram_bins)?;
        validate_precision(self.report.precision)?;
        if let Some(p) = self
            .report
            .extra_percentiles
            .iter()
            .find(|p| !(0.0..=100.0).contains(*p))
        {
            return Err(ConfError::validation(format!(
                "[report].extra_percentiles must be within [0, 100], got {}",
                p
            )));
        }
        Ok(())
    }
}

/// 分隔符必须是单个字符，且不能是数字本身会用到的字符
pub fn validate_delimiter(delimiter: &str) -> ConfResult<()> {
    let mut chars = delimiter.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E') => {
            Err(ConfError::validation(format!(
                "delimiter '{}' collides with number syntax",
                c
            )))
        }
        (Some(_), None) => Ok(()),
        _ => Err(ConfError::validation(format!(
            "delimiter must be exactly one character, got '{}'",
            delimiter
        ))),
    }
}

/// 分箱数必须在 `[1, MAX_HISTOGRAM_BINS]` 内
pub fn validate_histogram_bins(bins: usize) -> ConfResult<()> {
    if (1..=MAX_HISTOGRAM_BINS).contains(&bins) {
        Ok(())
    } else {
        Err(ConfError::validation(format!(
            "histogram_bins must be within [1, {}], got {}",
            MAX_HISTOGRAM_BINS, bins
        )))
    }
}

pub fn validate_precision(precision: usize) -> ConfResult<()> {
    if precision <= MAX_PRECISION {
        Ok(())
    } else {
        Err(ConfError::validation(format!(
            "precision must be at most {}, got {}",
            MAX_PRECISION, precision
        )))
    }
}

// Default values and helper functions
pub fn default_delimiter() -> String {
    ",".to_string()
}

pub fn default_values() -> String {
    "3, 5, 2, 5, 8, 10, 3".to_string()
}

pub fn default_precision() -> usize {
    2
}

pub fn default_histogram_bins() -> usize {
    20
}
