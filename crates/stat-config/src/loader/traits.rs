//! 统一的配置加载接口
//!
//! 提供 `ConfigLoader` trait，为所有配置类型提供一致的加载体验。

use std::path::Path;

use crate::error::{ConfError, ConfResult};

/// 统一的配置加载接口
///
/// 所有配置类型都应实现此 trait 以提供一致的加载体验。
pub trait ConfigLoader: Sized {
    /// 配置类型名称（用于错误消息），例如 "Stat Lab"
    fn config_type_name() -> &'static str;

    /// 从文件路径加载配置
    ///
    /// 这是加载配置的主要入口点。它会：
    /// 1. 读取文件内容
    /// 2. 调用 `load_from_str` 进行解析，文件所在目录作为相对路径的基准
    /// 3. 调用 `validate` 进行验证
    ///
    /// # 错误
    /// - 文件不存在或无法读取
    /// - 文件内容格式错误（TOML 解析失败等）
    /// - 验证失败
    fn load_from_path(path: &Path) -> ConfResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfError::Read {
            kind: Self::config_type_name(),
            path: path.to_path_buf(),
            source,
        })?;

        let base = path.parent().unwrap_or_else(|| Path::new("."));
        let config = Self::load_from_str(&content, base)?;

        // 自动验证
        config.validate()?;
        log::debug!("loaded {} config from {:?}", Self::config_type_name(), path);

        Ok(config)
    }

    /// 从字符串内容加载配置（未验证）
    ///
    /// `base` 用于解析配置中的相对路径。
    fn load_from_str(content: &str, base: &Path) -> ConfResult<Self>;

    /// 验证配置（可选，默认不验证）
    fn validate(&self) -> ConfResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    // 用于测试的简单配置类型
    struct TestConfig {
        value: String,
    }

    impl ConfigLoader for TestConfig {
        fn config_type_name() -> &'static str {
            "TestConfig"
        }

        fn load_from_str(content: &str, _base: &Path) -> ConfResult<Self> {
            Ok(TestConfig {
                value: content.trim().to_string(),
            })
        }

        fn validate(&self) -> ConfResult<()> {
            if self.value.is_empty() {
                return Err(ConfError::validation("value must not be empty"));
            }
            Ok(())
        }
    }

    #[test]
    fn load_from_path_reads_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "test content").unwrap();

        let conf = TestConfig::load_from_path(file.path()).unwrap();
        assert_eq!(conf.value, "test content");
    }

    #[test]
    fn load_from_path_runs_validate() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "   ").unwrap();

        let err = TestConfig::load_from_path(file.path()).err().unwrap();
        assert!(err.to_string().contains("must not be empty"));
    }

    #[test]
    fn missing_file_names_config_type() {
        let err = TestConfig::load_from_path(Path::new("/definitely/not/here.toml"))
            .err()
            .unwrap();
        assert!(matches!(err, ConfError::Read { .. }));
        assert!(err.to_string().contains("TestConfig"));
    }
}
