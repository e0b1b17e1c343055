use stat_config::LogLevel;

use super::args::LogProfile;

/// 初始化 env_logger
///
/// `--log-profile` 优先；否则使用配置中的 `[log].level`，并允许 `RUST_LOG` 覆盖。
/// 重复调用只有第一次生效。
pub fn init_logging(profile: Option<LogProfile>, conf_level: LogLevel) {
    let mut builder = env_logger::Builder::new();
    match profile {
        Some(p) => {
            builder.filter_level(p.level_filter());
        }
        None => {
            builder.filter_level(conf_level.to_filter());
            builder.parse_default_env();
        }
    }
    builder.format_timestamp(None).format_target(false);
    if builder.try_init().is_ok() {
        log::debug!("logging initialized (profile: {:?})", profile);
    }
}
