//! 日志初始化
//!
//! 交互界面走 stdout，日志全部写到 stderr，避免互相干扰。

use tracing_subscriber::EnvFilter;

/// 初始化全局日志订阅器
///
/// 默认级别 info，可用 RUST_LOG 环境变量覆盖。
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
