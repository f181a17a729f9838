//! CLI 日志系统初始化
//!
//! 基于 `tracing-subscriber` 实现分阶段日志控制。
//! 日志写到 stderr，stdout 留给页面输出。

use crate::config::LogConfig;
use slides_config::Phase;
use std::io;
use tracing_subscriber::{
    filter::Targets, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

/// 日志输出格式
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// 彩色格式化（开发使用）
    Pretty,
    /// 紧凑格式
    Compact,
    /// JSON 格式（工具集成）
    Json,
}

/// 按阶段构建过滤器
pub fn build_targets(log_config: &LogConfig) -> Targets {
    Targets::new()
        .with_default(log_config.global)
        .with_target(
            Phase::Scanner.target(),
            log_config.level_for(Phase::Scanner),
        )
        .with_target(
            Phase::Renderer.target(),
            log_config.level_for(Phase::Renderer),
        )
        .with_target("slides::cli", log_config.global)
}

/// 初始化日志系统；设置了 `RUST_LOG` 时以它为准
pub fn init(log_config: &LogConfig, format: LogFormat) {
    let layer = create_format_layer(format, io::stderr);
    match EnvFilter::try_from_default_env() {
        Ok(env_filter) => tracing_subscriber::registry()
            .with(layer.with_filter(env_filter))
            .init(),
        Err(_) => tracing_subscriber::registry()
            .with(layer.with_filter(build_targets(log_config)))
            .init(),
    }
}

/// Create formatter layer based on format
fn create_format_layer<W, F>(
    format: LogFormat,
    make_writer: F,
) -> Box<dyn Layer<tracing_subscriber::Registry> + Send + Sync>
where
    W: io::Write + Send + Sync + 'static,
    F: Fn() -> W + Send + Sync + 'static,
{
    match format {
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_target(true)
            .with_timer(fmt::time::time())
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(false)
            .without_time()
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_timer(fmt::time::time())
            .with_writer(make_writer)
            .boxed(),
    }
}
