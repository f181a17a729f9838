//! CLI 配置
//!
//! 把配置文件中的日志设置和命令行覆盖合并成 tracing 级别

use slides_config::{LogLevel, LoggingConfig, Phase};
use tracing::Level;

/// CLI 日志配置
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub global: Level,
    pub scanner: Option<Level>,
    pub renderer: Option<Level>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            global: Level::WARN,
            scanner: None,
            renderer: None,
        }
    }
}

impl LogConfig {
    /// 命令行给出的级别覆盖所有阶段
    pub fn from_logging(logging: &LoggingConfig, cli_level: Option<LogLevel>) -> Self {
        match cli_level {
            Some(level) => Self {
                global: to_tracing(level),
                scanner: None,
                renderer: None,
            },
            None => Self {
                global: to_tracing(logging.level),
                scanner: logging.scanner.map(to_tracing),
                renderer: logging.renderer.map(to_tracing),
            },
        }
    }

    /// Get log level for a specific phase
    pub fn level_for(&self, phase: Phase) -> Level {
        match phase {
            Phase::Scanner => self.scanner.unwrap_or(self.global),
            Phase::Renderer => self.renderer.unwrap_or(self.global),
        }
    }
}

fn to_tracing(level: LogLevel) -> Level {
    match level {
        LogLevel::Trace => Level::TRACE,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Info => Level::INFO,
        LogLevel::Warn => Level::WARN,
        LogLevel::Error => Level::ERROR,
    }
}
