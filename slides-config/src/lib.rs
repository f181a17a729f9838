//! Slides Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It serves as the shared configuration vocabulary across all slides crates.

use serde::Deserialize;

/// Root of the `slides.json` configuration file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SlidesConfig {
    /// Renderer options
    pub render: RenderConfig,
    /// Logging options
    pub logging: LoggingConfig,
}

/// Configuration for renderer output
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// 图片引用的路径前缀，由静态文件服务负责解析
    pub image_prefix: String,
    /// 一个 Tab 展开成多少个 `&nbsp;`
    pub tab_width: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            image_prefix: "/f/".to_string(),
            tab_width: 4,
        }
    }
}

/// 日志级别（配置文件中使用小写）
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }

    /// Parse a level name, case-insensitive. `silent` maps to `error`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "silent" | "error" => Some(LogLevel::Error),
            "warn" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }
}

/// Configuration for logging, with optional per-phase overrides
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 全局级别
    pub level: LogLevel,
    /// Scanner 阶段级别（未设置时使用全局级别）
    pub scanner: Option<LogLevel>,
    /// Renderer 阶段级别（未设置时使用全局级别）
    pub renderer: Option<LogLevel>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Warn,
            scanner: None,
            renderer: None,
        }
    }
}

impl LoggingConfig {
    /// Effective level for a phase
    pub fn level_for(&self, phase: Phase) -> LogLevel {
        match phase {
            Phase::Scanner => self.scanner.unwrap_or(self.level),
            Phase::Renderer => self.renderer.unwrap_or(self.level),
        }
    }
}

/// Pipeline phase enum for phase-specific configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Scanner,
    Renderer,
}

impl Phase {
    /// Get the string name of the phase
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Scanner => "scanner",
            Phase::Renderer => "renderer",
        }
    }

    /// Get the log target name for this phase
    pub fn target(&self) -> String {
        format!("slides::{}", self.as_str())
    }
}
