//! API 错误类型
//!
//! 提供统一的错误类型和结构化错误报告。

use serde::Serialize;
use thiserror::Error;

/// 渲染错误（带位置）
pub use slides_core::ParseError;

/// Slides 错误类型
#[derive(Error, Debug)]
pub enum SlidesError {
    /// 扫描或渲染错误（结构化）
    #[error("{0}")]
    Parse(#[from] ParseError),

    /// 读写输入输出失败
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// 配置文件无效
    #[error("Config error: {0}")]
    Config(String),

    /// 输入不是合法的 UTF-8
    #[error("{source_name}:{line}: input is not valid UTF-8")]
    InvalidUtf8 {
        source_name: String,
        line: usize,
        offset: usize,
    },
}

impl SlidesError {
    /// 获取错误行号（如果有）
    pub fn line(&self) -> Option<usize> {
        match self {
            SlidesError::Parse(e) => Some(e.line),
            SlidesError::InvalidUtf8 { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// 出错的字节偏移（如果有）
    pub fn offset(&self) -> Option<usize> {
        match self {
            SlidesError::Parse(e) => Some(e.offset),
            SlidesError::InvalidUtf8 { offset, .. } => Some(*offset),
            _ => None,
        }
    }

    /// 获取错误阶段名称
    pub fn phase(&self) -> &'static str {
        match self {
            SlidesError::Parse(_) => "parse",
            SlidesError::Io(_) => "io",
            SlidesError::Config(_) => "config",
            SlidesError::InvalidUtf8 { .. } => "decode",
        }
    }

    /// 转换为结构化错误报告
    ///
    /// CLI 可以直接打印，上层应用可以序列化为 JSON。
    /// 列号需要原文，见 [`ErrorReport::locate`]。
    pub fn to_report(&self) -> ErrorReport {
        let (error_kind, message) = match self {
            SlidesError::Parse(e) => ("ParseError", e.message.clone()),
            SlidesError::Io(e) => ("IoError", e.to_string()),
            SlidesError::Config(msg) => ("ConfigError", msg.clone()),
            SlidesError::InvalidUtf8 { .. } => ("InvalidUtf8", "input is not valid UTF-8".to_string()),
        };
        ErrorReport {
            phase: self.phase(),
            line: self.line(),
            column: None,
            offset: self.offset(),
            error_kind: error_kind.to_string(),
            message,
        }
    }
}

/// 结构化错误报告
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    /// 错误阶段: parse, io, config, decode
    pub phase: &'static str,
    /// 错误行号（1-based，如果有）
    pub line: Option<usize>,
    /// 错误列号（1-based，按码点计）
    pub column: Option<usize>,
    /// 字节偏移
    pub offset: Option<usize>,
    /// 错误类型（可用于程序化处理）
    pub error_kind: String,
    /// 人类可读的错误消息
    pub message: String,
}

impl ErrorReport {
    /// 根据原文补上列号
    pub fn locate(mut self, source: &str) -> Self {
        self.column = self.offset.and_then(|offset| slides_core::column_at(source, offset));
        self
    }

    /// 转换为 JSON 格式
    pub fn to_json(&self) -> String {
        // 所有字段都可序列化，不会失败
        serde_json::to_string(self).unwrap_or_default()
    }

    /// 简洁格式（适合终端）
    pub fn to_short(&self) -> String {
        format!("{}: {}", self.phase, self.message)
    }
}

impl std::fmt::Display for ErrorReport {
    /// 默认的 CLI 友好格式
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.line, self.column) {
            (Some(line), Some(col)) => {
                write!(f, "[{}:{}] {} error: {}", line, col, self.phase, self.message)
            }
            (Some(line), None) => write!(f, "[{}] {} error: {}", line, self.phase, self.message),
            _ => write!(f, "[{}] error: {}", self.phase, self.message),
        }
    }
}
