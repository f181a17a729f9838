//! 渲染错误类型

use thiserror::Error;

/// 带位置的解析错误，显示为 `<source-name>:<line>: <message>`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{source_name}:{line}: {message}")]
pub struct ParseError {
    /// 输入名称，仅用于诊断
    pub source_name: String,
    /// 出错行（1-based）
    pub line: usize,
    /// 出错 token 的字节偏移
    pub offset: usize,
    pub message: String,
}

impl ParseError {
    pub fn new(
        source_name: impl Into<String>,
        line: usize,
        offset: usize,
        message: impl Into<String>,
    ) -> Self {
        Self {
            source_name: source_name.into(),
            line,
            offset,
            message: message.into(),
        }
    }

    /// 出错位置所在列（1-based，按码点计）
    pub fn column_in(&self, source: &str) -> Option<usize> {
        column_at(source, self.offset)
    }
}

/// 字节偏移所在列（1-based，按码点计）；偏移越界或不在字符边界上时返回 `None`
pub fn column_at(source: &str, offset: usize) -> Option<usize> {
    let prefix = source.get(..offset)?;
    let line_start = prefix.rfind('\n').map(|i| i + 1).unwrap_or(0);
    Some(prefix[line_start..].chars().count() + 1)
}

/// 解析结果类型
pub type ParseResult<T> = Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_format() {
        let err = ParseError::new("talk.txt", 3, 10, "image reference without a path");
        assert_eq!(err.to_string(), "talk.txt:3: image reference without a path");
    }

    #[test]
    fn test_column_in() {
        let source = "ab\ncd@";
        let err = ParseError::new("x", 2, 5, "boom");
        assert_eq!(err.column_in(source), Some(3));
        assert_eq!(ParseError::new("x", 1, 0, "boom").column_in(source), Some(1));
        assert_eq!(ParseError::new("x", 1, 99, "boom").column_in(source), None);
    }
}
