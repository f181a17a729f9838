//! Token 定义

use serde::Serialize;
use std::fmt;

/// Token 类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    /// 输入结束，成功的 token 流总以它结尾
    EndOfInput,
    /// 格式错误，value 为错误消息，其后不再有任何 token
    Error,
    /// `#` 注释，value 不含标记和前导空白
    Comment,
    /// `@` 图片引用，value 为路径
    Image,
    /// 普通文本
    Text,
    /// 行首空格
    Space,
    /// 行首 Tab
    Tab,
    /// 单个换行，或 `.` + `\n` 强制换行
    Newline,
    /// 两个及以上连续换行，幻灯片分界
    ParagraphDelimiter,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::EndOfInput => "EndOfInput",
            TokenKind::Error => "Error",
            TokenKind::Comment => "Comment",
            TokenKind::Image => "Image",
            TokenKind::Text => "Text",
            TokenKind::Space => "Space",
            TokenKind::Tab => "Tab",
            TokenKind::Newline => "Newline",
            TokenKind::ParagraphDelimiter => "ParagraphDelimiter",
        }
    }

    /// 终结 token：之后不会再产生 token
    pub fn is_terminal(&self) -> bool {
        matches!(self, TokenKind::EndOfInput | TokenKind::Error)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Token 结构
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    /// token 起点在源文本中的字节偏移
    pub offset: usize,
    /// token 起点所在行（1-based）
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>, offset: usize, line: usize) -> Self {
        Self {
            kind,
            value: value.into(),
            offset,
            line,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.kind.is_terminal()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::EndOfInput => write!(f, "EOF"),
            TokenKind::Error => write!(f, "{}", self.value),
            _ if self.value.chars().count() > 20 => {
                let head: String = self.value.chars().take(20).collect();
                write!(f, "{}({:?}...)", self.kind, head)
            }
            _ => write!(f, "{}({:?})", self.kind, self.value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_kinds() {
        assert!(TokenKind::EndOfInput.is_terminal());
        assert!(TokenKind::Error.is_terminal());
        assert!(!TokenKind::ParagraphDelimiter.is_terminal());
    }

    #[test]
    fn test_display_short_value() {
        let token = Token::new(TokenKind::Text, "hello", 0, 1);
        assert_eq!(token.to_string(), "Text(\"hello\")");
    }

    #[test]
    fn test_display_truncates_long_value() {
        let token = Token::new(TokenKind::Comment, "a".repeat(30), 0, 1);
        let shown = token.to_string();
        assert!(shown.starts_with("Comment(\""));
        assert!(shown.ends_with("...)"));
        assert!(shown.len() < 40);
    }

    #[test]
    fn test_display_eof_and_error() {
        assert_eq!(Token::new(TokenKind::EndOfInput, "", 3, 1).to_string(), "EOF");
        assert_eq!(Token::new(TokenKind::Error, "boom", 0, 2).to_string(), "boom");
    }
}
