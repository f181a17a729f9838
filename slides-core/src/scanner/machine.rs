//! Scanner 状态机
//!
//! 逐码点扫描，每次 `next_token` 推进状态机直到恰好产出一个 token。
//!
//! ```text
//! Default ──'\n'──▶ Newline ──▶ Newline | ParagraphDelimiter
//!    │ ──'#'──▶ Comment ──▶ CommentEnd（吞掉行尾换行）
//!    │ ──'@'──▶ Image
//!    │ ──'.'──▶ Dot ──'\n'──▶ Newline，否则 ▶ Text
//!    │ ──'\\'─▶ 丢弃反斜杠，下一个码点按文本处理 ▶ Text
//!    │ ──' ' / '\t'──▶ Space / Tab
//!    └ ──其他──▶ Text
//! ```

use super::cursor::Cursor;
use super::token::{Token, TokenKind};
use tracing::{debug, trace};

/// 状态机状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Default,
    Text,
    Newline,
    Comment,
    CommentEnd,
    Image,
    Dot,
    /// 已产出 EndOfInput 或 Error
    Done,
}

/// 幻灯片标记语言的扫描器
///
/// 同时实现了 `Iterator`，可以直接同步拉取；需要生产者/消费者交接时
/// 使用 [`super::TokenStream`]。
#[derive(Debug, Clone)]
pub struct Scanner {
    cursor: Cursor,
    state: State,
}

impl Scanner {
    pub fn new(input: impl Into<String>) -> Self {
        let cursor = Cursor::new(input);
        debug!(target: "slides::scanner", bytes = cursor.input().len(), "Creating new Scanner");
        Self {
            cursor,
            state: State::Default,
        }
    }

    /// 推进状态机直到产出下一个 token；终结 token 之后返回 `None`
    pub fn next_token(&mut self) -> Option<Token> {
        loop {
            let produced = match self.state {
                State::Default => self.scan_default(),
                State::Text => self.scan_text(),
                State::Newline => self.scan_newline(),
                State::Comment => self.scan_comment(),
                State::CommentEnd => self.scan_comment_end(),
                State::Image => self.scan_image(),
                State::Dot => self.scan_dot(),
                State::Done => return None,
            };

            if let Some(token) = produced {
                trace!(
                    target: "slides::scanner",
                    kind = %token.kind,
                    offset = token.offset,
                    line = token.line,
                    "Produced token"
                );
                return Some(token);
            }
        }
    }

    /// 当前是否已经产出终结 token
    pub fn is_done(&self) -> bool {
        self.state == State::Done
    }

    /// 以当前 token 起点到游标位置的文本构造 token，并开始下一个 token
    fn emit(&mut self, kind: TokenKind) -> Option<Token> {
        let token = Token::new(
            kind,
            self.cursor.pending(),
            self.cursor.start(),
            self.cursor.start_line(),
        );
        self.cursor.ignore();
        Some(token)
    }

    /// 产出 Error 并停机，`offset` 指向出错的标记字符
    fn error(&mut self, offset: usize, message: impl Into<String>) -> Option<Token> {
        let message = message.into();
        debug!(target: "slides::scanner", line = self.cursor.line(), offset, %message, "Scan error");
        self.state = State::Done;
        Some(Token::new(TokenKind::Error, message, offset, self.cursor.line()))
    }

    /// 吸收到行尾（不含换行）
    fn absorb_line(&mut self) {
        while matches!(self.cursor.peek(), Some(c) if c != '\n') {
            self.cursor.advance();
        }
    }

    fn scan_default(&mut self) -> Option<Token> {
        match self.cursor.advance() {
            None => {
                if self.cursor.has_pending() {
                    return self.emit(TokenKind::Text);
                }
                self.state = State::Done;
                self.emit(TokenKind::EndOfInput)
            }
            Some('\n') => {
                self.state = State::Newline;
                None
            }
            Some('#') => {
                self.state = State::Comment;
                None
            }
            Some('@') => {
                self.state = State::Image;
                None
            }
            Some(' ') => self.emit(TokenKind::Space),
            Some('\t') => self.emit(TokenKind::Tab),
            Some('.') => {
                self.state = State::Dot;
                None
            }
            Some('\\') => match self.cursor.peek() {
                // 没有可转义的字符，反斜杠直接丢弃
                None | Some('\n') => {
                    self.cursor.ignore();
                    None
                }
                Some(_) => {
                    self.cursor.ignore();
                    self.cursor.advance();
                    self.state = State::Text;
                    None
                }
            },
            Some(_) => {
                self.state = State::Text;
                None
            }
        }
    }

    fn scan_text(&mut self) -> Option<Token> {
        self.absorb_line();
        self.state = State::Default;
        self.emit(TokenKind::Text)
    }

    /// 已消费一个 `\n`
    fn scan_newline(&mut self) -> Option<Token> {
        self.state = State::Default;
        if self.cursor.accept("\n") {
            self.cursor.accept_run("\n");
            self.emit(TokenKind::ParagraphDelimiter)
        } else {
            self.emit(TokenKind::Newline)
        }
    }

    /// 已消费 `#`
    fn scan_comment(&mut self) -> Option<Token> {
        self.cursor.accept_run(" \t");
        self.cursor.ignore();
        self.absorb_line();
        self.state = State::CommentEnd;
        self.emit(TokenKind::Comment)
    }

    /// 注释行自己吞掉行尾的换行
    fn scan_comment_end(&mut self) -> Option<Token> {
        self.cursor.accept_run("\n");
        self.cursor.ignore();
        self.state = State::Default;
        None
    }

    /// 已消费 `@`
    fn scan_image(&mut self) -> Option<Token> {
        let marker = self.cursor.start();
        self.cursor.ignore();
        self.absorb_line();
        if self.cursor.pending().trim().is_empty() {
            return self.error(marker, "image reference without a path");
        }
        self.state = State::Default;
        self.emit(TokenKind::Image)
    }

    /// 已消费 `.`
    fn scan_dot(&mut self) -> Option<Token> {
        if self.cursor.accept("\n") {
            self.state = State::Default;
            return self.emit(TokenKind::Newline);
        }
        self.state = State::Text;
        None
    }
}

impl Iterator for Scanner {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}
