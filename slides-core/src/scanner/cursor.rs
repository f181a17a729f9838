//! 字符游标
//!
//! 在 UTF-8 输入上逐个码点前进，支持单步回退和无副作用预读。
//! 行号随 `\n` 的消费/回退对称地增减。

/// Scanner 的可变状态：输入、当前位置、当前 token 起点、行号和上一个码点宽度
#[derive(Debug, Clone)]
pub struct Cursor {
    input: String,
    /// 当前字节位置
    pos: usize,
    /// 当前 token 的起始字节位置
    start: usize,
    /// 当前 token 起点所在的行（1-based）
    start_line: usize,
    /// 已消费的 `\n` 数 + 1
    line: usize,
    /// 上一次 advance 读到的码点字节宽度，0 表示无可回退
    width: usize,
}

impl Cursor {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            pos: 0,
            start: 0,
            start_line: 1,
            line: 1,
            width: 0,
        }
    }

    /// 消费并返回下一个码点，输入结束时返回 `None`
    pub fn advance(&mut self) -> Option<char> {
        let Some(c) = self.input[self.pos..].chars().next() else {
            self.width = 0;
            return None;
        };
        self.width = c.len_utf8();
        self.pos += self.width;
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    /// 预读下一个码点（不消费，位置/宽度/行号都不变）
    pub fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// 回退最近一次 advance 读到的码点，只能回退一步
    pub fn retreat(&mut self) {
        if self.width == 0 {
            return;
        }
        self.pos -= self.width;
        if self.width == 1 && self.input.as_bytes()[self.pos] == b'\n' {
            self.line -= 1;
        }
        self.width = 0;
    }

    /// 如果下一个码点在 `valid` 中则消费它
    pub fn accept(&mut self, valid: &str) -> bool {
        match self.advance() {
            Some(c) if valid.contains(c) => true,
            _ => {
                self.retreat();
                false
            }
        }
    }

    /// 消费连续的、属于 `valid` 的码点，返回消费的个数
    pub fn accept_run(&mut self, valid: &str) -> usize {
        let mut count = 0;
        while self.accept(valid) {
            count += 1;
        }
        count
    }

    /// 丢弃已读部分：把 token 起点移到当前位置
    pub fn ignore(&mut self) {
        self.start = self.pos;
        self.start_line = self.line;
    }

    /// 当前 token 已读的文本
    pub fn pending(&self) -> &str {
        &self.input[self.start..self.pos]
    }

    pub fn has_pending(&self) -> bool {
        self.pos > self.start
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn start_line(&self) -> usize {
        self.start_line
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn input(&self) -> &str {
        &self.input
    }
}
