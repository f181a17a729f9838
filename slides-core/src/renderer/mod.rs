//! Slides Renderer
//!
//! 从 [`TokenSource`] 逐个拉取 token，把它们映射为幻灯片 HTML 片段。
//! 每张幻灯片是一个 `<section><div>` 容器，空行（ParagraphDelimiter）切换容器。

pub mod escape;

use crate::error::{ParseError, ParseResult};
use crate::scanner::{Token, TokenKind, TokenSource};
use escape::{escape_comment, escape_html, image_src};
use slides_config::RenderConfig;
use tracing::{debug, trace};

const SLIDE_OPEN: &str = "<section><div>\n";
const SLIDE_CLOSE: &str = "\n</div></section>\n";
const LINE_BREAK: &str = "<br>\n";
const NBSP: &str = "&nbsp;";

/// 渲染结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// 所有幻灯片的 HTML 片段
    pub markup: String,
    /// 幻灯片数量
    pub slides: usize,
}

/// 渲染器：输出缓冲区 + 当前是否有打开的幻灯片
pub struct Renderer<'a> {
    config: &'a RenderConfig,
    out: String,
    slide_open: bool,
    slides: usize,
}

impl<'a> Renderer<'a> {
    pub fn new(config: &'a RenderConfig) -> Self {
        Self {
            config,
            out: String::new(),
            slide_open: false,
            slides: 0,
        }
    }

    /// 消费 token 直到 EndOfInput（成功）或 Error（失败，丢弃已有输出）
    pub fn render<S>(mut self, source_name: &str, source: &mut S) -> ParseResult<Deck>
    where
        S: TokenSource + ?Sized,
    {
        debug!(target: "slides::renderer", source = source_name, "Starting render");
        self.open_slide();

        let mut last: Option<(usize, usize)> = None;
        loop {
            let Some(token) = source.next_token() else {
                let (line, offset) = last.unwrap_or((1, 0));
                return Err(ParseError::new(
                    source_name,
                    line,
                    offset,
                    "token stream ended before end of input",
                ));
            };
            trace!(target: "slides::renderer", %token, line = token.line, "Rendering token");
            last = Some((token.line, token.offset));

            match token.kind {
                TokenKind::EndOfInput => {
                    self.close_slide();
                    debug!(target: "slides::renderer", slides = self.slides, bytes = self.out.len(), "Render completed");
                    return Ok(Deck {
                        markup: self.out,
                        slides: self.slides,
                    });
                }
                TokenKind::Error => {
                    let discarded = source.drain();
                    debug!(target: "slides::renderer", discarded, line = token.line, "Render aborted by scan error");
                    return Err(ParseError::new(
                        source_name,
                        token.line,
                        token.offset,
                        token.value,
                    ));
                }
                TokenKind::ParagraphDelimiter => self.close_slide(),
                TokenKind::Comment => self.push_comment(&token),
                _ => {
                    self.ensure_slide();
                    self.push_content(&token);
                }
            }
        }
    }

    /// 可见内容：文本、空白、换行、图片
    fn push_content(&mut self, token: &Token) {
        match token.kind {
            TokenKind::Newline => self.out.push_str(LINE_BREAK),
            TokenKind::Text => self.out.push_str(&escape_html(&token.value)),
            TokenKind::Space => self.out.push_str(NBSP),
            TokenKind::Tab => {
                for _ in 0..self.config.tab_width {
                    self.out.push_str(NBSP);
                }
            }
            TokenKind::Image => {
                let src = image_src(&self.config.image_prefix, &token.value);
                self.out.push_str(&format!("<img src=\"{src}\">"));
            }
            _ => {}
        }
    }

    /// 注释不打开新幻灯片，两张幻灯片之间的注释直接落在容器外
    fn push_comment(&mut self, token: &Token) {
        self.out.push_str("<!-- ");
        self.out.push_str(&escape_comment(&token.value));
        self.out.push_str(" -->");
        if !self.slide_open {
            self.out.push('\n');
        }
    }

    fn open_slide(&mut self) {
        self.out.push_str(SLIDE_OPEN);
        self.slide_open = true;
        self.slides += 1;
    }

    /// 空行之后的幻灯片延迟到下一个可见 token 再打开，结尾空行不会产生空幻灯片
    fn ensure_slide(&mut self) {
        if !self.slide_open {
            self.open_slide();
        }
    }

    fn close_slide(&mut self) {
        if self.slide_open {
            self.out.push_str(SLIDE_CLOSE);
            self.slide_open = false;
        }
    }
}
