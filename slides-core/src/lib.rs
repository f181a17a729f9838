//! Slides Core - Scanner and renderer (pure logic, no IO)
//!
//! Turns the plain-text slide dialect into HTML slide fragments:
//!
//! ```text
//! source ─▶ Scanner（状态机，独立线程）─▶ token 流（同步交接）─▶ Renderer ─▶ HTML
//! ```
//!
//! Configuration is passed explicitly via parameters, not via global state.

pub mod error;
pub mod renderer;
pub mod scanner;

pub use error::{column_at, ParseError, ParseResult};
pub use renderer::{Deck, Renderer};
pub use scanner::{Cursor, Scanner, Token, TokenKind, TokenSource, TokenStream};

// Re-export config types from slides-config
pub use slides_config::{Phase, RenderConfig};

/// 渲染一份输入：扫描器在独立线程上运行，渲染器在当前线程拉取
pub fn render(source_name: &str, input: &str, config: &RenderConfig) -> ParseResult<Deck> {
    let mut stream = TokenStream::spawn(input);
    Renderer::new(config).render(source_name, &mut stream)
}

/// 同步扫描全部 token（含终结 token）
pub fn tokenize(input: &str) -> Vec<Token> {
    Scanner::new(input).collect()
}
