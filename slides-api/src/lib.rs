//! Slides API - Render orchestration layer
//!
//! Provides the unified render interface, including:
//! - Render flow orchestration
//! - Configuration abstraction (RunConfig)
//! - Unified error handling (SlidesError)
//!
//! Configuration is always passed explicitly; there is no global state.

use tracing::{debug, info};

pub mod config;
pub use config::{load_config, parse_config, RunConfig};

// Re-export config types from slides_config
pub use slides_config::{LogLevel, LoggingConfig, Phase, RenderConfig, SlidesConfig};

pub mod error;
pub mod types;
pub use error::{ErrorReport, ParseError, SlidesError};
pub use types::RenderOutput;

// Re-export core types
pub use slides_core::{Token, TokenKind};

/// Render with explicit configuration
pub fn render(
    source_name: &str,
    content: &str,
    config: &RunConfig,
) -> Result<RenderOutput, SlidesError> {
    info!(target: "slides::api", source = source_name, bytes = content.len(), "Starting render");

    let deck = slides_core::render(source_name, content, &config.render)?;

    info!(target: "slides::api", slides = deck.slides, "Render completed");
    Ok(RenderOutput {
        markup: deck.markup,
        slides: deck.slides,
    })
}

/// Render raw bytes; the input must be valid UTF-8
pub fn render_bytes(
    source_name: &str,
    content: &[u8],
    config: &RunConfig,
) -> Result<RenderOutput, SlidesError> {
    let text = decode(source_name, content)?;
    render(source_name, text, config)
}

/// Scan only, returning every token up to and including the terminal one
pub fn tokenize(content: &str) -> Vec<Token> {
    let tokens = slides_core::tokenize(content);
    debug!(target: "slides::api", count = tokens.len(), "Tokenized input");
    tokens
}

/// token 流以 Error 结束时，把它转换为带位置的错误
pub fn scan_error(source_name: &str, tokens: &[Token]) -> Option<SlidesError> {
    tokens
        .last()
        .filter(|t| t.kind == TokenKind::Error)
        .map(|t| SlidesError::Parse(ParseError::new(source_name, t.line, t.offset, t.value.clone())))
}

/// 把字节解码为 UTF-8，出错时定位到首个非法字节所在行
pub fn decode<'a>(source_name: &str, content: &'a [u8]) -> Result<&'a str, SlidesError> {
    std::str::from_utf8(content).map_err(|e| {
        let offset = e.valid_up_to();
        let line = content[..offset].iter().filter(|&&b| b == b'\n').count() + 1;
        SlidesError::InvalidUtf8 {
            source_name: source_name.to_string(),
            line,
            offset,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_default() {
        let out = render("t", "a\n\nb", &RunConfig::default()).unwrap();
        assert_eq!(out.slides, 2);
        assert_eq!(out.markup.matches("<section>").count(), 2);
    }

    #[test]
    fn test_scan_error_from_tokens() {
        let source = "ok\n  @\n";
        let err = scan_error("deck.txt", &tokenize(source)).unwrap();
        assert_eq!(err.to_string(), "deck.txt:2: image reference without a path");
        assert_eq!(err.to_report().locate(source).column, Some(3));
        assert!(scan_error("deck.txt", &tokenize("fine\n\nfine")).is_none());
    }

    #[test]
    fn test_decode_invalid_utf8_line() {
        let bytes = b"ok\nstill ok\nbad \xff here";
        let err = decode("deck.txt", bytes).unwrap_err();
        assert_eq!(err.line(), Some(3));
        assert_eq!(err.offset(), Some(16));
        assert_eq!(err.phase(), "decode");
    }

    #[test]
    fn test_render_bytes() {
        let out = render_bytes("t", "héllo".as_bytes(), &RunConfig::default()).unwrap();
        assert!(out.markup.contains("héllo"));
    }
}
