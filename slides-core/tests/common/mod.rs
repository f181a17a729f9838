//! 集成测试公共工具

#![allow(dead_code)]

use slides_core::{render, tokenize, Deck, ParseResult, RenderConfig, Token, TokenKind};

/// 用默认配置渲染
pub fn render_default(input: &str) -> ParseResult<Deck> {
    render("test.txt", input, &RenderConfig::default())
}

/// 只取 token 类型
pub fn kinds(input: &str) -> Vec<TokenKind> {
    tokenize(input).into_iter().map(|t| t.kind).collect()
}

/// 按幻灯片切分渲染结果，返回每个容器内部的内容
pub fn slide_bodies(markup: &str) -> Vec<String> {
    markup
        .split("<section><div>\n")
        .skip(1)
        .map(|part| {
            part.split("\n</div></section>")
                .next()
                .unwrap_or_default()
                .to_string()
        })
        .collect()
}

/// token 之间没有被任何 token 覆盖的片段（即被丢弃的标记字符）
///
/// 要求 token 按偏移有序且值与原文一致，否则 panic。
pub fn discarded<'a>(input: &'a str, tokens: &[Token]) -> Vec<&'a str> {
    let mut gaps = Vec::new();
    let mut cursor = 0;
    for token in tokens {
        if token.kind.is_terminal() {
            break;
        }
        assert!(token.offset >= cursor, "token {token} overlaps its predecessor");
        assert_eq!(&input[token.offset..token.offset + token.value.len()], token.value);
        if token.offset > cursor {
            gaps.push(&input[cursor..token.offset]);
        }
        cursor = token.offset + token.value.len();
    }
    if cursor < input.len() {
        gaps.push(&input[cursor..]);
    }
    gaps
}
