//! HTML 转义工具

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// 图片路径中需要百分号编码的字符；`/` 和 `%` 保留，已编码的路径不会被重复编码
const PATH_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Escape special HTML characters for text and attribute values.
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}

/// 注释内容：转义后再拆开 `--`，保证不会提前闭合 `<!-- -->`
pub fn escape_comment(s: &str) -> String {
    let mut escaped = escape_html(s);
    while escaped.contains("--") {
        escaped = escaped.replace("--", "- -");
    }
    escaped
}

/// 图片 `src` 属性值：前缀 + 百分号编码后的路径，整体再做属性转义
pub fn image_src(prefix: &str, path: &str) -> String {
    let encoded = utf8_percent_encode(path.trim(), PATH_ENCODE_SET).to_string();
    escape_html(&format!("{prefix}{encoded}"))
}
