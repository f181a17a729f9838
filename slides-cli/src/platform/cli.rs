//! CLI 格式化输出
//!
//! 提供命令行友好的错误显示和源码上下文打印。

use slides_api::SlidesError;

/// 错误行前后显示的上下文行数
const CONTEXT_LINES: usize = 2;

/// 打印错误并显示源文本上下文
pub fn print_error_with_source(e: &SlidesError, source: &str) {
    eprintln!("error: {}", e);

    let report = e.to_report().locate(source);
    if let (Some(line), Some(column)) = (report.line, report.column) {
        eprint!("{}", format_source_context(source, line, column));
    }
}

/// 源文本上下文，错误行下方用 `^` 指向出错列
pub fn format_source_context(source: &str, error_line: usize, error_col: usize) -> String {
    let lines: Vec<&str> = source.split('\n').collect();
    let total_lines = lines.len();

    if error_line == 0 || error_line > total_lines {
        return String::new();
    }

    let start_line = error_line.saturating_sub(CONTEXT_LINES).max(1);
    let end_line = (error_line + CONTEXT_LINES).min(total_lines);
    let width = end_line.to_string().len();

    let mut out = String::new();
    for line_idx in start_line..=end_line {
        out.push_str(&format!("{:>width$} | {}\n", line_idx, lines[line_idx - 1]));
        if line_idx == error_line {
            let marker = " ".repeat(error_col.saturating_sub(1));
            out.push_str(&format!("{:>width$} | {}^\n", "", marker));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caret_under_column() {
        let source = "intro\n\n  @\nafter";
        let context = format_source_context(source, 3, 4);
        assert_eq!(
            context,
            "1 | intro\n2 | \n3 |   @\n  |    ^\n4 | after\n"
        );
    }

    #[test]
    fn test_line_out_of_range() {
        assert_eq!(format_source_context("one", 5, 1), "");
        assert_eq!(format_source_context("one", 0, 1), "");
    }

    #[test]
    fn test_line_number_alignment() {
        let source: String = (1..=12).map(|i| format!("line {i}\n")).collect();
        let context = format_source_context(&source, 10, 1);
        assert!(context.starts_with(" 8 | line 8\n"));
        assert!(context.contains("10 | line 10\n   | ^\n"));
        assert!(context.ends_with("12 | line 12\n"));
    }
}
