//! Slides CLI - Command line interface
//!
//! Reads a plain-text deck from a file or stdin and writes the rendered
//! page (or fragment, or token dump) to stdout or a file.

use clap::Parser;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process;
use tracing::{debug, info};

mod config;
mod logging;
mod platform;

use crate::config::LogConfig;
use crate::logging::LogFormat;
use crate::platform::{print_error_with_source, wrap_page};
use slides_api::{
    decode, load_config, render, scan_error, tokenize, LogLevel, RunConfig, SlidesConfig,
    SlidesError,
};

/// 未指定 `--config` 时在当前目录查找的配置文件
const DEFAULT_CONFIG: &str = "slides.json";

/// 标准输入在诊断信息中的名字
const STDIN_NAME: &str = "<stdin>";

#[derive(Parser, Debug)]
#[command(
    name = "slides",
    about = "Render a plain-text slide deck to HTML",
    version
)]
struct Cli {
    /// Input file; omitted or "-" reads stdin
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Configuration file (default: ./slides.json if present)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write output to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Emit only the slide markup, without the page shell
    #[arg(long)]
    fragment: bool,

    /// Dump the token stream as JSON instead of rendering
    #[arg(long, conflicts_with = "fragment")]
    tokens: bool,

    /// Log level: silent, error, warn, info, debug, trace
    #[arg(long, value_name = "LEVEL", value_parser = parse_log_level)]
    log_level: Option<LogLevel>,

    /// Log output format
    #[arg(long, value_enum, default_value = "compact")]
    log_format: LogFormat,
}

fn parse_log_level(s: &str) -> Result<LogLevel, String> {
    LogLevel::parse(s).ok_or_else(|| format!("unknown log level '{s}'"))
}

fn main() {
    let cli = Cli::parse();

    let file_config = match read_config(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    let log_config = LogConfig::from_logging(&file_config.logging, cli.log_level);
    logging::init(&log_config, cli.log_format);

    let (source_name, bytes) = match read_input(cli.input.as_deref()) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };
    info!(target: "slides::cli", source = %source_name, bytes = bytes.len(), "Read input");

    let source = match decode(&source_name, &bytes) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    if cli.tokens {
        let (json, scan_failure) = match dump_tokens(&source_name, source) {
            Ok(dump) => dump,
            Err(e) => {
                eprintln!("error: {}", e);
                process::exit(1);
            }
        };
        if let Err(e) = write_output(cli.output.as_deref(), &json) {
            eprintln!("error: {}", e);
            process::exit(1);
        }
        // 出错前的 token 照常输出，退出码与渲染失败一致
        if let Some(e) = scan_failure {
            print_error_with_source(&e, source);
            process::exit(1);
        }
        return;
    }

    let output = {
        let run_config = RunConfig::from_config(&file_config);
        match render(&source_name, source, &run_config) {
            Ok(out) if cli.fragment => out.markup,
            Ok(out) => wrap_page(&out.markup),
            Err(e) => {
                print_error_with_source(&e, source);
                process::exit(1);
            }
        }
    };

    if let Err(e) = write_output(cli.output.as_deref(), &output) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

/// token 流的 JSON 转储；流以 Error 结束时一并返回该错误
fn dump_tokens(
    source_name: &str,
    source: &str,
) -> Result<(String, Option<SlidesError>), serde_json::Error> {
    let tokens = tokenize(source);
    let json = serde_json::to_string_pretty(&tokens)? + "\n";
    Ok((json, scan_error(source_name, &tokens)))
}

/// 读取配置：显式路径必须存在，默认路径不存在时使用默认配置
fn read_config(path: Option<&Path>) -> Result<SlidesConfig, SlidesError> {
    match path {
        Some(p) => load_config(p),
        None => {
            let default = Path::new(DEFAULT_CONFIG);
            if default.exists() {
                load_config(default)
            } else {
                Ok(SlidesConfig::default())
            }
        }
    }
}

/// 读取输入字节，返回（诊断名, 内容）
fn read_input(path: Option<&Path>) -> Result<(String, Vec<u8>), SlidesError> {
    match path {
        Some(p) if p != Path::new("-") => {
            let bytes = std::fs::read(p).map_err(|e| {
                SlidesError::Io(io::Error::new(e.kind(), format!("{}: {}", p.display(), e)))
            })?;
            Ok((p.display().to_string(), bytes))
        }
        _ => {
            let mut bytes = Vec::new();
            io::stdin().read_to_end(&mut bytes)?;
            Ok((STDIN_NAME.to_string(), bytes))
        }
    }
}

fn write_output(path: Option<&Path>, output: &str) -> Result<(), SlidesError> {
    match path {
        Some(p) => {
            debug!(target: "slides::cli", path = %p.display(), "Writing output file");
            std::fs::write(p, output).map_err(|e| {
                SlidesError::Io(io::Error::new(e.kind(), format!("{}: {}", p.display(), e)))
            })
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["slides"]).unwrap();
        assert!(cli.input.is_none());
        assert!(!cli.fragment);
        assert!(!cli.tokens);
        assert_eq!(cli.log_level, None);
        assert_eq!(cli.log_format, LogFormat::Compact);
    }

    #[test]
    fn test_cli_all_options() {
        let cli = Cli::try_parse_from([
            "slides",
            "talk.txt",
            "--config",
            "my.json",
            "-o",
            "talk.html",
            "--fragment",
            "--log-level",
            "silent",
            "--log-format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.input, Some(PathBuf::from("talk.txt")));
        assert_eq!(cli.config, Some(PathBuf::from("my.json")));
        assert_eq!(cli.output, Some(PathBuf::from("talk.html")));
        assert!(cli.fragment);
        assert_eq!(cli.log_level, Some(LogLevel::Error));
        assert_eq!(cli.log_format, LogFormat::Json);
    }

    #[test]
    fn test_cli_rejects_bad_level() {
        assert!(Cli::try_parse_from(["slides", "--log-level", "loud"]).is_err());
    }

    #[test]
    fn test_tokens_conflicts_with_fragment() {
        assert!(Cli::try_parse_from(["slides", "--tokens", "--fragment"]).is_err());
    }

    #[test]
    fn test_dump_tokens_reports_scan_error() {
        let (json, failure) = dump_tokens("deck.txt", "title\n@\n").unwrap();
        assert!(json.contains("\"kind\": \"Error\""));
        let failure = failure.unwrap();
        assert_eq!(failure.line(), Some(2));
        assert_eq!(failure.offset(), Some(6));
    }

    #[test]
    fn test_dump_tokens_clean_input() {
        let (json, failure) = dump_tokens("deck.txt", "a\n\nb").unwrap();
        assert!(failure.is_none());
        assert!(json.contains("\"kind\": \"EndOfInput\""));
    }

    #[test]
    fn test_missing_explicit_config_is_error() {
        let err = read_config(Some(Path::new("/nonexistent/slides.json"))).unwrap_err();
        assert_eq!(err.phase(), "io");
    }

    #[test]
    fn test_missing_input_names_path() {
        let err = read_input(Some(Path::new("/nonexistent/deck.txt"))).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/deck.txt"));
    }
}
