//! Token 流
//!
//! Scanner 在独立线程上运行，通过容量为 0 的同步通道逐个交付 token：
//! 生产者发送后阻塞，直到消费者取走；任何时刻最多只有一个 token 在途。
//! 消费者提前退出时必须 `drain`（或直接 drop），生产者才能走到终态并被回收。

use super::machine::Scanner;
use super::token::Token;
use std::sync::mpsc::{self, Receiver};
use std::thread::{self, JoinHandle};
use tracing::{debug, trace, warn};

/// Renderer 消费 token 的接口
pub trait TokenSource {
    /// 拉取下一个 token；终结 token（EndOfInput / Error）之后返回 `None`
    fn next_token(&mut self) -> Option<Token>;

    /// 丢弃剩余的所有 token，返回丢弃的个数
    fn drain(&mut self) -> usize {
        let mut discarded = 0;
        while self.next_token().is_some() {
            discarded += 1;
        }
        discarded
    }
}

impl TokenSource for Scanner {
    fn next_token(&mut self) -> Option<Token> {
        Scanner::next_token(self)
    }
}

/// 生产者线程 + 同步交接的 token 流
pub struct TokenStream {
    receiver: Option<Receiver<Token>>,
    worker: Option<JoinHandle<()>>,
}

impl TokenStream {
    /// 启动扫描线程
    pub fn spawn(input: impl Into<String>) -> Self {
        let mut scanner = Scanner::new(input);
        let (sender, receiver) = mpsc::sync_channel::<Token>(0);

        let worker = thread::spawn(move || {
            while let Some(token) = scanner.next_token() {
                if sender.send(token).is_err() {
                    debug!(target: "slides::scanner", "Token consumer went away, stopping scanner");
                    return;
                }
            }
            trace!(target: "slides::scanner", "Scanner reached terminal state");
        });

        Self {
            receiver: Some(receiver),
            worker: Some(worker),
        }
    }

    /// 生产者是否已经结束（流已关闭）
    pub fn is_closed(&self) -> bool {
        self.receiver.is_none()
    }

    /// 关闭接收端并回收生产者线程
    fn finish(&mut self) {
        // 先断开通道，阻塞在 send 上的生产者会立即返回
        self.receiver = None;
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                warn!(target: "slides::scanner", "Scanner thread panicked");
            }
        }
    }
}

impl TokenSource for TokenStream {
    fn next_token(&mut self) -> Option<Token> {
        let receiver = self.receiver.as_ref()?;
        match receiver.recv() {
            Ok(token) => {
                if token.is_terminal() {
                    self.finish();
                }
                Some(token)
            }
            Err(_) => {
                self.finish();
                None
            }
        }
    }

    fn drain(&mut self) -> usize {
        let discarded = match self.receiver.as_ref() {
            Some(receiver) => receiver.iter().count(),
            None => 0,
        };
        self.finish();
        debug!(target: "slides::scanner", discarded, "Drained token stream");
        discarded
    }
}

impl Iterator for TokenStream {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

impl Drop for TokenStream {
    fn drop(&mut self) {
        self.finish();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::TokenKind;

    #[test]
    fn test_stream_matches_scanner() {
        let input = "Title\n\n# note\n  @pic.png\n.\nbody";
        let direct: Vec<Token> = Scanner::new(input).collect();
        let threaded: Vec<Token> = TokenStream::spawn(input).collect();
        assert_eq!(direct, threaded);
    }

    #[test]
    fn test_stream_closes_after_end_of_input() {
        let mut stream = TokenStream::spawn("x");
        assert_eq!(stream.next_token().map(|t| t.kind), Some(TokenKind::Text));
        assert!(!stream.is_closed());
        assert_eq!(
            stream.next_token().map(|t| t.kind),
            Some(TokenKind::EndOfInput)
        );
        assert!(stream.is_closed());
        assert_eq!(stream.next_token(), None);
    }

    #[test]
    fn test_stream_closes_after_error() {
        let mut stream = TokenStream::spawn("@\nrest");
        assert_eq!(stream.next_token().map(|t| t.kind), Some(TokenKind::Error));
        assert!(stream.is_closed());
        assert_eq!(stream.next_token(), None);
    }

    #[test]
    fn test_drain_after_partial_read() {
        let mut stream = TokenStream::spawn("a\nb\nc");
        assert!(stream.next_token().is_some());
        // Newline, Text, Newline, Text, EndOfInput
        assert_eq!(stream.drain(), 5);
        assert!(stream.is_closed());
        assert_eq!(stream.drain(), 0);
    }

    #[test]
    fn test_drop_without_reading_releases_producer() {
        let input = "line\n".repeat(1000);
        let stream = TokenStream::spawn(input);
        drop(stream);
    }

    #[test]
    fn test_default_drain_on_scanner() {
        let mut scanner = Scanner::new("a\n\nb");
        assert_eq!(TokenSource::drain(&mut scanner), 4);
        assert!(scanner.is_done());
    }
}
