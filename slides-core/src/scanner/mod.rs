//! Slides Scanner
//!
//! 把幻灯片标记文本切分成有序的 token 流：
//! - `cursor`：码点级游标，预读/回退，对称维护行号
//! - `machine`：有限状态机，每次拉取产出恰好一个 token
//! - `stream`：生产者线程 + 同步交接，支持提前退出时 drain

pub mod cursor;
pub mod machine;
pub mod stream;
pub mod token;

pub use cursor::Cursor;
pub use machine::Scanner;
pub use stream::{TokenSource, TokenStream};
pub use token::{Token, TokenKind};
