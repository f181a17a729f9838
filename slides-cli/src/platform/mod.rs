//! Platform - 平台适配层
//!
//! 所有 IO 副作用都在这里实现：
//! - CLI 格式化输出
//! - 页面外壳（样式和导航脚本）

pub mod cli;
pub mod page;

pub use cli::{format_source_context, print_error_with_source};
pub use page::wrap_page;
