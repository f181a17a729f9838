//! API 层配置
//!
//! RunConfig 是单次渲染的显式配置；配置文件的读取也放在这里。

use crate::error::SlidesError;
use slides_config::{RenderConfig, SlidesConfig};
use std::path::Path;
use tracing::debug;

/// Render configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunConfig {
    /// Renderer options
    pub render: RenderConfig,
}

impl RunConfig {
    pub fn from_config(config: &SlidesConfig) -> Self {
        Self {
            render: config.render.clone(),
        }
    }
}

/// 解析 JSON 配置文本
pub fn parse_config(text: &str) -> Result<SlidesConfig, SlidesError> {
    serde_json::from_str(text).map_err(|e| SlidesError::Config(e.to_string()))
}

/// 读取 JSON 配置文件
pub fn load_config(path: &Path) -> Result<SlidesConfig, SlidesError> {
    debug!(target: "slides::api", path = %path.display(), "Loading config file");
    let text = std::fs::read_to_string(path)?;
    parse_config(&text).map_err(|e| match e {
        SlidesError::Config(msg) => SlidesError::Config(format!("{}: {}", path.display(), msg)),
        other => other,
    })
}
