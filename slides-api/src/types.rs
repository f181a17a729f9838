//! API 类型定义

/// 渲染输出
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOutput {
    /// 幻灯片 HTML 片段
    pub markup: String,
    /// 幻灯片数量
    pub slides: usize,
}
