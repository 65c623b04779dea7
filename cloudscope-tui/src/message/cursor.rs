//! 列表光标子消息

/// 光标移动消息
///
/// 所有移动都在 Update 层被钳制到 `[0, len-1]`。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMessage {
    /// 上一项
    Prev,
    /// 下一项
    Next,
    /// 第一项
    First,
    /// 最后一项
    Last,
}
