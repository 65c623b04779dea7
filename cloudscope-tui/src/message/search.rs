//! 搜索子消息

/// 增量搜索消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMessage {
    /// 进入搜索输入态
    Enter,
    /// 输入一个字符
    Input(char),
    /// 删除最后一个字符
    Backspace,
    /// 提交搜索，跳到第一个匹配
    Commit,
    /// 取消：输入态恢复原光标；已提交态只清除搜索
    Cancel,
    /// 跳到下一个匹配（循环）
    NextMatch,
    /// 跳到上一个匹配（循环）
    PrevMatch,
}
