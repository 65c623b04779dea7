//! 搜索状态

/// 增量搜索状态
///
/// `composing = true` 时查询还在输入中，matches 为空；提交后
/// `composing = false`，matches 固定，`current` 在其中循环。
#[derive(Debug, Clone)]
pub struct SearchState {
    /// 当前查询串
    pub query: String,
    /// 提交后的匹配下标（升序，去重）
    pub matches: Vec<usize>,
    /// 当前所在匹配在 matches 中的位置
    pub current: usize,
    /// 是否处于输入态
    pub composing: bool,
    /// 进入搜索前的光标位置，取消输入时恢复
    pub prior_cursor: usize,
}

impl SearchState {
    /// 从某个光标位置开始一次新搜索
    pub fn composing_from(prior_cursor: usize) -> Self {
        Self {
            query: String::new(),
            matches: Vec::new(),
            current: 0,
            composing: true,
            prior_cursor,
        }
    }
}
