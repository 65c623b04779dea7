//! 会话主状态结构

use cloudscope_provider::{ProviderError, ResourceKind, ResourceSummary, Zone};

use super::{DetailState, SearchState};

/// 派生的界面模式，供 View 层和按键分发使用
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// 浏览列表
    Listing,
    /// 搜索查询输入中
    SearchComposing,
    /// 详情记录加载中
    DetailLoading,
    /// 详情已显示
    DetailShown,
}

/// 会话主状态
pub struct Session {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前 zone
    pub zone: Zone,

    /// 当前资源类型
    pub kind: ResourceKind,

    /// 当前列表（最近一次成功取数的快照，失败时保留）
    pub items: Vec<ResourceSummary>,

    /// 列表取数是否在进行
    pub loading: bool,

    /// 最近一次失败，显示在状态栏；成功取数后清除
    pub error: Option<ProviderError>,

    /// 列表光标（items 非空时始终在 `[0, len-1]` 内）
    pub cursor: usize,

    /// 详情钻取状态，`None` 即在列表模式
    pub detail: Option<DetailState>,

    /// 搜索状态
    pub search: Option<SearchState>,

    /// 状态栏消息
    pub status_message: Option<String>,
}

impl Session {
    /// 创建新的会话实例
    pub fn new() -> Self {
        Self {
            should_quit: false,
            zone: Zone::ALL[0],
            kind: ResourceKind::ALL[0],
            items: Vec::new(),
            loading: false,
            error: None,
            cursor: 0,
            detail: None,
            search: None,
            status_message: None,
        }
    }

    /// 派生当前模式
    pub fn mode(&self) -> Mode {
        if let Some(detail) = &self.detail {
            if detail.loading {
                Mode::DetailLoading
            } else {
                Mode::DetailShown
            }
        } else if self.search.as_ref().is_some_and(|s| s.composing) {
            Mode::SearchComposing
        } else {
            Mode::Listing
        }
    }

    /// 是否有取数在进行或详情打开
    ///
    /// 为真时抑制新的取数类操作（换 zone、换类型、刷新、进详情），
    /// 保证同一时刻最多一个未完成请求。
    pub fn is_busy(&self) -> bool {
        self.loading || self.detail.is_some()
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state() {
        let s = Session::new();
        assert!(!s.should_quit);
        assert_eq!(s.zone, Zone::EuNorth1);
        assert_eq!(s.kind, ResourceKind::Instance);
        assert!(s.items.is_empty());
        assert_eq!(s.cursor, 0);
        assert_eq!(s.mode(), Mode::Listing);
        assert!(!s.is_busy());
    }

    #[test]
    fn mode_derivation() {
        let mut s = Session::new();
        assert_eq!(s.mode(), Mode::Listing);

        s.search = Some(SearchState::composing_from(0));
        assert_eq!(s.mode(), Mode::SearchComposing);

        // 已提交的搜索回到 Listing
        if let Some(search) = s.search.as_mut() {
            search.composing = false;
        }
        assert_eq!(s.mode(), Mode::Listing);

        s.detail = Some(DetailState::loading());
        assert_eq!(s.mode(), Mode::DetailLoading);

        if let Some(detail) = s.detail.as_mut() {
            detail.loading = false;
        }
        assert_eq!(s.mode(), Mode::DetailShown);
    }

    #[test]
    fn busy_while_loading_or_detail() {
        let mut s = Session::new();
        s.loading = true;
        assert!(s.is_busy());

        s.loading = false;
        s.detail = Some(DetailState::loading());
        assert!(s.is_busy());
    }
}
