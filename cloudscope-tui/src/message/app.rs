//! 主消息与副作用定义

use cloudscope_provider::{
    ProviderError, ResourceDetail, ResourceKind, ResourceSummary, Zone,
};

use super::{CursorMessage, SearchMessage};

/// 应用主消息
///
/// 按键事件和异步取数完成都以这里的变体进入 Update 层。
#[derive(Debug, Clone)]
pub enum Message {
    /// 退出应用
    Quit,

    /// 切换到下一个 zone（循环）
    SwitchZone,

    /// 切换到下一个资源类型（循环）
    NextKind,

    /// 切换到上一个资源类型（循环）
    PrevKind,

    /// 重新拉取当前列表
    Refresh,

    /// 列表光标子消息
    Cursor(CursorMessage),

    /// 搜索子消息
    Search(SearchMessage),

    /// 进入当前选中资源的详情
    EnterDetail,

    /// 退出详情，回到列表
    ExitDetail,

    /// 列表取数完成（后台任务投递）
    ListLoaded(Result<Vec<ResourceSummary>, ProviderError>),

    /// 详情取数完成（后台任务投递）
    DetailLoaded(Result<ResourceDetail, ProviderError>),

    /// 无操作，用于代替 Option::None
    Noop,
}

/// Update 层请求的副作用
///
/// 主循环收到后交给 dispatch 派发为 tokio 任务，任务完成时把结果
/// 包成 [`Message`] 送回消息通道。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// 拉取一类资源的完整列表
    FetchList { kind: ResourceKind, zone: Zone },

    /// 拉取单个资源的详情
    FetchDetail { kind: ResourceKind, id: String },
}
