//! 详情页状态

use cloudscope_provider::ResourceDetail;

/// 详情钻取状态
///
/// `Some(DetailState)` 即处于详情模式；记录到达前 `record` 为空。
#[derive(Debug, Clone)]
pub struct DetailState {
    /// 已加载的详情记录
    pub record: Option<ResourceDetail>,
    /// 取数是否仍在进行
    pub loading: bool,
}

impl DetailState {
    /// 进入详情模式的初始状态：记录未到，正在加载
    pub fn loading() -> Self {
        Self {
            record: None,
            loading: true,
        }
    }
}
