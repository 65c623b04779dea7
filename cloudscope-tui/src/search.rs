//! 搜索引擎
//!
//! 纯函数：对当前列表做大小写不敏感的子串匹配，名称和 ID 都算。
//! 不持有状态，匹配结果的游标循环在 Update 层。

use cloudscope_provider::ResourceSummary;

/// 在 `items` 中查找 `query` 的所有匹配，返回升序下标
///
/// - 大小写不敏感（Unicode lowercase）
/// - 名称或 ID 任一包含查询串即匹配，每个下标最多出现一次
/// - 空查询返回空结果
pub fn perform_search(items: &[ResourceSummary], query: &str) -> Vec<usize> {
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| {
            item.name.to_lowercase().contains(&needle)
                || item.id.to_lowercase().contains(&needle)
        })
        .map(|(i, _)| i)
        .collect()
}
