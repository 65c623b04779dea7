use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::{ResourceDetail, ResourceKind, ResourceSummary, Zone};

/// 资源 ID 允许的最大长度
const MAX_RESOURCE_ID_LEN: usize = 128;

/// 校验资源 ID 格式
///
/// 在发出任何请求之前拒绝畸形 ID：非空、长度受限、仅允许
/// 字母数字与 `.`、`_`、`-`。ID 会被拼入 URL 路径，这里是唯一的关口。
pub fn validate_resource_id(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(ProviderError::InvalidResourceId {
            id: id.to_string(),
            detail: "id must not be empty".to_string(),
        });
    }
    if id.len() > MAX_RESOURCE_ID_LEN {
        return Err(ProviderError::InvalidResourceId {
            id: id.to_string(),
            detail: format!("id exceeds {MAX_RESOURCE_ID_LEN} characters"),
        });
    }
    if !id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
    {
        return Err(ProviderError::InvalidResourceId {
            id: id.to_string(),
            detail: "id contains characters outside [A-Za-z0-9._-]".to_string(),
        });
    }
    Ok(())
}

/// 资源清单提供者 Trait
///
/// 浏览器只通过这个对象安全 trait 取数，生产实现是
/// [`CloudCatalog`](crate::catalog::CloudCatalog)，测试里用内存 mock 替换。
#[async_trait]
pub trait ResourceProvider: Send + Sync {
    /// 获取某类资源的完整列表（内部排空全部分页）
    ///
    /// 全局资源类型（bucket、alert）忽略 `zone`。
    async fn fetch_list(&self, kind: ResourceKind, zone: Zone) -> Result<Vec<ResourceSummary>>;

    /// 获取单个资源的详情
    ///
    /// ID 在发请求前校验，畸形 ID 返回
    /// [`InvalidResourceId`](ProviderError::InvalidResourceId)。
    async fn fetch_detail(&self, kind: ResourceKind, id: &str) -> Result<ResourceDetail>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_ids_accepted() {
        assert!(validate_resource_id("inst-0a1b2c3d").is_ok());
        assert!(validate_resource_id("vol_backup.2024").is_ok());
        assert!(validate_resource_id("a").is_ok());
    }

    #[test]
    fn empty_id_rejected() {
        let res = validate_resource_id("");
        assert!(
            matches!(&res, Err(ProviderError::InvalidResourceId { .. })),
            "unexpected result: {res:?}"
        );
    }

    #[test]
    fn overlong_id_rejected() {
        let id = "a".repeat(MAX_RESOURCE_ID_LEN + 1);
        let res = validate_resource_id(&id);
        assert!(
            matches!(&res, Err(ProviderError::InvalidResourceId { .. })),
            "unexpected result: {res:?}"
        );
    }

    #[test]
    fn max_length_id_accepted() {
        let id = "a".repeat(MAX_RESOURCE_ID_LEN);
        assert!(validate_resource_id(&id).is_ok());
    }

    #[test]
    fn path_traversal_rejected() {
        let res = validate_resource_id("../etc/passwd");
        assert!(
            matches!(&res, Err(ProviderError::InvalidResourceId { .. })),
            "unexpected result: {res:?}"
        );
    }

    #[test]
    fn whitespace_and_unicode_rejected() {
        assert!(validate_resource_id("inst 1").is_err());
        assert!(validate_resource_id("inst/1").is_err());
        assert!(validate_resource_id("实例-1").is_err());
    }
}
