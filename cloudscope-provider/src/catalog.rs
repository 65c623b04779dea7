//! 资源目录：按类型路由到具体取数模块

use async_trait::async_trait;

use crate::client::ApiClient;
use crate::error::Result;
use crate::resources::{alerts, buckets, instances, load_balancers, networks, volumes};
use crate::traits::{ResourceProvider, validate_resource_id};
use crate::types::{Credentials, ResourceDetail, ResourceKind, ResourceSummary, Zone};

/// Nimbus API 的生产实现
///
/// 持有唯一的 [`ApiClient`]，把 [`ResourceProvider`] 的两个操作按
/// 资源类型分发到对应模块。
pub struct CloudCatalog {
    client: ApiClient,
}

impl CloudCatalog {
    /// 创建目录。`base_url` 为 `None` 时使用默认 API 地址。
    pub fn new(credentials: Credentials, base_url: Option<String>) -> Self {
        Self {
            client: ApiClient::new(credentials, base_url),
        }
    }

    /// 启动时验证凭证，坏 token 在进入界面前就失败。
    pub async fn validate_credentials(&self) -> Result<()> {
        self.client.validate_credentials().await
    }
}

#[async_trait]
impl ResourceProvider for CloudCatalog {
    async fn fetch_list(&self, kind: ResourceKind, zone: Zone) -> Result<Vec<ResourceSummary>> {
        let result = match kind {
            ResourceKind::Instance => instances::list(&self.client, zone).await,
            ResourceKind::Volume => volumes::list(&self.client, zone).await,
            ResourceKind::Network => networks::list(&self.client, zone).await,
            ResourceKind::LoadBalancer => load_balancers::list(&self.client, zone).await,
            // 全局资源忽略 zone
            ResourceKind::Bucket => buckets::list(&self.client).await,
            ResourceKind::Alert => alerts::list(&self.client).await,
        };

        match &result {
            Ok(items) => {
                log::info!("[nimbus] listed {} {kind} in {zone}", items.len());
            }
            Err(e) if e.is_expected() => {
                log::warn!("[nimbus] list {kind} failed: {e}");
            }
            Err(e) => {
                log::error!("[nimbus] list {kind} failed: {e}");
            }
        }
        result
    }

    async fn fetch_detail(&self, kind: ResourceKind, id: &str) -> Result<ResourceDetail> {
        validate_resource_id(id)?;

        let result = match kind {
            ResourceKind::Instance => instances::detail(&self.client, id).await,
            ResourceKind::Volume => volumes::detail(&self.client, id).await,
            ResourceKind::Network => networks::detail(&self.client, id).await,
            ResourceKind::LoadBalancer => load_balancers::detail(&self.client, id).await,
            ResourceKind::Bucket => buckets::detail(&self.client, id).await,
            ResourceKind::Alert => alerts::detail(&self.client, id).await,
        };

        if let Err(e) = &result {
            if e.is_expected() {
                log::warn!("[nimbus] detail {kind} '{id}' failed: {e}");
            } else {
                log::error!("[nimbus] detail {kind} '{id}' failed: {e}");
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderError;

    fn catalog() -> CloudCatalog {
        CloudCatalog::new(
            Credentials {
                api_token: "nbt_test".into(),
                project_id: "proj-1".into(),
            },
            Some("http://127.0.0.1:1".into()),
        )
    }

    #[tokio::test]
    async fn detail_rejects_malformed_id_without_network() {
        // base_url 指向不可达地址：ID 校验必须在发请求前拦截
        let c = catalog();
        let res = c.fetch_detail(ResourceKind::Instance, "../secrets").await;
        assert!(
            matches!(&res, Err(ProviderError::InvalidResourceId { .. })),
            "unexpected result: {res:?}"
        );
    }

    #[tokio::test]
    async fn detail_rejects_empty_id_without_network() {
        let c = catalog();
        let res = c.fetch_detail(ResourceKind::Bucket, "").await;
        assert!(
            matches!(&res, Err(ProviderError::InvalidResourceId { .. })),
            "unexpected result: {res:?}"
        );
    }
}
