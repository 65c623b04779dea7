//! Nimbus API 客户端
//!
//! 封装认证、错误映射与游标分页。各资源模块只负责构造路径和解析
//! 负载，HTTP 细节（重试、日志、状态码分流）集中在这里和
//! [`HttpUtils`](crate::http_client::HttpUtils)。

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{ProviderError, Result};
use crate::http_client::HttpUtils;
use crate::types::Credentials;
use crate::utils::log_sanitizer::mask_token;

/// 默认 API 地址
pub const DEFAULT_BASE_URL: &str = "https://api.nimbuscloud.io";

/// 服务端允许的最大页大小
pub const MAX_PAGE_SIZE: u32 = 100;

/// 瞬时错误的默认重试次数
const DEFAULT_MAX_RETRIES: u32 = 3;

/// 分页列表响应的统一信封
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Page<T> {
    #[serde(default = "Vec::new")]
    items: Vec<T>,
    /// 空字符串与缺失等价：均表示已到最后一页
    next_page_token: Option<String>,
}

/// 翻页判定：返回下一页令牌，空字符串与缺失都表示已到最后一页
fn page_continuation(token: Option<String>) -> Option<String> {
    token.filter(|t| !t.is_empty())
}

/// 非 2xx 响应的错误信封
#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    code: Option<String>,
    message: Option<String>,
}

/// 错误映射上下文：404 需要知道是哪个资源
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    pub resource_id: Option<String>,
}

impl ErrorContext {
    pub fn for_resource(id: &str) -> Self {
        Self {
            resource_id: Some(id.to_string()),
        }
    }
}

/// Authenticated HTTP client for the Nimbus inventory API.
///
/// Cheap to clone is not a goal; the catalog owns one instance and the
/// resource modules borrow it per call.
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    api_token: String,
    project_id: String,
}

impl ApiClient {
    /// 创建客户端。`base_url` 为 `None` 时使用 [`DEFAULT_BASE_URL`]。
    pub fn new(credentials: Credentials, base_url: Option<String>) -> Self {
        log::info!(
            "[nimbus] client initialized, project={}, token={}",
            credentials.project_id,
            mask_token(&credentials.api_token)
        );
        Self {
            client: reqwest::Client::new(),
            base_url: base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            api_token: credentials.api_token,
            project_id: credentials.project_id,
        }
    }

    /// 执行 GET 请求并解析 JSON
    ///
    /// 状态码分流：429/5xx 在 [`HttpUtils`] 层转为可重试错误并自动重试；
    /// 401/403/404 在这里映射为业务错误。
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        ctx: &ErrorContext,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);

        let request = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.api_token))
            .header("X-Project-Id", &self.project_id)
            .query(query);

        let (status, body) =
            HttpUtils::execute_request_with_retry(request, path, DEFAULT_MAX_RETRIES).await?;

        if !(200..300).contains(&status) {
            return Err(self.map_error_status(status, &body, ctx));
        }

        HttpUtils::parse_json(&body, path)
    }

    /// 拉取一个列表端点的全部分页
    ///
    /// 以服务端最大页大小循环请求，携带上一页返回的 `nextPageToken`，
    /// 直到令牌缺失或为空。任何一页失败（含该页自身的重试耗尽）都会
    /// 使整个拉取失败，不返回部分结果。
    pub(crate) async fn get_all_pages<T: DeserializeOwned>(
        &self,
        path: &str,
        base_query: &[(&str, String)],
    ) -> Result<Vec<T>> {
        let mut all_items = Vec::new();
        let mut page_token: Option<String> = None;
        let mut page_count = 0_u32;

        loop {
            let mut query: Vec<(&str, String)> = base_query.to_vec();
            query.push(("pageSize", MAX_PAGE_SIZE.to_string()));
            if let Some(token) = &page_token {
                query.push(("pageToken", token.clone()));
            }

            // 404 等错误以端点路径标识出错对象
            let page: Page<T> = self
                .get(path, &query, &ErrorContext::for_resource(path))
                .await?;
            page_count += 1;
            all_items.extend(page.items);

            match page_continuation(page.next_page_token) {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        log::debug!(
            "[nimbus] drained {path}: {} items over {page_count} page(s)",
            all_items.len()
        );
        Ok(all_items)
    }

    /// 验证凭证：对项目端点做一次轻量 GET。
    ///
    /// 成功返回 `Ok(())`；凭证或项目无效时返回对应业务错误。
    pub async fn validate_credentials(&self) -> Result<()> {
        let path = format!(
            "/v1/projects/{}",
            urlencoding::encode(&self.project_id)
        );
        let _: serde_json::Value = self
            .get(&path, &[], &ErrorContext::for_resource(&self.project_id))
            .await?;
        Ok(())
    }

    /// 将非 2xx 状态码映射为统一错误
    fn map_error_status(&self, status: u16, body: &str, ctx: &ErrorContext) -> ProviderError {
        let envelope: Option<ApiErrorBody> = serde_json::from_str::<ApiErrorEnvelope>(body)
            .ok()
            .and_then(|e| e.error);
        let raw_code = envelope.as_ref().and_then(|e| e.code.clone());
        let raw_message = envelope.and_then(|e| e.message);

        match status {
            401 => ProviderError::InvalidCredentials { raw_message },
            403 => ProviderError::PermissionDenied { raw_message },
            404 => ProviderError::ResourceNotFound {
                resource_id: ctx.resource_id.clone().unwrap_or_default(),
                raw_message,
            },
            _ => ProviderError::Unknown {
                raw_code,
                raw_message: raw_message.unwrap_or_else(|| format!("HTTP {status}")),
            },
        }
    }
}
