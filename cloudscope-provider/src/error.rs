use serde::{Deserialize, Serialize};

/// Unified error type for all inventory operations.
///
/// All variants are serializable for structured error reporting.
///
/// # Retryable Errors
///
/// The following variants represent transient failures that may succeed on retry:
/// - [`NetworkError`](Self::NetworkError) — network connectivity issues
/// - [`Timeout`](Self::Timeout) — request timed out
/// - [`RateLimited`](Self::RateLimited) — API rate limit exceeded
///
/// The built-in HTTP client automatically retries these with exponential backoff.
/// A pagination drain never retries a whole drain: a page that still fails after
/// its own retries fails the drain as a single error with no partial result.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    ///
    /// This is a transient error and is automatically retried.
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    ///
    /// This is a transient error and is automatically retried.
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The API rate limit has been exceeded (HTTP 429).
    ///
    /// This is a transient error; the request should succeed after waiting.
    RateLimited {
        /// Suggested wait time in seconds before retrying, if provided by the API.
        retry_after: Option<u64>,
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// The provided credentials are invalid or expired.
    InvalidCredentials {
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// The authenticated principal lacks permission for the requested resource.
    PermissionDenied {
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// The requested resource does not exist (or is not visible in this project).
    ResourceNotFound {
        /// Identifier of the resource that was not found.
        resource_id: String,
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// A resource identifier is malformed and was rejected before any request was sent.
    InvalidResourceId {
        /// The offending identifier.
        id: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// Failed to parse the API response.
    ParseError {
        /// Details about the parse failure.
        detail: String,
    },

    /// An unrecognized error from the API.
    ///
    /// This is a catch-all for error codes not yet mapped to a specific variant.
    Unknown {
        /// Raw error code from the API, if available.
        raw_code: Option<String>,
        /// Raw error message from the API.
        raw_message: String,
    },
}

impl ProviderError {
    /// 是否为预期行为（用户输入、资源不存在等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials { .. }
                | Self::PermissionDenied { .. }
                | Self::ResourceNotFound { .. }
                | Self::InvalidResourceId { .. }
        )
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { detail } => {
                write!(f, "Network error: {detail}")
            }
            Self::Timeout { detail } => {
                write!(f, "Request timeout: {detail}")
            }
            Self::RateLimited { retry_after, .. } => {
                if let Some(secs) = retry_after {
                    write!(f, "Rate limited (retry after {secs}s)")
                } else {
                    write!(f, "Rate limited")
                }
            }
            Self::InvalidCredentials { raw_message } => {
                if let Some(msg) = raw_message {
                    write!(f, "Invalid credentials: {msg}")
                } else {
                    write!(f, "Invalid credentials")
                }
            }
            Self::PermissionDenied { raw_message } => {
                if let Some(msg) = raw_message {
                    write!(f, "Permission denied: {msg}")
                } else {
                    write!(f, "Permission denied")
                }
            }
            Self::ResourceNotFound {
                resource_id,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "Resource '{resource_id}' not found: {msg}")
                } else {
                    write!(f, "Resource '{resource_id}' not found")
                }
            }
            Self::InvalidResourceId { id, detail } => {
                write!(f, "Invalid resource id '{id}': {detail}")
            }
            Self::ParseError { detail } => {
                write!(f, "Parse error: {detail}")
            }
            Self::Unknown { raw_message, .. } => {
                write!(f, "{raw_message}")
            }
        }
    }
}

impl std::error::Error for ProviderError {}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;
