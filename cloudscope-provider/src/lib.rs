//! # cloudscope-provider
//!
//! Read-only inventory client for the Nimbus cloud API: compute instances,
//! block volumes, VPC networks, load balancers, object storage buckets and
//! monitoring alerts, normalized into one summary/detail shape per resource.
//!
//! ## Resource Kinds
//!
//! | Kind | Endpoint | Scope |
//! |------|----------|-------|
//! | [`ResourceKind::Instance`] | `/v1/instances` | zonal |
//! | [`ResourceKind::Volume`] | `/v1/volumes` | zonal |
//! | [`ResourceKind::Network`] | `/v1/networks` | zonal |
//! | [`ResourceKind::LoadBalancer`] | `/v1/loadBalancers` | zonal |
//! | [`ResourceKind::Bucket`] | `/v1/buckets` | global |
//! | [`ResourceKind::Alert`] | `/v1/alerts` | global |
//!
//! ## Feature Flags
//!
//! ### TLS Backend
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cloudscope_provider::{
//!     CloudCatalog, Credentials, ResourceKind, ResourceProvider, Zone,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1. Create the catalog from credentials
//!     let catalog = CloudCatalog::new(
//!         Credentials {
//!             api_token: "your-token".to_string(),
//!             project_id: "your-project".to_string(),
//!         },
//!         None,
//!     );
//!
//!     // 2. Validate credentials against the remote API
//!     catalog.validate_credentials().await?;
//!
//!     // 3. List all instances in a zone (pagination drained internally)
//!     let items = catalog
//!         .fetch_list(ResourceKind::Instance, Zone::EuNorth1)
//!         .await?;
//!     for item in &items {
//!         println!("{} {} [{}]", item.id, item.name, item.status);
//!     }
//!
//!     // 4. Drill into one of them
//!     let detail = catalog
//!         .fetch_detail(ResourceKind::Instance, &items[0].id)
//!         .await?;
//!     println!("{detail:?}");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ProviderError>`](ProviderError):
//!
//! - [`ProviderError::InvalidCredentials`] — authentication failed
//! - [`ProviderError::ResourceNotFound`] — resource does not exist
//! - [`ProviderError::RateLimited`] — API rate limit exceeded (retryable)
//! - [`ProviderError::NetworkError`] — network connectivity issue (retryable)
//!
//! Transient errors (`NetworkError`, `Timeout`, `RateLimited`) are automatically
//! retried with exponential backoff inside the client. A paginated list fetch is
//! all-or-nothing: if any page ultimately fails, the whole fetch fails with a
//! single error and no partial result.

mod catalog;
mod client;
mod error;
mod http_client;
mod resources;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export the production catalog
pub use catalog::CloudCatalog;

// Re-export core trait and id validation
pub use traits::{ResourceProvider, validate_resource_id};

// Re-export types
pub use types::{
    Credentials, DetailData, ResourceDetail, ResourceKind, ResourceStatus, ResourceSummary, Zone,
};

// Re-export the default endpoint for config display
pub use client::DEFAULT_BASE_URL;
