use serde::{Deserialize, Serialize};

// ============ Zones ============

/// A data-center zone.
///
/// The set is fixed and statically known; ordering is the cyclic order the
/// browser steps through on a zone switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Zone {
    /// Stockholm.
    #[serde(rename = "eu-north-1")]
    EuNorth1,
    /// Dublin.
    #[serde(rename = "eu-west-1")]
    EuWest1,
    /// Virginia.
    #[serde(rename = "us-east-1")]
    UsEast1,
    /// Mumbai.
    #[serde(rename = "ap-south-1")]
    ApSouth1,
}

impl Zone {
    /// All zones, in cyclic switch order.
    pub const ALL: [Zone; 4] = [Zone::EuNorth1, Zone::EuWest1, Zone::UsEast1, Zone::ApSouth1];

    /// Zone identifier as used by the API.
    pub fn as_str(self) -> &'static str {
        match self {
            Zone::EuNorth1 => "eu-north-1",
            Zone::EuWest1 => "eu-west-1",
            Zone::UsEast1 => "us-east-1",
            Zone::ApSouth1 => "ap-south-1",
        }
    }

    /// 循环切换到下一个 zone（末尾回绕到开头）。
    #[must_use]
    pub fn next(self) -> Zone {
        let idx = Zone::ALL.iter().position(|z| *z == self).unwrap_or(0);
        Zone::ALL[(idx + 1) % Zone::ALL.len()]
    }

    /// Parse a zone identifier; `None` for anything outside the fixed set.
    pub fn parse(s: &str) -> Option<Zone> {
        Zone::ALL.iter().copied().find(|z| z.as_str() == s)
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============ Resource Kinds ============

/// The kinds of resources the inventory can list.
///
/// Fixed enumeration; the browser cycles through it in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    /// Compute instance (VM).
    Instance,
    /// Block storage volume.
    Volume,
    /// VPC network.
    Network,
    /// Load balancer.
    LoadBalancer,
    /// Object storage bucket (globally scoped).
    Bucket,
    /// Monitoring alert rule (globally scoped).
    Alert,
}

impl ResourceKind {
    /// All kinds, in cyclic switch order.
    pub const ALL: [ResourceKind; 6] = [
        ResourceKind::Instance,
        ResourceKind::Volume,
        ResourceKind::Network,
        ResourceKind::LoadBalancer,
        ResourceKind::Bucket,
        ResourceKind::Alert,
    ];

    /// Human-readable plural label for tab headers.
    pub fn label(self) -> &'static str {
        match self {
            ResourceKind::Instance => "Instances",
            ResourceKind::Volume => "Volumes",
            ResourceKind::Network => "Networks",
            ResourceKind::LoadBalancer => "Load Balancers",
            ResourceKind::Bucket => "Buckets",
            ResourceKind::Alert => "Alerts",
        }
    }

    /// Whether this kind is globally scoped (not partitioned per zone).
    ///
    /// For global kinds the zone parameter of a list fetch is ignored and
    /// summaries carry no zone.
    pub fn is_global(self) -> bool {
        matches!(self, ResourceKind::Bucket | ResourceKind::Alert)
    }

    /// 循环切换到下一个资源类型。
    #[must_use]
    pub fn next(self) -> ResourceKind {
        let idx = ResourceKind::ALL.iter().position(|k| *k == self).unwrap_or(0);
        ResourceKind::ALL[(idx + 1) % ResourceKind::ALL.len()]
    }

    /// 循环切换到上一个资源类型。
    #[must_use]
    pub fn prev(self) -> ResourceKind {
        let idx = ResourceKind::ALL.iter().position(|k| *k == self).unwrap_or(0);
        ResourceKind::ALL[(idx + ResourceKind::ALL.len() - 1) % ResourceKind::ALL.len()]
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ============ Status ============

/// Normalized resource status.
///
/// Remote APIs report kind-specific status strings; each resource module maps
/// them onto this common set during normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceStatus {
    /// Up and serving.
    Running,
    /// Intentionally stopped / disabled.
    Stopped,
    /// Being created or modified.
    Provisioning,
    /// Up but unhealthy.
    Degraded,
    /// In a failed state.
    Error,
    /// Status could not be determined.
    Unknown,
}

impl ResourceStatus {
    /// Short status string for list rows.
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceStatus::Running => "running",
            ResourceStatus::Stopped => "stopped",
            ResourceStatus::Provisioning => "provisioning",
            ResourceStatus::Degraded => "degraded",
            ResourceStatus::Error => "error",
            ResourceStatus::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for ResourceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============ Summary (list rows) ============

/// A normalized one-line summary of a resource, as shown in the list view.
///
/// Produced only by this crate's normalization functions; immutable once
/// produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceSummary {
    /// API resource identifier (e.g. `"inst-0a1b2c3d"`).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Which kind of resource this is.
    pub kind: ResourceKind,
    /// Zone the resource lives in; `None` for globally scoped kinds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone: Option<Zone>,
    /// Normalized status.
    pub status: ResourceStatus,
}

// ============ Detail (drill-down) ============

/// Kind-specific attributes of a resource detail.
///
/// One variant per resource kind; the browser never needs to distinguish
/// kinds structurally, only the detail view renders the variant fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "attributes", rename_all = "lowercase")]
pub enum DetailData {
    /// Compute instance attributes.
    Instance {
        /// Number of vCPUs.
        cpu_cores: u32,
        /// RAM in MiB.
        memory_mb: u64,
        /// Boot image name.
        image: String,
        /// Private IPv4 address, if assigned.
        private_ip: Option<String>,
        /// Public IPv4 address, if assigned.
        public_ip: Option<String>,
    },

    /// Block volume attributes.
    Volume {
        /// Capacity in GiB.
        size_gb: u64,
        /// Volume class (`"ssd"`, `"hdd"`, ...).
        volume_type: String,
        /// Instance id the volume is attached to, if any.
        attached_to: Option<String>,
    },

    /// VPC network attributes.
    Network {
        /// IPv4 CIDR block.
        cidr_block: String,
        /// Number of subnets carved out of the block.
        subnet_count: u32,
    },

    /// Load balancer attributes.
    LoadBalancer {
        /// `"internet-facing"` or `"internal"`.
        scheme: String,
        /// Listener ports.
        listener_ports: Vec<u16>,
        /// Number of registered targets.
        target_count: u32,
    },

    /// Object storage bucket attributes.
    Bucket {
        /// Number of stored objects.
        object_count: u64,
        /// Total stored bytes.
        size_bytes: u64,
        /// Whether object versioning is enabled.
        versioning: bool,
    },

    /// Monitoring alert rule attributes.
    Alert {
        /// Severity label (`"critical"`, `"warning"`, ...).
        severity: String,
        /// Human-readable trigger condition.
        condition: String,
        /// Whether the alert is currently firing.
        firing: bool,
    },
}

impl DetailData {
    /// Returns the [`ResourceKind`] discriminant for this detail payload.
    pub fn kind(&self) -> ResourceKind {
        match self {
            Self::Instance { .. } => ResourceKind::Instance,
            Self::Volume { .. } => ResourceKind::Volume,
            Self::Network { .. } => ResourceKind::Network,
            Self::LoadBalancer { .. } => ResourceKind::LoadBalancer,
            Self::Bucket { .. } => ResourceKind::Bucket,
            Self::Alert { .. } => ResourceKind::Alert,
        }
    }
}

/// A normalized resource detail record — a superset of the corresponding
/// [`ResourceSummary`] plus kind-specific attributes. Fetched lazily, only on
/// drill-down.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDetail {
    /// API resource identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Zone the resource lives in; `None` for globally scoped kinds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone: Option<Zone>,
    /// Normalized status.
    pub status: ResourceStatus,
    /// Creation timestamp, if the API reports one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    /// Kind-specific attributes.
    pub data: DetailData,
}

// ============ Credentials ============

/// Credentials and addressing for the Nimbus API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    /// Bearer token.
    pub api_token: String,
    /// Project (tenant) identifier; every request is scoped to it.
    pub project_id: String,
}
