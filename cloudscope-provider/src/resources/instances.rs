//! 计算实例清单
//!
//! Nimbus 实例状态：pending, starting, running, impaired, stopping,
//! stopped, terminating, failed

use serde::Deserialize;

use crate::client::{ApiClient, ErrorContext};
use crate::error::Result;
use crate::resources::common::{parse_timestamp, parse_zone};
use crate::types::{
    DetailData, ResourceDetail, ResourceKind, ResourceStatus, ResourceSummary,
    Zone,
};

const LIST_PATH: &str = "/v1/instances";

/// 实例列表行（wire）
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InstanceRow {
    id: String,
    name: String,
    zone: Option<String>,
    state: String,
}

/// 实例详情（wire）
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InstanceRecord {
    id: String,
    name: String,
    zone: Option<String>,
    state: String,
    created_at: Option<String>,
    cpu_cores: u32,
    memory_mb: u64,
    image: String,
    private_ip: Option<String>,
    public_ip: Option<String>,
}

fn normalize_state(state: &str) -> ResourceStatus {
    match state {
        "running" => ResourceStatus::Running,
        "stopped" | "stopping" | "terminating" => ResourceStatus::Stopped,
        "pending" | "starting" => ResourceStatus::Provisioning,
        "impaired" => ResourceStatus::Degraded,
        "failed" => ResourceStatus::Error,
        _ => ResourceStatus::Unknown,
    }
}

fn row_to_summary(row: InstanceRow) -> ResourceSummary {
    ResourceSummary {
        status: normalize_state(&row.state),
        zone: parse_zone(row.zone.as_deref()),
        id: row.id,
        name: row.name,
        kind: ResourceKind::Instance,
    }
}

fn record_to_detail(rec: InstanceRecord) -> ResourceDetail {
    ResourceDetail {
        status: normalize_state(&rec.state),
        zone: parse_zone(rec.zone.as_deref()),
        created_at: parse_timestamp(rec.created_at.as_deref()),
        id: rec.id,
        name: rec.name,
        data: DetailData::Instance {
            cpu_cores: rec.cpu_cores,
            memory_mb: rec.memory_mb,
            image: rec.image,
            private_ip: rec.private_ip,
            public_ip: rec.public_ip,
        },
    }
}

pub(crate) async fn list(client: &ApiClient, zone: Zone) -> Result<Vec<ResourceSummary>> {
    let query = [("zone", zone.as_str().to_string())];
    let rows: Vec<InstanceRow> = client.get_all_pages(LIST_PATH, &query).await?;
    Ok(rows.into_iter().map(row_to_summary).collect())
}

pub(crate) async fn detail(client: &ApiClient, id: &str) -> Result<ResourceDetail> {
    let path = format!("{LIST_PATH}/{}", urlencoding::encode(id));
    let rec: InstanceRecord = client
        .get(&path, &[], &ErrorContext::for_resource(id))
        .await?;
    Ok(record_to_detail(rec))
}
