//! 块存储卷清单
//!
//! Nimbus 卷状态：creating, attaching, in-use, available, detaching,
//! deleting, error

use serde::Deserialize;

use crate::client::{ApiClient, ErrorContext};
use crate::error::Result;
use crate::resources::common::{parse_timestamp, parse_zone};
use crate::types::{
    DetailData, ResourceDetail, ResourceKind, ResourceStatus, ResourceSummary,
    Zone,
};

const LIST_PATH: &str = "/v1/volumes";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VolumeRow {
    id: String,
    name: String,
    zone: Option<String>,
    state: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VolumeRecord {
    id: String,
    name: String,
    zone: Option<String>,
    state: String,
    created_at: Option<String>,
    size_gb: u64,
    volume_type: String,
    attached_to: Option<String>,
}

fn normalize_state(state: &str) -> ResourceStatus {
    match state {
        // in-use 的卷在服务中；available 是已脱离实例的闲置卷
        "in-use" => ResourceStatus::Running,
        "available" => ResourceStatus::Stopped,
        "creating" | "attaching" | "detaching" => ResourceStatus::Provisioning,
        "error" => ResourceStatus::Error,
        _ => ResourceStatus::Unknown,
    }
}

fn row_to_summary(row: VolumeRow) -> ResourceSummary {
    ResourceSummary {
        status: normalize_state(&row.state),
        zone: parse_zone(row.zone.as_deref()),
        id: row.id,
        name: row.name,
        kind: ResourceKind::Volume,
    }
}

fn record_to_detail(rec: VolumeRecord) -> ResourceDetail {
    ResourceDetail {
        status: normalize_state(&rec.state),
        zone: parse_zone(rec.zone.as_deref()),
        created_at: parse_timestamp(rec.created_at.as_deref()),
        id: rec.id,
        name: rec.name,
        data: DetailData::Volume {
            size_gb: rec.size_gb,
            volume_type: rec.volume_type,
            attached_to: rec.attached_to,
        },
    }
}

pub(crate) async fn list(client: &ApiClient, zone: Zone) -> Result<Vec<ResourceSummary>> {
    let query = [("zone", zone.as_str().to_string())];
    let rows: Vec<VolumeRow> = client.get_all_pages(LIST_PATH, &query).await?;
    Ok(rows.into_iter().map(row_to_summary).collect())
}

pub(crate) async fn detail(client: &ApiClient, id: &str) -> Result<ResourceDetail> {
    let path = format!("{LIST_PATH}/{}", urlencoding::encode(id));
    let rec: VolumeRecord = client
        .get(&path, &[], &ErrorContext::for_resource(id))
        .await?;
    Ok(record_to_detail(rec))
}
