//! VPC 网络清单
//!
//! Nimbus 网络状态：pending, available, deleting, error

use serde::Deserialize;

use crate::client::{ApiClient, ErrorContext};
use crate::error::Result;
use crate::resources::common::{parse_timestamp, parse_zone};
use crate::types::{
    DetailData, ResourceDetail, ResourceKind, ResourceStatus, ResourceSummary,
    Zone,
};

const LIST_PATH: &str = "/v1/networks";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NetworkRow {
    id: String,
    name: String,
    zone: Option<String>,
    state: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NetworkRecord {
    id: String,
    name: String,
    zone: Option<String>,
    state: String,
    created_at: Option<String>,
    cidr_block: String,
    subnet_count: u32,
}

fn normalize_state(state: &str) -> ResourceStatus {
    match state {
        "available" => ResourceStatus::Running,
        "pending" => ResourceStatus::Provisioning,
        "error" => ResourceStatus::Error,
        _ => ResourceStatus::Unknown,
    }
}

fn row_to_summary(row: NetworkRow) -> ResourceSummary {
    ResourceSummary {
        status: normalize_state(&row.state),
        zone: parse_zone(row.zone.as_deref()),
        id: row.id,
        name: row.name,
        kind: ResourceKind::Network,
    }
}

fn record_to_detail(rec: NetworkRecord) -> ResourceDetail {
    ResourceDetail {
        status: normalize_state(&rec.state),
        zone: parse_zone(rec.zone.as_deref()),
        created_at: parse_timestamp(rec.created_at.as_deref()),
        id: rec.id,
        name: rec.name,
        data: DetailData::Network {
            cidr_block: rec.cidr_block,
            subnet_count: rec.subnet_count,
        },
    }
}

pub(crate) async fn list(client: &ApiClient, zone: Zone) -> Result<Vec<ResourceSummary>> {
    let query = [("zone", zone.as_str().to_string())];
    let rows: Vec<NetworkRow> = client.get_all_pages(LIST_PATH, &query).await?;
    Ok(rows.into_iter().map(row_to_summary).collect())
}

pub(crate) async fn detail(client: &ApiClient, id: &str) -> Result<ResourceDetail> {
    let path = format!("{LIST_PATH}/{}", urlencoding::encode(id));
    let rec: NetworkRecord = client
        .get(&path, &[], &ErrorContext::for_resource(id))
        .await?;
    Ok(record_to_detail(rec))
}
