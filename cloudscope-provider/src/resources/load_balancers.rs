//! 负载均衡器清单
//!
//! Nimbus LB 状态：provisioning, active, active-impaired, failed

use serde::Deserialize;

use crate::client::{ApiClient, ErrorContext};
use crate::error::Result;
use crate::resources::common::{parse_timestamp, parse_zone};
use crate::types::{
    DetailData, ResourceDetail, ResourceKind, ResourceStatus, ResourceSummary,
    Zone,
};

const LIST_PATH: &str = "/v1/loadBalancers";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LoadBalancerRow {
    id: String,
    name: String,
    zone: Option<String>,
    state: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LoadBalancerRecord {
    id: String,
    name: String,
    zone: Option<String>,
    state: String,
    created_at: Option<String>,
    scheme: String,
    #[serde(default)]
    listener_ports: Vec<u16>,
    target_count: u32,
}

fn normalize_state(state: &str) -> ResourceStatus {
    match state {
        "active" => ResourceStatus::Running,
        "provisioning" => ResourceStatus::Provisioning,
        "active-impaired" => ResourceStatus::Degraded,
        "failed" => ResourceStatus::Error,
        _ => ResourceStatus::Unknown,
    }
}

fn row_to_summary(row: LoadBalancerRow) -> ResourceSummary {
    ResourceSummary {
        status: normalize_state(&row.state),
        zone: parse_zone(row.zone.as_deref()),
        id: row.id,
        name: row.name,
        kind: ResourceKind::LoadBalancer,
    }
}

fn record_to_detail(rec: LoadBalancerRecord) -> ResourceDetail {
    ResourceDetail {
        status: normalize_state(&rec.state),
        zone: parse_zone(rec.zone.as_deref()),
        created_at: parse_timestamp(rec.created_at.as_deref()),
        id: rec.id,
        name: rec.name,
        data: DetailData::LoadBalancer {
            scheme: rec.scheme,
            listener_ports: rec.listener_ports,
            target_count: rec.target_count,
        },
    }
}

pub(crate) async fn list(client: &ApiClient, zone: Zone) -> Result<Vec<ResourceSummary>> {
    let query = [("zone", zone.as_str().to_string())];
    let rows: Vec<LoadBalancerRow> = client.get_all_pages(LIST_PATH, &query).await?;
    Ok(rows.into_iter().map(row_to_summary).collect())
}

pub(crate) async fn detail(client: &ApiClient, id: &str) -> Result<ResourceDetail> {
    let path = format!("{LIST_PATH}/{}", urlencoding::encode(id));
    let rec: LoadBalancerRecord = client
        .get(&path, &[], &ErrorContext::for_resource(id))
        .await?;
    Ok(record_to_detail(rec))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_mapping() {
        assert_eq!(normalize_state("active"), ResourceStatus::Running);
        assert_eq!(normalize_state("provisioning"), ResourceStatus::Provisioning);
        assert_eq!(normalize_state("active-impaired"), ResourceStatus::Degraded);
        assert_eq!(normalize_state("failed"), ResourceStatus::Error);
        assert_eq!(normalize_state("draining"), ResourceStatus::Unknown);
    }

    #[test]
    fn detail_normalized() {
        let rec_res: serde_json::Result<LoadBalancerRecord> = serde_json::from_str(
            r#"{
                "id": "lb-3c4d",
                "name": "edge-lb",
                "zone": "eu-north-1",
                "state": "active-impaired",
                "createdAt": "2024-05-05T10:00:00Z",
                "scheme": "internet-facing",
                "listenerPorts": [80, 443],
                "targetCount": 12
            }"#,
        );
        assert!(rec_res.is_ok(), "parse failed: {rec_res:?}");
        let Ok(rec) = rec_res else {
            return;
        };
        let d = record_to_detail(rec);
        assert_eq!(d.status, ResourceStatus::Degraded);
        assert!(matches!(
            &d.data,
            DetailData::LoadBalancer { listener_ports, target_count: 12, .. }
                if listener_ports == &[80, 443]
        ));
    }

    #[test]
    fn missing_listener_ports_default_empty() {
        let rec_res: serde_json::Result<LoadBalancerRecord> = serde_json::from_str(
            r#"{
                "id": "lb-1",
                "name": "bare-lb",
                "state": "provisioning",
                "scheme": "internal",
                "targetCount": 0
            }"#,
        );
        assert!(rec_res.is_ok(), "parse failed: {rec_res:?}");
        let Ok(rec) = rec_res else {
            return;
        };
        let d = record_to_detail(rec);
        assert!(matches!(
            &d.data,
            DetailData::LoadBalancer { listener_ports, .. } if listener_ports.is_empty()
        ));
    }
}
