//! 监控告警规则清单（全局资源，不分 zone）
//!
//! Nimbus 告警状态：ok, firing, disabled, insufficient-data

use serde::Deserialize;

use crate::client::{ApiClient, ErrorContext};
use crate::error::Result;
use crate::resources::common::parse_timestamp;
use crate::types::{
    DetailData, ResourceDetail, ResourceKind, ResourceStatus, ResourceSummary,
};

const LIST_PATH: &str = "/v1/alerts";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AlertRow {
    id: String,
    name: String,
    state: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AlertRecord {
    id: String,
    name: String,
    state: String,
    created_at: Option<String>,
    severity: String,
    condition: String,
}

fn normalize_state(state: &str) -> ResourceStatus {
    match state {
        "ok" => ResourceStatus::Running,
        "disabled" => ResourceStatus::Stopped,
        // firing 的规则本身工作正常，但它守护的对象出了问题
        "firing" => ResourceStatus::Degraded,
        _ => ResourceStatus::Unknown,
    }
}

fn row_to_summary(row: AlertRow) -> ResourceSummary {
    ResourceSummary {
        status: normalize_state(&row.state),
        zone: None,
        id: row.id,
        name: row.name,
        kind: ResourceKind::Alert,
    }
}

fn record_to_detail(rec: AlertRecord) -> ResourceDetail {
    let firing = rec.state == "firing";
    ResourceDetail {
        status: normalize_state(&rec.state),
        zone: None,
        created_at: parse_timestamp(rec.created_at.as_deref()),
        id: rec.id,
        name: rec.name,
        data: DetailData::Alert {
            severity: rec.severity,
            condition: rec.condition,
            firing,
        },
    }
}

pub(crate) async fn list(client: &ApiClient) -> Result<Vec<ResourceSummary>> {
    let rows: Vec<AlertRow> = client.get_all_pages(LIST_PATH, &[]).await?;
    Ok(rows.into_iter().map(row_to_summary).collect())
}

pub(crate) async fn detail(client: &ApiClient, id: &str) -> Result<ResourceDetail> {
    let path = format!("{LIST_PATH}/{}", urlencoding::encode(id));
    let rec: AlertRecord = client
        .get(&path, &[], &ErrorContext::for_resource(id))
        .await?;
    Ok(record_to_detail(rec))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_mapping() {
        assert_eq!(normalize_state("ok"), ResourceStatus::Running);
        assert_eq!(normalize_state("disabled"), ResourceStatus::Stopped);
        assert_eq!(normalize_state("firing"), ResourceStatus::Degraded);
        assert_eq!(normalize_state("insufficient-data"), ResourceStatus::Unknown);
    }

    #[test]
    fn firing_flag_follows_state() {
        let rec_res: serde_json::Result<AlertRecord> = serde_json::from_str(
            r#"{
                "id": "alr-cpu",
                "name": "cpu-high",
                "state": "firing",
                "severity": "critical",
                "condition": "cpu > 90% for 5m"
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
            DetailData::Alert { firing: true, severity, .. } if severity == "critical"
        ));
    }

    #[test]
    fn summary_has_no_zone() {
        let row_res: serde_json::Result<AlertRow> =
            serde_json::from_str(r#"{"id":"alr-1","name":"disk-full","state":"ok"}"#);
        assert!(row_res.is_ok(), "parse failed: {row_res:?}");
        let Ok(row) = row_res else {
            return;
        };
        let s = row_to_summary(row);
        assert_eq!(s.zone, None);
        assert_eq!(s.status, ResourceStatus::Running);
    }
}
