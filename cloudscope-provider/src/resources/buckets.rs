//! 对象存储桶清单（全局资源，不分 zone）
//!
//! Nimbus 桶状态：active, suspended

use serde::Deserialize;

use crate::client::{ApiClient, ErrorContext};
use crate::error::Result;
use crate::resources::common::parse_timestamp;
use crate::types::{
    DetailData, ResourceDetail, ResourceKind, ResourceStatus, ResourceSummary,
};

const LIST_PATH: &str = "/v1/buckets";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BucketRow {
    id: String,
    name: String,
    state: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BucketRecord {
    id: String,
    name: String,
    state: String,
    created_at: Option<String>,
    object_count: u64,
    size_bytes: u64,
    #[serde(default)]
    versioning: bool,
}

fn normalize_state(state: &str) -> ResourceStatus {
    match state {
        "active" => ResourceStatus::Running,
        "suspended" => ResourceStatus::Stopped,
        _ => ResourceStatus::Unknown,
    }
}

fn row_to_summary(row: BucketRow) -> ResourceSummary {
    ResourceSummary {
        status: normalize_state(&row.state),
        zone: None,
        id: row.id,
        name: row.name,
        kind: ResourceKind::Bucket,
    }
}

fn record_to_detail(rec: BucketRecord) -> ResourceDetail {
    ResourceDetail {
        status: normalize_state(&rec.state),
        zone: None,
        created_at: parse_timestamp(rec.created_at.as_deref()),
        id: rec.id,
        name: rec.name,
        data: DetailData::Bucket {
            object_count: rec.object_count,
            size_bytes: rec.size_bytes,
            versioning: rec.versioning,
        },
    }
}

pub(crate) async fn list(client: &ApiClient) -> Result<Vec<ResourceSummary>> {
    let rows: Vec<BucketRow> = client.get_all_pages(LIST_PATH, &[]).await?;
    Ok(rows.into_iter().map(row_to_summary).collect())
}

pub(crate) async fn detail(client: &ApiClient, id: &str) -> Result<ResourceDetail> {
    let path = format!("{LIST_PATH}/{}", urlencoding::encode(id));
    let rec: BucketRecord = client
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
        assert_eq!(normalize_state("suspended"), ResourceStatus::Stopped);
        assert_eq!(normalize_state("migrating"), ResourceStatus::Unknown);
    }

    #[test]
    fn summary_has_no_zone() {
        let row_res: serde_json::Result<BucketRow> = serde_json::from_str(
            r#"{"id":"bkt-img","name":"images-prod","state":"active"}"#,
        );
        assert!(row_res.is_ok(), "parse failed: {row_res:?}");
        let Ok(row) = row_res else {
            return;
        };
        let s = row_to_summary(row);
        assert_eq!(s.zone, None);
        assert_eq!(s.kind, ResourceKind::Bucket);
    }

    #[test]
    fn detail_normalized() {
        let rec_res: serde_json::Result<BucketRecord> = serde_json::from_str(
            r#"{
                "id": "bkt-img",
                "name": "images-prod",
                "state": "active",
                "createdAt": "2021-08-15T00:00:00Z",
                "objectCount": 120000,
                "sizeBytes": 5368709120,
                "versioning": true
            }"#,
        );
        assert!(rec_res.is_ok(), "parse failed: {rec_res:?}");
        let Ok(rec) = rec_res else {
            return;
        };
        let d = record_to_detail(rec);
        assert_eq!(d.zone, None);
        assert!(matches!(
            d.data,
            DetailData::Bucket {
                object_count: 120_000,
                size_bytes: 5_368_709_120,
                versioning: true,
            }
        ));
    }
}
