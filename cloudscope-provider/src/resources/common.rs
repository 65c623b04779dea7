//! 各资源模块共享的归一化辅助函数

use chrono::{DateTime, Utc};

use crate::types::Zone;

/// 解析 API 返回的 RFC 3339 时间戳
///
/// 时间戳缺失或格式异常时返回 `None`，不让单条记录的坏时间戳
/// 毁掉整页数据。
pub(crate) fn parse_timestamp(raw: Option<&str>) -> Option<DateTime<Utc>> {
    let s = raw?;
    match DateTime::parse_from_rfc3339(s) {
        Ok(dt) => Some(dt.with_timezone(&Utc)),
        Err(e) => {
            log::warn!("[nimbus] unparseable timestamp '{s}': {e}");
            None
        }
    }
}

/// 解析 API 返回的 zone 字符串
///
/// 未知 zone 按 `None`（全局）处理并记日志，同样不让坏数据中断列表。
pub(crate) fn parse_zone(raw: Option<&str>) -> Option<Zone> {
    let s = raw?;
    let zone = Zone::parse(s);
    if zone.is_none() {
        log::warn!("[nimbus] unknown zone '{s}' in response");
    }
    zone
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn timestamp_rfc3339_parsed() {
        let dt = parse_timestamp(Some("2024-06-01T12:30:00Z"));
        let expected = Utc.with_ymd_and_hms(2024, 6, 1, 12, 30, 0).single();
        assert_eq!(dt, expected);
    }

    #[test]
    fn timestamp_with_offset_normalized_to_utc() {
        let dt = parse_timestamp(Some("2024-06-01T14:30:00+02:00"));
        let expected = Utc.with_ymd_and_hms(2024, 6, 1, 12, 30, 0).single();
        assert_eq!(dt, expected);
    }

    #[test]
    fn timestamp_garbage_is_none() {
        assert_eq!(parse_timestamp(Some("yesterday")), None);
        assert_eq!(parse_timestamp(None), None);
    }

    #[test]
    fn zone_known_and_unknown() {
        assert_eq!(parse_zone(Some("eu-west-1")), Some(Zone::EuWest1));
        assert_eq!(parse_zone(Some("atlantis-1")), None);
        assert_eq!(parse_zone(None), None);
    }
}
