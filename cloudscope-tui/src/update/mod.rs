//！┌──────────────────────────────────────────────────────────────────────────┐
//！│                             主循环 (app.rs)                              │
//！│                                                                         │
//！│  ┌───────────────────────────── UI 层 ─────────────────────────────┐   │
//！│  │                                                                  │   │
//！│  │   ┌─────────┐          ┌───────────┐          ┌──────────┐      │   │
//！│  │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │      │   │
//！│  │   │   层    │   翻译    │    层     │   消费    │    层    │      │   │
//！│  │   └─────────┘          │           │          └────┬─────┘      │   │
//！│  │        ▲               │ Message   │               │ 修改       │   │
//！│  │        │               │ CursorMsg │               ▼            │   │
//！│  │   ┌─────────┐          │ SearchMsg │          ┌──────────┐      │   │
//！│  │   │  View   │          └───────────┘   ┌───── │ Session  │      │   │
//！│  │   │   层    │ ◀──────── 读取 ───────────┘      └────┬─────┘      │   │
//！│  │   └─────────┘                                      │            │   │
//！│  └──────────────────────────────────────────────────── │ ──────────┘   │
//！│                                                        │ Effect        │
//！│                                                        ▼               │
//！│   ListLoaded / DetailLoaded ◀── mpsc ◀── tokio::spawn(dispatch)        │
//！│                                            │                           │
//！│                                            ▼                           │
//！│                                 ┌────────────────────┐                 │
//！│                                 │ cloudscope-provider│                 │
//！│                                 └────────────────────┘                 │
//！└──────────────────────────────────────────────────────────────────────────┘

//!
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Session。是唯一可以修改 Session
//! 的地方。取数不在这里发生：需要取数时返回一个 [`Effect`]，由主循环
//! 派发为后台任务，任务完成后再以 `ListLoaded` / `DetailLoaded` 回到
//! 这里。
//!
//! 两条完成消息都带时效检查：`ListLoaded` 只在 `loading` 为真时接受，
//! `DetailLoaded` 只在详情仍打开时接受，迟到的完成被静默丢弃。

mod cursor;
mod search;

use crate::message::{Effect, Message};
use crate::model::{DetailState, Session};

/// 处理应用消息，更新会话状态，必要时返回待派发的副作用
pub fn update(session: &mut Session, msg: Message) -> Option<Effect> {
    match msg {
        Message::Quit => {
            session.should_quit = true;
            None
        }

        Message::SwitchZone => {
            // 有未完成取数或详情打开时不换 zone
            if session.is_busy() {
                return None;
            }
            session.zone = session.zone.next();
            begin_list_fetch(session)
        }

        Message::NextKind => {
            if session.is_busy() {
                return None;
            }
            session.kind = session.kind.next();
            begin_list_fetch(session)
        }

        Message::PrevKind => {
            if session.is_busy() {
                return None;
            }
            session.kind = session.kind.prev();
            begin_list_fetch(session)
        }

        Message::Refresh => {
            if session.is_busy() {
                return None;
            }
            begin_list_fetch(session)
        }

        Message::ListLoaded(result) => {
            // 时效检查：没有未完成的列表取数就丢弃
            if !session.loading {
                return None;
            }
            session.loading = false;
            match result {
                Ok(items) => {
                    session.items = items;
                    session.cursor = 0;
                    session.error = None;
                    // 旧匹配下标对新列表无意义
                    session.search = None;
                    session.clear_status();
                }
                Err(e) => {
                    // 保留旧列表，错误进状态栏
                    session.error = Some(e);
                    session.clear_status();
                }
            }
            None
        }

        Message::Cursor(cursor_msg) => {
            cursor::update(session, cursor_msg);
            None
        }

        Message::Search(search_msg) => {
            search::update(session, search_msg);
            None
        }

        Message::EnterDetail => {
            if session.is_busy() || session.items.is_empty() {
                return None;
            }
            let item = &session.items[session.cursor];
            let effect = Effect::FetchDetail {
                kind: item.kind,
                id: item.id.clone(),
            };
            session.detail = Some(DetailState::loading());
            Some(effect)
        }

        Message::ExitDetail => {
            session.detail = None;
            None
        }

        Message::DetailLoaded(result) => {
            // 时效检查：详情已退出就丢弃
            let Some(detail) = session.detail.as_mut() else {
                return None;
            };
            match result {
                Ok(record) => {
                    detail.record = Some(record);
                    detail.loading = false;
                }
                Err(e) => {
                    // 详情失败回列表，错误进状态栏
                    session.detail = None;
                    session.error = Some(e);
                }
            }
            None
        }

        Message::Noop => None,
    }
}

/// 开始一次列表取数：置 loading、清错误和搜索，返回取数副作用
fn begin_list_fetch(session: &mut Session) -> Option<Effect> {
    session.loading = true;
    session.error = None;
    session.search = None;
    Some(Effect::FetchList {
        kind: session.kind,
        zone: session.zone,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Mode;
    use cloudscope_provider::{
        ProviderError, ResourceKind, ResourceStatus, ResourceSummary, Zone,
    };

    fn item(id: &str, name: &str) -> ResourceSummary {
        ResourceSummary {
            id: id.to_string(),
            name: name.to_string(),
            kind: ResourceKind::Instance,
            zone: Some(Zone::EuNorth1),
            status: ResourceStatus::Running,
        }
    }

    fn loaded_session(names: &[&str]) -> Session {
        let mut s = Session::new();
        s.loading = true;
        let items = names
            .iter()
            .enumerate()
            .map(|(i, n)| item(&format!("inst-{i}"), n))
            .collect();
        let effect = update(&mut s, Message::ListLoaded(Ok(items)));
        assert!(effect.is_none());
        s
    }

    // ---- Quit ----

    #[test]
    fn quit_sets_flag() {
        let mut s = Session::new();
        assert!(update(&mut s, Message::Quit).is_none());
        assert!(s.should_quit);
    }

    // ---- Zone / kind switching ----

    #[test]
    fn switch_zone_advances_and_schedules_fetch() {
        let mut s = loaded_session(&["a"]);
        let effect = update(&mut s, Message::SwitchZone);
        assert_eq!(s.zone, Zone::EuWest1);
        assert!(s.loading);
        assert_eq!(
            effect,
            Some(Effect::FetchList {
                kind: ResourceKind::Instance,
                zone: Zone::EuWest1,
            })
        );
    }

    #[test]
    fn switch_zone_while_loading_is_noop() {
        let mut s = Session::new();
        s.loading = true;
        let zone_before = s.zone;
        let effect = update(&mut s, Message::SwitchZone);
        assert!(effect.is_none());
        assert_eq!(s.zone, zone_before);
    }

    #[test]
    fn switch_zone_while_detail_open_is_noop() {
        let mut s = loaded_session(&["a"]);
        s.detail = Some(DetailState::loading());
        let effect = update(&mut s, Message::SwitchZone);
        assert!(effect.is_none());
        assert_eq!(s.zone, Zone::EuNorth1);
    }

    #[test]
    fn switch_zone_clears_error_and_search() {
        let mut s = loaded_session(&["web-server-1"]);
        s.error = Some(ProviderError::Timeout { detail: "x".into() });
        update(&mut s, Message::Search(crate::message::SearchMessage::Enter));
        update(&mut s, Message::SwitchZone);
        assert!(s.error.is_none());
        assert!(s.search.is_none());
    }

    #[test]
    fn kind_cycles_both_directions() {
        let mut s = loaded_session(&["a"]);
        update(&mut s, Message::NextKind);
        assert_eq!(s.kind, ResourceKind::Volume);
        s.loading = false;
        update(&mut s, Message::PrevKind);
        assert_eq!(s.kind, ResourceKind::Instance);
    }

    #[test]
    fn refresh_keeps_zone_and_kind() {
        let mut s = loaded_session(&["a"]);
        let effect = update(&mut s, Message::Refresh);
        assert_eq!(s.zone, Zone::EuNorth1);
        assert_eq!(s.kind, ResourceKind::Instance);
        assert!(matches!(effect, Some(Effect::FetchList { .. })));
        assert!(s.loading);
    }

    // ---- List completions ----

    #[test]
    fn list_loaded_replaces_wholesale_and_resets_cursor() {
        let mut s = loaded_session(&["a", "b", "c"]);
        s.cursor = 2;
        s.loading = true;
        update(&mut s, Message::ListLoaded(Ok(vec![item("x-1", "x")])));
        assert_eq!(s.items.len(), 1);
        assert_eq!(s.cursor, 0);
        assert!(!s.loading);
        assert!(s.error.is_none());
    }

    #[test]
    fn list_error_keeps_stale_items() {
        let mut s = loaded_session(&["a", "b"]);
        s.cursor = 1;
        s.loading = true;
        update(
            &mut s,
            Message::ListLoaded(Err(ProviderError::NetworkError {
                detail: "down".into(),
            })),
        );
        assert_eq!(s.items.len(), 2);
        assert_eq!(s.cursor, 1);
        assert!(!s.loading);
        assert!(s.error.is_some());
    }

    #[test]
    fn stale_list_completion_discarded() {
        let mut s = loaded_session(&["a"]);
        // loading 已结束，迟到的完成不得覆盖状态
        let effect = update(&mut s, Message::ListLoaded(Ok(vec![])));
        assert!(effect.is_none());
        assert_eq!(s.items.len(), 1);
    }

    // ---- Detail ----

    #[test]
    fn enter_detail_schedules_fetch_for_selected() {
        let mut s = loaded_session(&["a", "b"]);
        s.cursor = 1;
        let effect = update(&mut s, Message::EnterDetail);
        assert_eq!(
            effect,
            Some(Effect::FetchDetail {
                kind: ResourceKind::Instance,
                id: "inst-1".into(),
            })
        );
        assert_eq!(s.mode(), Mode::DetailLoading);
    }

    #[test]
    fn enter_detail_on_empty_list_is_noop() {
        let mut s = Session::new();
        let effect = update(&mut s, Message::EnterDetail);
        assert!(effect.is_none());
        assert!(s.detail.is_none());
        assert_eq!(s.mode(), Mode::Listing);
    }

    #[test]
    fn enter_detail_while_loading_is_noop() {
        let mut s = loaded_session(&["a"]);
        s.loading = true;
        assert!(update(&mut s, Message::EnterDetail).is_none());
        assert!(s.detail.is_none());
    }

    #[test]
    fn detail_loaded_shows_record() {
        let mut s = loaded_session(&["a"]);
        update(&mut s, Message::EnterDetail);
        let record = cloudscope_provider::ResourceDetail {
            id: "inst-0".into(),
            name: "a".into(),
            zone: Some(Zone::EuNorth1),
            status: ResourceStatus::Running,
            created_at: None,
            data: cloudscope_provider::DetailData::Instance {
                cpu_cores: 2,
                memory_mb: 4096,
                image: "debian-12".into(),
                private_ip: None,
                public_ip: None,
            },
        };
        update(&mut s, Message::DetailLoaded(Ok(record)));
        assert_eq!(s.mode(), Mode::DetailShown);
    }

    #[test]
    fn detail_error_abandons_drilldown() {
        let mut s = loaded_session(&["a", "b"]);
        s.cursor = 1;
        update(&mut s, Message::EnterDetail);
        update(
            &mut s,
            Message::DetailLoaded(Err(ProviderError::ResourceNotFound {
                resource_id: "inst-1".into(),
                raw_message: None,
            })),
        );
        assert!(s.detail.is_none());
        assert!(s.error.is_some());
        // 列表状态不受影响
        assert_eq!(s.items.len(), 2);
        assert_eq!(s.cursor, 1);
    }

    #[test]
    fn exit_detail_leaves_list_untouched() {
        let mut s = loaded_session(&["a", "b", "c"]);
        s.cursor = 2;
        update(&mut s, Message::EnterDetail);
        update(&mut s, Message::ExitDetail);
        assert!(s.detail.is_none());
        assert_eq!(s.cursor, 2);
        assert_eq!(s.items.len(), 3);
    }

    #[test]
    fn stale_detail_completion_discarded() {
        let mut s = loaded_session(&["a"]);
        update(&mut s, Message::EnterDetail);
        update(&mut s, Message::ExitDetail);
        // 详情已退出，迟到的失败不得污染状态
        let effect = update(
            &mut s,
            Message::DetailLoaded(Err(ProviderError::Timeout { detail: "x".into() })),
        );
        assert!(effect.is_none());
        assert!(s.detail.is_none());
        assert!(s.error.is_none());
    }

    #[test]
    fn noop_changes_nothing() {
        let mut s = loaded_session(&["a"]);
        s.cursor = 0;
        assert!(update(&mut s, Message::Noop).is_none());
        assert_eq!(s.items.len(), 1);
        assert!(!s.should_quit);
    }
}
