//! 搜索子消息处理

use crate::message::SearchMessage;
use crate::model::{Session, SearchState};
use crate::search::perform_search;

/// 处理搜索消息
///
/// 输入态只改查询串；提交时运行一次搜索引擎并固定匹配集；
/// 匹配间跳转在固定的匹配集上双向循环。
pub fn update(session: &mut Session, msg: SearchMessage) {
    match msg {
        SearchMessage::Enter => {
            if session.is_busy() {
                return;
            }
            session.search = Some(SearchState::composing_from(session.cursor));
        }

        SearchMessage::Input(ch) => {
            if let Some(search) = session.search.as_mut() {
                if search.composing {
                    search.query.push(ch);
                }
            }
        }

        SearchMessage::Backspace => {
            if let Some(search) = session.search.as_mut() {
                if search.composing {
                    search.query.pop();
                }
            }
        }

        SearchMessage::Commit => {
            let Some(search) = session.search.as_mut() else {
                return;
            };
            if !search.composing {
                return;
            }
            // 空查询的提交等价于取消
            if search.query.is_empty() {
                let prior = search.prior_cursor;
                session.search = None;
                session.cursor = prior;
                return;
            }
            search.matches = perform_search(&session.items, &search.query);
            search.composing = false;
            search.current = 0;
            match search.matches.first() {
                Some(&first) => {
                    session.cursor = first;
                    session.clear_status();
                }
                None => {
                    // 无匹配：光标留在原处，搜索保持提交态以便提示
                    let msg = format!("No matches for '{}'", search.query);
                    session.set_status(msg);
                }
            }
        }

        SearchMessage::Cancel => {
            if let Some(search) = session.search.take() {
                if search.composing {
                    // 输入途中取消：恢复进入搜索前的光标
                    session.cursor = search.prior_cursor;
                }
                session.clear_status();
            }
        }

        SearchMessage::NextMatch => jump(session, 1),
        SearchMessage::PrevMatch => jump(session, -1),
    }
}

/// 在已提交的匹配集上循环跳转
fn jump(session: &mut Session, direction: isize) {
    let Some(search) = session.search.as_mut() else {
        return;
    };
    if search.composing || search.matches.is_empty() {
        return;
    }
    let len = search.matches.len() as isize;
    let current = search.current as isize;
    search.current = ((current + direction).rem_euclid(len)) as usize;
    session.cursor = search.matches[search.current];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Mode;
    use cloudscope_provider::{ResourceKind, ResourceStatus, ResourceSummary, Zone};

    fn item(id: &str, name: &str) -> ResourceSummary {
        ResourceSummary {
            id: id.to_string(),
            name: name.to_string(),
            kind: ResourceKind::Instance,
            zone: Some(Zone::EuNorth1),
            status: ResourceStatus::Running,
        }
    }

    fn web_db_session() -> Session {
        let mut s = Session::new();
        s.items = vec![
            item("inst-1", "web-server-1"),
            item("inst-2", "db-server-1"),
            item("inst-3", "web-server-2"),
        ];
        s
    }

    fn type_query(s: &mut Session, query: &str) {
        for ch in query.chars() {
            update(s, SearchMessage::Input(ch));
        }
    }

    #[test]
    fn commit_web_jumps_to_first_match() {
        let mut s = web_db_session();
        s.cursor = 1;
        update(&mut s, SearchMessage::Enter);
        assert_eq!(s.mode(), Mode::SearchComposing);
        type_query(&mut s, "web");
        update(&mut s, SearchMessage::Commit);

        assert!(s.search.is_some(), "search state missing after commit");
        let Some(search) = s.search.as_ref() else {
            return;
        };
        assert_eq!(search.matches, vec![0, 2]);
        assert_eq!(s.cursor, 0);
        assert_eq!(s.mode(), Mode::Listing);
    }

    #[test]
    fn next_match_wraps_around() {
        let mut s = web_db_session();
        update(&mut s, SearchMessage::Enter);
        type_query(&mut s, "web");
        update(&mut s, SearchMessage::Commit);

        // matches = [0, 2]：两次 next 回绕到 0
        update(&mut s, SearchMessage::NextMatch);
        assert_eq!(s.cursor, 2);
        update(&mut s, SearchMessage::NextMatch);
        assert_eq!(s.cursor, 0);
    }

    #[test]
    fn prev_match_wraps_backward() {
        let mut s = web_db_session();
        update(&mut s, SearchMessage::Enter);
        type_query(&mut s, "web");
        update(&mut s, SearchMessage::Commit);

        update(&mut s, SearchMessage::PrevMatch);
        assert_eq!(s.cursor, 2);
        update(&mut s, SearchMessage::PrevMatch);
        assert_eq!(s.cursor, 0);
    }

    #[test]
    fn backspace_edits_query() {
        let mut s = web_db_session();
        update(&mut s, SearchMessage::Enter);
        type_query(&mut s, "wec");
        update(&mut s, SearchMessage::Backspace);
        update(&mut s, SearchMessage::Input('b'));
        update(&mut s, SearchMessage::Commit);

        assert!(s.search.is_some(), "search state missing after commit");
        let Some(search) = s.search.as_ref() else {
            return;
        };
        assert_eq!(search.query, "web");
        assert_eq!(search.matches, vec![0, 2]);
    }

    #[test]
    fn cancel_while_composing_restores_cursor() {
        let mut s = web_db_session();
        s.cursor = 2;
        update(&mut s, SearchMessage::Enter);
        type_query(&mut s, "db");
        update(&mut s, SearchMessage::Cancel);
        assert!(s.search.is_none());
        assert_eq!(s.cursor, 2);
    }

    #[test]
    fn cancel_after_commit_keeps_cursor() {
        let mut s = web_db_session();
        update(&mut s, SearchMessage::Enter);
        type_query(&mut s, "web");
        update(&mut s, SearchMessage::Commit);
        update(&mut s, SearchMessage::NextMatch);
        assert_eq!(s.cursor, 2);

        update(&mut s, SearchMessage::Cancel);
        assert!(s.search.is_none());
        // 已提交态的取消只清除搜索，不动光标
        assert_eq!(s.cursor, 2);
    }

    #[test]
    fn commit_without_matches_keeps_cursor() {
        let mut s = web_db_session();
        s.cursor = 1;
        update(&mut s, SearchMessage::Enter);
        type_query(&mut s, "postgres");
        update(&mut s, SearchMessage::Commit);
        assert_eq!(s.cursor, 1);
        assert!(s.status_message.is_some());

        // 无匹配时跳转是空操作
        update(&mut s, SearchMessage::NextMatch);
        update(&mut s, SearchMessage::PrevMatch);
        assert_eq!(s.cursor, 1);
    }

    #[test]
    fn commit_empty_query_cancels() {
        let mut s = web_db_session();
        s.cursor = 1;
        update(&mut s, SearchMessage::Enter);
        update(&mut s, SearchMessage::Commit);
        assert!(s.search.is_none());
        assert_eq!(s.cursor, 1);
    }

    #[test]
    fn enter_while_loading_is_noop() {
        let mut s = web_db_session();
        s.loading = true;
        update(&mut s, SearchMessage::Enter);
        assert!(s.search.is_none());
    }

    #[test]
    fn input_ignored_when_not_composing() {
        let mut s = web_db_session();
        update(&mut s, SearchMessage::Enter);
        type_query(&mut s, "web");
        update(&mut s, SearchMessage::Commit);

        // 提交后字符输入不再进入查询串
        update(&mut s, SearchMessage::Input('x'));
        assert!(s.search.is_some(), "search state missing");
        let Some(search) = s.search.as_ref() else {
            return;
        };
        assert_eq!(search.query, "web");
    }
}
