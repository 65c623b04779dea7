//! 光标子消息处理

use crate::message::CursorMessage;
use crate::model::Session;

/// 处理光标移动，始终钳制在 `[0, len-1]`
///
/// 详情打开时列表光标冻结；空列表下所有移动都是空操作。
pub fn update(session: &mut Session, msg: CursorMessage) {
    if session.detail.is_some() || session.items.is_empty() {
        return;
    }
    let last = session.items.len() - 1;
    session.cursor = match msg {
        CursorMessage::Prev => session.cursor.saturating_sub(1),
        CursorMessage::Next => (session.cursor + 1).min(last),
        CursorMessage::First => 0,
        CursorMessage::Last => last,
    };
}
