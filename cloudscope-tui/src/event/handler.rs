//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use crate::event::keymap::DefaultKeymap;
use crate::message::{CursorMessage, Message, SearchMessage};
use crate::model::{Mode, Session};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, session: &Session) -> Message {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, session),
        // 终端窗口大小改变，自动重绘
        Event::Resize(_, _) => Message::Noop,
        _ => Message::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, session: &Session) -> Message {
    // 重要：只处理 Press 事件，忽略 Release 和 Repeat
    // 避免 Windows 终端上按键重复问题的发生
    if key.kind != KeyEventKind::Press {
        return Message::Noop;
    }

    // Ctrl+C 在任何模式下都退出
    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return Message::Quit;
    }

    match session.mode() {
        Mode::SearchComposing => handle_search_keys(key),
        Mode::DetailLoading | Mode::DetailShown => handle_detail_keys(key),
        Mode::Listing => handle_listing_keys(key),
    }
}

/// 搜索输入态：字符进查询串，Enter 提交，Esc 取消
fn handle_search_keys(key: KeyEvent) -> Message {
    match key.code {
        KeyCode::Esc => Message::Search(SearchMessage::Cancel),
        KeyCode::Enter => Message::Search(SearchMessage::Commit),
        KeyCode::Backspace => Message::Search(SearchMessage::Backspace),
        // SHIFT 产生大写字符，同样接受
        KeyCode::Char(ch) => Message::Search(SearchMessage::Input(ch)),
        _ => Message::Noop,
    }
}

/// 详情模式：只响应退出
fn handle_detail_keys(key: KeyEvent) -> Message {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Message::ExitDetail,
        _ => Message::Noop,
    }
}

/// 列表模式按键
fn handle_listing_keys(key: KeyEvent) -> Message {
    if DefaultKeymap::QUIT.matches(&key) {
        return Message::Quit;
    }
    if DefaultKeymap::SWITCH_ZONE.matches(&key) {
        return Message::SwitchZone;
    }
    if DefaultKeymap::REFRESH.matches(&key) {
        return Message::Refresh;
    }
    if DefaultKeymap::SEARCH.matches(&key) {
        return Message::Search(SearchMessage::Enter);
    }

    match key.code {
        // Tab / Shift+Tab: 切换资源类型
        KeyCode::Tab => Message::NextKind,
        KeyCode::BackTab => Message::PrevKind,

        // ↑ 或 k: 上一项
        KeyCode::Up | KeyCode::Char('k') => Message::Cursor(CursorMessage::Prev),
        // ↓ 或 j: 下一项
        KeyCode::Down | KeyCode::Char('j') => Message::Cursor(CursorMessage::Next),
        // Home 或 g: 跳到第一项
        KeyCode::Home | KeyCode::Char('g') => Message::Cursor(CursorMessage::First),
        // End 或 G: 跳到最后一项
        KeyCode::End | KeyCode::Char('G') => Message::Cursor(CursorMessage::Last),

        // Enter: 进入详情
        KeyCode::Enter => Message::EnterDetail,

        // n / N: 匹配间跳转
        KeyCode::Char('n') => Message::Search(SearchMessage::NextMatch),
        KeyCode::Char('N') => Message::Search(SearchMessage::PrevMatch),

        // Esc: 清除已提交的搜索
        KeyCode::Esc => Message::Search(SearchMessage::Cancel),

        _ => Message::Noop,
    }
}
