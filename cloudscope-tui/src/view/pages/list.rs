//! 资源列表页面视图

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, List, ListItem, ListState, Paragraph},
};

use unicode_width::UnicodeWidthStr;

use crate::model::Session;
use crate::view::theme::{Styles, status_color};

/// 渲染资源列表页面
pub fn render(session: &Session, frame: &mut Frame, area: Rect) {
    if session.loading && session.items.is_empty() {
        render_loading(frame, area);
    } else if session.items.is_empty() {
        render_empty(session, frame, area);
    } else {
        render_list(session, frame, area);
    }
}

/// 渲染加载状态（还没有任何快照可显示时）
fn render_loading(frame: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(""),
        Line::styled("  Loading…", Style::default().fg(Color::Gray)),
    ];
    frame.render_widget(Paragraph::new(content), area);
}

/// 渲染空状态
fn render_empty(session: &Session, frame: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(""),
        Line::styled(
            format!("  No {} here", session.kind.label().to_lowercase()),
            Style::default().fg(Color::Gray),
        ),
        Line::from(""),
        Line::styled(
            "  z: switch zone │ Tab: switch kind │ r: refresh",
            Style::default().fg(Color::DarkGray),
        ),
    ];
    frame.render_widget(Paragraph::new(content), area);
}

/// 渲染资源列表
fn render_list(session: &Session, frame: &mut Frame, area: Rect) {
    // id 列宽对齐到最宽的 id，按显示宽度算
    let id_width = session
        .items
        .iter()
        .map(|item| item.id.width())
        .max()
        .unwrap_or(0);

    let match_set: &[usize] = session
        .search
        .as_ref()
        .filter(|s| !s.composing)
        .map(|s| s.matches.as_slice())
        .unwrap_or(&[]);

    let items: Vec<ListItem> = session
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let is_selected = i == session.cursor;
            let is_match = match_set.binary_search(&i).is_ok();

            let row_style = if is_selected {
                Styles::selected()
            } else if is_match {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::White)
            };

            let status_style = if is_selected {
                Styles::selected().fg(status_color(item.status))
            } else {
                Style::default().fg(status_color(item.status))
            };

            let dim_style = if is_selected {
                Styles::selected()
            } else {
                Style::default().fg(Color::DarkGray)
            };

            let pad = " ".repeat(id_width.saturating_sub(item.id.width()));

            let line = Line::from(vec![
                Span::raw("  "),
                Span::styled("●", status_style),
                Span::raw(" "),
                Span::styled(format!("{}{}", item.id, pad), dim_style),
                Span::raw("  "),
                Span::styled(item.name.clone(), row_style),
                Span::styled(format!("  [{}]", item.status), dim_style),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(Block::default())
        .highlight_style(Style::default());

    let mut state = ListState::default();
    state.select(Some(session.cursor));

    frame.render_stateful_widget(list, area, &mut state);
}
