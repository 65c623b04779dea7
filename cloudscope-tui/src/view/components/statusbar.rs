//! 底部状态栏组件

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::model::{Mode, Session};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(session: &Session, frame: &mut Frame, area: Rect) {
    let mut spans = Vec::new();

    // 输入态的搜索直接回显查询串，其余模式显示快捷键提示
    if session.mode() == Mode::SearchComposing {
        let query = session
            .search
            .as_ref()
            .map(|s| s.query.as_str())
            .unwrap_or_default();
        spans.push(Span::styled(
            format!(" /{query}"),
            Style::default().fg(Color::Yellow),
        ));
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled("Enter", Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled("Commit", Styles::hint_desc()));
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled("Esc", Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled("Cancel", Styles::hint_desc()));
    } else {
        for (i, (key, desc)) in get_hints(session).iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
            }
            spans.push(Span::styled(*key, Styles::hint_key()));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(*desc, Styles::hint_desc()));
        }
    }

    // 已提交的搜索显示匹配位置
    if let Some(search) = &session.search {
        if !search.composing && !search.matches.is_empty() {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
            spans.push(Span::styled(
                format!("/{} [{}/{}]", search.query, search.current + 1, search.matches.len()),
                Style::default().fg(Color::Yellow),
            ));
        }
    }

    // 状态消息（例如 "No matches for 'xyz'"）
    if let Some(msg) = &session.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    // 最近一次取数失败，红色显示
    if let Some(err) = &session.error {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            err.to_string(),
            Style::default().fg(Color::LightRed),
        ));
    }

    let content = Line::from(spans);
    let paragraph = Paragraph::new(content).style(Styles::statusbar());

    frame.render_widget(paragraph, area);
}

/// 根据当前模式生成快捷键提示
fn get_hints(session: &Session) -> Vec<(&'static str, &'static str)> {
    let mut hints = Vec::new();

    match session.mode() {
        Mode::DetailLoading | Mode::DetailShown => {
            hints.push(("Esc", "Back"));
        }
        Mode::Listing | Mode::SearchComposing => {
            hints.push(("↑↓", "Select"));
            hints.push(("Tab", "Kind"));
            hints.push(("z", "Zone"));
            hints.push(("Enter", "Detail"));
            hints.push(("/", "Search"));
            if session
                .search
                .as_ref()
                .is_some_and(|s| !s.composing && !s.matches.is_empty())
            {
                hints.push(("n/N", "Match"));
            }
            hints.push(("r", "Refresh"));
        }
    }

    if session.loading {
        hints.push(("…", "Loading"));
    }

    hints.push(("q", "Quit"));

    hints
}
