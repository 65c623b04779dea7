//! 顶部标题栏组件
//!
//! 应用名 + 当前 zone + 资源类型标签页，当前类型高亮。

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use cloudscope_provider::ResourceKind;

use crate::model::Session;
use crate::view::theme::colors;

/// 渲染标题栏
pub fn render(session: &Session, frame: &mut Frame, area: Rect) {
    let c = colors();
    let base = Style::default().bg(c.highlight).fg(c.selected_fg);

    let mut spans = vec![
        Span::styled(" Cloudscope ", base.add_modifier(Modifier::BOLD)),
        Span::styled(format!("[{}] ", session.zone), base),
    ];

    // 类型标签页
    for kind in ResourceKind::ALL {
        let style = if kind == session.kind {
            base.add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            base
        };
        spans.push(Span::styled(format!(" {} ", kind.label()), style));
    }

    let header = Paragraph::new(Line::from(spans)).style(base);
    frame.render_widget(header, area);
}
