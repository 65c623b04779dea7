//! 主布局渲染

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::{Block, Borders},
};

use crate::model::Session;

use super::components;
use super::pages;
use super::theme::{Styles, colors};

/// 渲染主布局
pub fn render(session: &Session, frame: &mut Frame) {
    let size = frame.area();

    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    let header_area = main_layout[0];
    let content_area = main_layout[1];
    let status_area = main_layout[2];

    // 渲染标题栏（zone + 资源类型标签页）
    components::header::render(session, frame, header_area);

    // 内容区边框，标题标明当前类型和作用域
    let c = colors();
    let block = Block::default()
        .title(format!(" {} ", content_title(session)))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border));

    let inner_area = block.inner(content_area);
    frame.render_widget(block, content_area);

    // 详情打开时渲染详情页，否则渲染列表页
    if session.detail.is_some() {
        pages::detail::render(session, frame, inner_area);
    } else {
        pages::list::render(session, frame, inner_area);
    }

    // 渲染状态栏
    components::statusbar::render(session, frame, status_area);
}

/// 内容区标题：`Instances @ eu-north-1` 或全局类型的 `Buckets (global)`
fn content_title(session: &Session) -> String {
    if session.kind.is_global() {
        format!("{} (global)", session.kind.label())
    } else {
        format!("{} @ {}", session.kind.label(), session.zone)
    }
}
