//!
//! app.rs
//! 应用主循环
//!
//!
//! 启动时会话初始化为：
//!
//! Session {
//!
//!     should_quit: false,                 // 决定应用是否应该退出
//!     zone: eu-north-1,                   // 第一个 zone
//!     kind: Instance,                     // 第一个资源类型
//!     items: [], loading: false,          // 进入循环前先派发一次列表取数
//!     cursor: 0, detail: None, search: None,
//!
//! }
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）：
//! loop {
//!
//!     terminal.draw(|f| view::render(&session, f))   // 渲染 UI
//!     if session.should_quit { break }               // 检查是否应该退出
//!     while let Ok(msg) = rx.try_recv() { ... }      // 先排空后台任务的完成消息
//!     if let Some(event) = poll_event() {            // 轮询输入，在此等待 100ms
//!         let msg = handle_event(event, &session);       // 原始事件翻译成消息
//!         if let Some(effect) = update(&mut session, msg) {
//!             dispatch(effect, &provider, &tx)           // 取数进后台任务
//!         }
//!     }
//! }

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc;

use cloudscope_provider::ResourceProvider;

use crate::dispatch::dispatch;
use crate::event;
use crate::message::Message;
use crate::model::Session;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub async fn run(
    terminal: &mut Term,
    session: &mut Session,
    provider: Arc<dyn ResourceProvider>,
) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<Message>();

    // 启动即拉取初始列表
    if let Some(effect) = update::update(session, Message::Refresh) {
        dispatch(effect, &provider, &tx);
    }

    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(session, frame);
        })?;

        // 2. 检查是否应该退出
        if session.should_quit {
            break;
        }

        // 3. 排空后台任务投递的完成消息
        while let Ok(msg) = rx.try_recv() {
            if let Some(effect) = update::update(session, msg) {
                dispatch(effect, &provider, &tx);
            }
        }

        // 4. 轮询事件（100ms 超时），翻译并更新状态
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            let msg = event::handle_event(event, session);
            if let Some(effect) = update::update(session, msg) {
                dispatch(effect, &provider, &tx);
            }
        }
    }

    Ok(())
}
