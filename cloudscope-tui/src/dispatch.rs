//! 副作用派发
//!
//! Update 层返回的 [`Effect`] 在这里变成 tokio 任务。任务完成后把
//! 结果包成完成消息投回 mpsc 通道，由主循环在下一轮喂给 Update 层。
//! 发送失败只能发生在主循环已退出之后，静默忽略。

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;

use cloudscope_provider::ResourceProvider;

use crate::message::{Effect, Message};

/// 派发一个副作用为后台取数任务
pub fn dispatch(
    effect: Effect,
    provider: &Arc<dyn ResourceProvider>,
    tx: &UnboundedSender<Message>,
) {
    let provider = Arc::clone(provider);
    let tx = tx.clone();

    match effect {
        Effect::FetchList { kind, zone } => {
            tokio::spawn(async move {
                let result = provider.fetch_list(kind, zone).await;
                let _ = tx.send(Message::ListLoaded(result));
            });
        }
        Effect::FetchDetail { kind, id } => {
            tokio::spawn(async move {
                let result = provider.fetch_detail(kind, &id).await;
                let _ = tx.send(Message::DetailLoaded(result));
            });
        }
    }
}
