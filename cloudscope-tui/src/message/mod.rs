//! Message 层：事件消息定义
//!
//! 作为 Event —→ Update 之间的桥梁：所有用户操作和异步完成事件都先
//! 翻译成 Message，由 Update 层统一消费。Update 是唯一修改 Session
//! 的地方，它返回的 [`Effect`] 描述需要派发的异步取数任务。

mod app;
mod cursor;
mod search;

pub use app::{Effect, Message};
pub use cursor::CursorMessage;
pub use search::SearchMessage;
