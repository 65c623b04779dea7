//! Event 层：输入处理
//!
//! 轮询 crossterm 事件并按当前模式翻译成 Message。

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
pub use keymap::{DefaultKeymap, KeyBinding};
