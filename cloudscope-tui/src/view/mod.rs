//! View 层：UI 渲染
//!
//! 只读取 Session，不做任何状态修改。

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
