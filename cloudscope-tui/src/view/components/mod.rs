//! UI 组件

pub mod header;
pub mod statusbar;
