//! 页面视图

pub mod detail;
pub mod list;
