//! 内部工具模块

pub mod log_sanitizer;
