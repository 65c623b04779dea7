//! Backend 层：配置等本地服务

pub mod config;
