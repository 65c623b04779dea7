//! Cloudscope TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 会话状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Dispatch**: 副作用派发 (`dispatch.rs`)
//! - **Backend**: 配置等本地服务 (`backend/`)
//!
//! 取数全部走 `cloudscope-provider`，以 tokio 任务在后台执行，
//! 结果经 mpsc 通道回到主循环。
//!
//! 启动顺序：日志 → 配置 → 凭证验证 → 终端初始化 → 主循环。
//! 配置缺失或凭证无效时在进入备用屏幕前失败，退出码非零。

mod app;
mod backend;
mod dispatch;
mod event;
mod message;
mod model;
mod search;
mod update;
mod util;
mod view;

use std::sync::Arc;

use anyhow::{Context, Result};

use cloudscope_provider::{CloudCatalog, ResourceProvider};
use util::{init_terminal, install_panic_hook, restore_terminal};

#[tokio::main]
async fn main() -> Result<()> {
    // 1. 日志写文件，保持备用屏幕干净
    init_logging();

    // 2. 加载配置（文件 + 环境变量）
    let config = backend::config::load().context("failed to load configuration")?;
    log::info!(
        "endpoint: {}",
        config
            .base_url
            .as_deref()
            .unwrap_or(cloudscope_provider::DEFAULT_BASE_URL)
    );

    // 3. 创建目录并验证凭证，坏 token 不进界面
    let catalog = CloudCatalog::new(config.credentials, config.base_url);
    catalog
        .validate_credentials()
        .await
        .context("credential validation failed")?;
    let provider: Arc<dyn ResourceProvider> = Arc::new(catalog);

    // 4. 初始化终端
    install_panic_hook();
    let mut terminal = init_terminal()?;

    // 5. 运行主循环
    let mut session = model::Session::new();
    let result = app::run(&mut terminal, &mut session, provider).await;

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    result
}

/// 初始化日志：`RUST_LOG` 控制级别，输出到配置目录下的日志文件。
/// 日志目录不可用时直接跳过，不能因为日志拦住应用。
fn init_logging() {
    let Some(dir) = dirs::config_dir() else {
        return;
    };
    let log_dir = dir.join("cloudscope");
    if std::fs::create_dir_all(&log_dir).is_err() {
        return;
    }
    let Ok(file) = std::fs::File::create(log_dir.join("cloudscope.log")) else {
        return;
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
}
