//! 配置加载
//!
//! 配置来自两层，环境变量覆盖配置文件：
//!
//! 1. `$CONFIG_DIR/cloudscope/config.json`（Linux 下一般是
//!    `~/.config/cloudscope/config.json`）
//! 2. 环境变量 `CLOUDSCOPE_API_TOKEN`、`CLOUDSCOPE_PROJECT_ID`、
//!    `CLOUDSCOPE_BASE_URL`
//!
//! token 和 project id 缺一不可；缺失时启动直接失败并给出指引。

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use cloudscope_provider::Credentials;

pub const ENV_API_TOKEN: &str = "CLOUDSCOPE_API_TOKEN";
pub const ENV_PROJECT_ID: &str = "CLOUDSCOPE_PROJECT_ID";
pub const ENV_BASE_URL: &str = "CLOUDSCOPE_BASE_URL";

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config file {path} is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("missing {what}: set it in the config file or via the {env} environment variable")]
    Missing {
        what: &'static str,
        env: &'static str,
    },
}

/// 配置文件结构（所有字段可缺省）
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
struct ConfigFile {
    api_token: Option<String>,
    project_id: Option<String>,
    base_url: Option<String>,
}

/// 环境变量覆盖层
#[derive(Debug, Default)]
struct EnvOverrides {
    api_token: Option<String>,
    project_id: Option<String>,
    base_url: Option<String>,
}

impl EnvOverrides {
    fn from_process() -> Self {
        fn non_empty(key: &str) -> Option<String> {
            std::env::var(key).ok().filter(|v| !v.is_empty())
        }
        Self {
            api_token: non_empty(ENV_API_TOKEN),
            project_id: non_empty(ENV_PROJECT_ID),
            base_url: non_empty(ENV_BASE_URL),
        }
    }
}

/// 应用配置
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub credentials: Credentials,
    /// API 地址覆盖，`None` 时用 provider crate 的默认地址
    pub base_url: Option<String>,
}

/// 配置文件路径
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("cloudscope").join("config.json"))
}

/// 加载配置：读文件（可缺失）、套环境变量、校验必填项
pub fn load() -> Result<AppConfig, ConfigError> {
    let file = match config_path() {
        Some(path) if path.exists() => {
            let raw = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
                path: path.clone(),
                source,
            })?;
            serde_json::from_str(&raw).map_err(|source| ConfigError::Parse { path, source })?
        }
        _ => ConfigFile::default(),
    };
    merge(file, EnvOverrides::from_process())
}

fn merge(file: ConfigFile, env: EnvOverrides) -> Result<AppConfig, ConfigError> {
    let api_token = env
        .api_token
        .or(file.api_token)
        .ok_or(ConfigError::Missing {
            what: "API token",
            env: ENV_API_TOKEN,
        })?;
    let project_id = env
        .project_id
        .or(file.project_id)
        .ok_or(ConfigError::Missing {
            what: "project id",
            env: ENV_PROJECT_ID,
        })?;

    Ok(AppConfig {
        credentials: Credentials {
            api_token,
            project_id,
        },
        base_url: env.base_url.or(file.base_url),
    })
}
