use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// 崩溃上报服务配置
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// SQLite 数据库文件路径
    #[serde(default = "default_database_path")]
    pub database_path: String,

    /// 请求体大小上限（字节），超出时表单参数视为缺失
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,

    /// 是否启用 CORS（允许浏览器/Electron 客户端跨域上报）
    ///
    /// 启用后 CORS 预检 OPTIONS 请求由 CORS 层应答，仅放行 GET/POST
    #[serde(default = "default_cors_enabled")]
    pub cors_enabled: bool,

    /// 配置文件路径（运行时元数据）
    #[serde(skip)]
    config_path: Option<PathBuf>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_database_path() -> String {
    "crash_reports.db".to_string()
}

fn default_max_body_bytes() -> usize {
    10 * 1024 * 1024
}

fn default_cors_enabled() -> bool {
    false
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            database_path: default_database_path(),
            max_body_bytes: default_max_body_bytes(),
            cors_enabled: default_cors_enabled(),
            config_path: None,
        }
    }
}

impl Config {
    /// 获取默认配置文件路径
    pub fn default_config_path() -> &'static str {
        "config.json"
    }

    /// 监听地址
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// 从文件加载配置
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            // 配置文件不存在，返回默认配置
            let mut config = Self::default();
            config.config_path = Some(path.to_path_buf());
            return Ok(config);
        }

        let content = fs::read_to_string(path)?;
        let mut config: Config = serde_json::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// 获取配置文件路径（如果有）
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }
}
