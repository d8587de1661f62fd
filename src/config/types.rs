//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

use crate::application::SegmenterKind;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 阅读默认设置
    #[serde(default)]
    pub reader: ReaderConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,

    /// 请求体大小上限（字节）
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5070
}

fn default_max_body_bytes() -> usize {
    2 * 1024 * 1024 // 2 MB
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 阅读默认设置
///
/// 请求里未显式给出 enabled / strength 时使用
#[derive(Debug, Clone, Deserialize)]
pub struct ReaderConfig {
    /// 是否默认开启加粗
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// 默认加粗强度（1-3）
    #[serde(default = "default_strength")]
    pub strength: i64,

    /// 分词器: dictionary / unicode / char / none
    #[serde(default)]
    pub segmenter: SegmenterKind,

    /// 单次请求最大字符数
    #[serde(default = "default_max_text_chars")]
    pub max_text_chars: usize,
}

fn default_enabled() -> bool {
    true
}

fn default_strength() -> i64 {
    2
}

fn default_max_text_chars() -> usize {
    100_000
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            strength: default_strength(),
            segmenter: SegmenterKind::default(),
            max_text_chars: default_max_text_chars(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
