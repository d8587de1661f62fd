//! Bionify - 仿生阅读标注服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Annotation Context: 文字类别判断、段落切分、分词、加粗长度策略
//!
//! 应用层 (application/):
//! - Ports: 端口定义（WordSegmenter）
//! - Queries: 标注查询、默认设置查询
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Adapters: 词典分词器、Unicode 词边界分词器、逐字分词器

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
pub use domain::annotate;
