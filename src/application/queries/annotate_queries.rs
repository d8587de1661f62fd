//! Annotation Queries

/// 标注文本查询
///
/// `enabled` / `strength` 缺省时使用配置的默认值
#[derive(Debug, Clone)]
pub struct AnnotateText {
    pub text: String,
    pub enabled: Option<bool>,
    pub strength: Option<i64>,
}

/// 获取阅读默认设置查询
#[derive(Debug, Clone)]
pub struct GetReaderSettings;
