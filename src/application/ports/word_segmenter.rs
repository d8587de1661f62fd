//! Word Segmenter Port - 分词能力抽象
//!
//! 接口定义在领域层（引擎直接依赖），这里给出应用层共享的句柄类型与实现选择，
//! 具体实现在 infrastructure/adapters 层

use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub use crate::domain::annotation::WordSegmenter as WordSegmenterPort;

/// 共享的只读分词器；None 表示不注入，CJK 段落逐字切分
pub type SharedWordSegmenter = Option<Arc<dyn WordSegmenterPort>>;

/// 分词器实现选择
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmenterKind {
    /// 词典分词（中文按词切分）
    #[default]
    Dictionary,
    /// Unicode 词边界（UAX #29，表意文字逐字成词）
    Unicode,
    /// 逐字切分
    Char,
    /// 不注入分词器，由引擎兜底
    None,
}

impl SegmenterKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SegmenterKind::Dictionary => "dictionary",
            SegmenterKind::Unicode => "unicode",
            SegmenterKind::Char => "char",
            SegmenterKind::None => "none",
        }
    }
}

impl std::fmt::Display for SegmenterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
