//! Segmenter Adapter - 分词器实现

mod char_segmenter;
mod dictionary_segmenter;
mod unicode_segmenter;

use std::sync::Arc;

use crate::application::ports::{SegmenterKind, SharedWordSegmenter};

pub use char_segmenter::CharSegmenter;
pub use dictionary_segmenter::DictionaryWordSegmenter;
pub use unicode_segmenter::UnicodeWordSegmenter;

/// 按配置创建分词器
pub fn create_segmenter(kind: SegmenterKind) -> SharedWordSegmenter {
    match kind {
        SegmenterKind::Dictionary => Some(Arc::new(DictionaryWordSegmenter::new())),
        SegmenterKind::Unicode => Some(Arc::new(UnicodeWordSegmenter::new())),
        SegmenterKind::Char => Some(Arc::new(CharSegmenter)),
        SegmenterKind::None => None,
    }
}
