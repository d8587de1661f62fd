//! Char Segmenter - 逐字切分

use crate::application::ports::WordSegmenterPort;
use crate::domain::annotation::segment_chars;

/// 逐字切分的分词器
///
/// 与不注入分词器时引擎的兜底行为一致，用于需要显式注入的场景
#[derive(Debug, Clone, Copy, Default)]
pub struct CharSegmenter;

impl WordSegmenterPort for CharSegmenter {
    fn segment(&self, text: &str, _locale: &str) -> Vec<String> {
        segment_chars(text)
    }
}
