//! Unicode Word Segmenter - UAX #29 词边界
//!
//! 基于 `unicode-segmentation` 的 `split_word_bounds`。切分结果覆盖全部输入
//! （包括空白与标点），拉丁词整体保留，表意文字逐字成词。

use unicode_segmentation::UnicodeSegmentation;

use crate::application::ports::WordSegmenterPort;

/// UAX #29 词边界分词器
///
/// 无状态，构造成本为零；locale 参数不影响切分规则
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeWordSegmenter;

impl UnicodeWordSegmenter {
    pub fn new() -> Self {
        Self
    }
}

impl WordSegmenterPort for UnicodeWordSegmenter {
    fn segment(&self, text: &str, _locale: &str) -> Vec<String> {
        text.split_word_bounds().map(str::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latin_words_kept_whole() {
        let pieces = UnicodeWordSegmenter::new().segment("Rust 是", "zh");
        assert_eq!(pieces, vec!["Rust", " ", "是"]);
    }

    #[test]
    fn test_covers_input() {
        let text = "你好，世界！Hello, world. 2024年";
        let pieces = UnicodeWordSegmenter::new().segment(text, "zh");
        assert_eq!(pieces.concat(), text);
        assert!(pieces.iter().all(|p| !p.is_empty()));
    }

    #[test]
    fn test_punctuation_is_separate() {
        let pieces = UnicodeWordSegmenter::new().segment("世界。", "zh");
        assert_eq!(pieces.last().map(String::as_str), Some("。"));
    }
}
