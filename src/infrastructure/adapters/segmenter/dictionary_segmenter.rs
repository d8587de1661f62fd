//! Dictionary Word Segmenter - 基于词典的中文分词
//!
//! 中文（locale 以 `zh` 开头）交给 `jieba-rs` 按词典 + HMM 切词，
//! 其余语言退回 UAX #29 词边界。两种切分都覆盖全部输入（包括空白与标点）。

use jieba_rs::Jieba;
use unicode_segmentation::UnicodeSegmentation;

use crate::application::ports::WordSegmenterPort;

/// 词典分词器
///
/// 构造时加载内置词典，成本较高；启动时创建一次，通过 `Arc` 共享
pub struct DictionaryWordSegmenter {
    jieba: Jieba,
}

impl DictionaryWordSegmenter {
    pub fn new() -> Self {
        let jieba = Jieba::new();
        tracing::info!("Jieba dictionary loaded");
        Self { jieba }
    }
}

impl Default for DictionaryWordSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl WordSegmenterPort for DictionaryWordSegmenter {
    fn segment(&self, text: &str, locale: &str) -> Vec<String> {
        if locale.starts_with("zh") {
            self.jieba
                .cut(text, true)
                .into_iter()
                .map(str::to_string)
                .collect()
        } else {
            text.split_word_bounds().map(str::to_string).collect()
        }
    }
}
