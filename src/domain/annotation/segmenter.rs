//! 分词能力接口
//!
//! 引擎只依赖此接口；具体实现在 infrastructure/adapters 层注入。

/// 按词粒度切分文本
///
/// 实现应当无状态或只读，可在多个调用方之间共享。返回的片段按原文顺序排列，
/// 拼接后应与输入完全一致；否则引擎会退回到逐字切分。
pub trait WordSegmenter: Send + Sync {
    fn segment(&self, text: &str, locale: &str) -> Vec<String>;
}

/// 逐字切分（无分词器时的兜底行为）
pub fn segment_chars(text: &str) -> Vec<String> {
    text.chars().map(String::from).collect()
}
