//! 段落切分

/// 按一个或多个连续换行符切分文本
///
/// 空段落被丢弃；不做 trim，仅含空白的段落、行尾的 `\r` 原样保留。
pub fn split_paragraphs(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n').filter(|s| !s.is_empty())
}
