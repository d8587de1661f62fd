//! 文字类别判断

use super::ScriptMode;

/// CJK 统一表意文字（基本区 U+4E00..=U+9FA5，不含扩展区与假名、谚文）
#[inline]
pub fn is_cjk(ch: char) -> bool {
    ('\u{4E00}'..='\u{9FA5}').contains(&ch)
}

/// 拉丁模式下的词字符：ASCII 字母数字、下划线、带重音拉丁字母、CJK、撇号、连字符
#[inline]
pub fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric()
        || ch == '_'
        || ('\u{00C0}'..='\u{024F}').contains(&ch)
        || is_cjk(ch)
        || ch == '\''
        || ch == '-'
}

/// 含至少一个 CJK 字符的段落走 CJK 模式，否则走拉丁模式
pub fn classify_paragraph(paragraph: &str) -> ScriptMode {
    if paragraph.chars().any(is_cjk) {
        ScriptMode::Cjk
    } else {
        ScriptMode::Latin
    }
}
