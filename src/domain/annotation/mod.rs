//! Annotation Context - 仿生阅读标注
//!
//! 职责:
//! - 文字类别判断（CJK / 拉丁）
//! - 段落切分
//! - 分词与片段组装
//! - 加粗长度策略

mod bold_policy;
mod engine;
mod entities;
mod errors;
mod paragraph;
mod script;
mod segmenter;
mod tokenizer;
mod value_objects;

pub use bold_policy::{cjk_bold_len, latin_bold_len};
pub use engine::{annotate, CJK_LOCALE};
pub use entities::{Paragraph, Segment};
pub use errors::AnnotationError;
pub use paragraph::split_paragraphs;
pub use script::{classify_paragraph, is_cjk, is_word_char};
pub use segmenter::{segment_chars, WordSegmenter};
pub use tokenizer::{split_token, tokenize_cjk, tokenize_latin};
pub use value_objects::{ScriptMode, Strength};
