//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod word_segmenter;

pub use word_segmenter::{SegmenterKind, SharedWordSegmenter, WordSegmenterPort};
