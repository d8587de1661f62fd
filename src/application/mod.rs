//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（WordSegmenter）
//! - queries: 标注查询及处理器
//! - error: 应用层错误定义

pub mod error;
pub mod ports;
pub mod queries;

pub use error::ApplicationError;

pub use ports::{SegmenterKind, SharedWordSegmenter, WordSegmenterPort};

pub use queries::{
    AnnotateText,
    GetReaderSettings,
    // Handlers
    handlers::{AnnotateTextHandler, AnnotationResponse, GetReaderSettingsHandler, ReaderSettings},
};
