//! Domain Layer - 领域层
//!
//! Annotation Context: 仿生阅读标注引擎

pub mod annotation;

pub use annotation::{annotate, AnnotationError, Paragraph, ScriptMode, Segment, Strength, WordSegmenter};
