//! Annotation Query Handlers

use crate::application::error::ApplicationError;
use crate::application::ports::{SegmenterKind, SharedWordSegmenter};
use crate::application::queries::{AnnotateText, GetReaderSettings};
use crate::domain::annotation::{annotate, Paragraph, Strength};

// ============================================================================
// Settings
// ============================================================================

/// 阅读默认设置（启动时从配置构造，之后只读）
#[derive(Debug, Clone)]
pub struct ReaderSettings {
    pub enabled: bool,
    pub strength: Strength,
    /// 当前注入的分词器
    pub segmenter: SegmenterKind,
    /// 单次请求允许的最大字符数
    pub max_text_chars: usize,
}

impl Default for ReaderSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            strength: Strength::default(),
            segmenter: SegmenterKind::default(),
            max_text_chars: 100_000,
        }
    }
}

// ============================================================================
// Response DTOs
// ============================================================================

/// 标注结果
#[derive(Debug, Clone)]
pub struct AnnotationResponse {
    pub enabled: bool,
    pub strength: Strength,
    pub paragraphs: Vec<Paragraph>,
}

// ============================================================================
// Handlers
// ============================================================================

/// AnnotateText Handler
pub struct AnnotateTextHandler {
    segmenter: SharedWordSegmenter,
    settings: ReaderSettings,
}

impl AnnotateTextHandler {
    pub fn new(segmenter: SharedWordSegmenter, settings: ReaderSettings) -> Self {
        Self {
            segmenter,
            settings,
        }
    }

    pub fn handle(&self, query: AnnotateText) -> Result<AnnotationResponse, ApplicationError> {
        let strength = match query.strength {
            Some(value) => Strength::new(value)?,
            None => self.settings.strength,
        };
        let enabled = query.enabled.unwrap_or(self.settings.enabled);

        let char_count = query.text.chars().count();
        if char_count > self.settings.max_text_chars {
            return Err(ApplicationError::validation(format!(
                "Text too long: {} chars (max {})",
                char_count, self.settings.max_text_chars
            )));
        }

        let paragraphs = annotate(
            &query.text,
            enabled,
            strength,
            self.segmenter.as_deref(),
        );

        tracing::debug!(
            chars = char_count,
            paragraphs = paragraphs.len(),
            enabled,
            strength = strength.value(),
            "Text annotated"
        );

        Ok(AnnotationResponse {
            enabled,
            strength,
            paragraphs,
        })
    }
}

/// GetReaderSettings Handler
pub struct GetReaderSettingsHandler {
    settings: ReaderSettings,
}

impl GetReaderSettingsHandler {
    pub fn new(settings: ReaderSettings) -> Self {
        Self { settings }
    }

    pub fn handle(&self, _query: GetReaderSettings) -> ReaderSettings {
        self.settings.clone()
    }
}
