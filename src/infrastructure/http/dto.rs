//! Data Transfer Objects

use serde::{Deserialize, Serialize};

use crate::application::{AnnotationResponse, ReaderSettings};
use crate::domain::{Paragraph, Segment};

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 响应格式
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub errno: i32,
    pub error: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            errno: 0,
            error: String::new(),
            data: Some(data),
        }
    }
}

// ============================================================================
// Annotation DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct AnnotateRequest {
    pub text: String,
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(default)]
    pub strength: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct SegmentDto {
    pub leading: String,
    pub bold: String,
    pub normal: String,
    pub trailing: String,
}

impl From<Segment> for SegmentDto {
    fn from(seg: Segment) -> Self {
        Self {
            leading: seg.leading,
            bold: seg.bold,
            normal: seg.normal,
            trailing: seg.trailing,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ParagraphDto {
    pub mode: &'static str,
    pub separator: &'static str,
    pub segments: Vec<SegmentDto>,
}

impl From<Paragraph> for ParagraphDto {
    fn from(paragraph: Paragraph) -> Self {
        let mode = paragraph.mode();
        Self {
            mode: mode.as_str(),
            separator: mode.separator(),
            segments: paragraph
                .into_segments()
                .into_iter()
                .map(SegmentDto::from)
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AnnotationDto {
    pub enabled: bool,
    pub strength: u8,
    pub paragraphs: Vec<ParagraphDto>,
}

impl From<AnnotationResponse> for AnnotationDto {
    fn from(resp: AnnotationResponse) -> Self {
        Self {
            enabled: resp.enabled,
            strength: resp.strength.value(),
            paragraphs: resp.paragraphs.into_iter().map(ParagraphDto::from).collect(),
        }
    }
}

// ============================================================================
// Settings DTOs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct SettingsDto {
    pub enabled: bool,
    pub strength: u8,
    pub segmenter: &'static str,
    pub max_text_chars: usize,
}

impl From<ReaderSettings> for SettingsDto {
    fn from(settings: ReaderSettings) -> Self {
        Self {
            enabled: settings.enabled,
            strength: settings.strength.value(),
            segmenter: settings.segmenter.as_str(),
            max_text_chars: settings.max_text_chars,
        }
    }
}
