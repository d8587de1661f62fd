//! Annotation Context - Errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnnotationError {
    #[error("无效的加粗强度: {0}（只接受 1、2、3）")]
    InvalidStrength(i64),
}
