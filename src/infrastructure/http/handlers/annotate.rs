//! Annotation Handlers

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use std::sync::Arc;

use crate::application::{AnnotateText, GetReaderSettings};
use crate::infrastructure::http::dto::{AnnotateRequest, AnnotationDto, ApiResponse, SettingsDto};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

// ============================================================================
// Annotate
// ============================================================================

pub async fn annotate_text(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AnnotateRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<AnnotationDto>>, ApiError> {
    let Json(req) = payload?;

    let query = AnnotateText {
        text: req.text,
        enabled: req.enabled,
        strength: req.strength,
    };

    let result = state.annotate_text_handler.handle(query)?;

    Ok(Json(ApiResponse::success(AnnotationDto::from(result))))
}

// ============================================================================
// Settings
// ============================================================================

pub async fn get_settings(
    State(state): State<Arc<AppState>>,
) -> Json<ApiResponse<SettingsDto>> {
    let settings = state.get_settings_handler.handle(GetReaderSettings);
    Json(ApiResponse::success(SettingsDto::from(settings)))
}
