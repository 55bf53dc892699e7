//! services/api/src/web/rest.rs
//!
//! Contains the Axum handlers for the REST API endpoints and the master
//! definition for the OpenAPI specification.

use crate::error::ApiError;
use crate::web::protocol::{
    AnalyzeMessageRequest, AnalyzeMessageResponse, EmotionScoreBody, ErrorBody, HealthResponse,
};
use crate::web::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use emotion_core::{AnalysisError, AnalysisRequest};
use std::sync::Arc;
use utoipa::OpenApi;

//=========================================================================================
// OpenAPI Master Definition
//=========================================================================================

#[derive(OpenApi)]
#[openapi(
    paths(
        analyze_message_handler,
        health_handler,
    ),
    components(
        schemas(AnalyzeMessageRequest, AnalyzeMessageResponse, EmotionScoreBody, ErrorBody, HealthResponse)
    ),
    tags(
        (name = "Emotion Analysis API", description = "Classifies the emotion expressed in a single chat message.")
    )
)]
pub struct ApiDoc;

//=========================================================================================
// REST API Handlers
//=========================================================================================

/// Analyze the emotion of one message.
///
/// Scores the message against the seven-label taxonomy and returns the
/// dominant label with all scores. `topics` is always empty for now.
#[utoipa::path(
    post,
    path = "/api/v1/analysis/message",
    request_body = AnalyzeMessageRequest,
    responses(
        (status = 200, description = "Message analyzed", body = AnalyzeMessageResponse),
        (status = 400, description = "Missing or blank content, or a malformed body", body = ErrorBody),
        (status = 500, description = "The model call failed or its reply was unusable", body = ErrorBody)
    )
)]
pub async fn analyze_message_handler(
    State(app_state): State<Arc<AppState>>,
    payload: Result<Json<AnalyzeMessageRequest>, JsonRejection>,
) -> Result<Json<AnalyzeMessageResponse>, ApiError> {
    let Json(body) = payload.map_err(|rejection| {
        AnalysisError::Validation(format!("invalid request body: {}", rejection.body_text()))
    })?;

    let request = AnalysisRequest::from(body);
    let result = app_state.analyzer.analyze(&request).await?;

    Ok(Json(AnalyzeMessageResponse::from(result)))
}

/// Liveness probe.
#[utoipa::path(
    get,
    path = "/api/v1/analysis/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: "analysis".to_string(),
    })
}
