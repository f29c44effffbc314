use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use std::sync::Arc;
use tokio::time::Instant;

use crate::models::{ClassificationRequest, ClassificationResult};
use crate::utils::logging::*;
use crate::utils::{AppError, AppResult};
use crate::AppState;

/// `POST /classificar`: classifica o texto enviado no corpo JSON
pub async fn classify_email(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ClassificationRequest>, JsonRejection>,
) -> AppResult<Json<ClassificationResult>> {
    let start_time = Instant::now();
    log_request_received("/classificar", "POST");

    let Json(request) = payload.map_err(|rejection| {
        log_validation_error("body", &rejection.body_text());
        AppError::from(rejection)
    })?;

    let result = state.classifier.classify(&request.texto).await?;

    log_request_processed("/classificar", 200, start_time.elapsed().as_millis() as u64);

    Ok(Json(result))
}
