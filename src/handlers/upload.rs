use axum::{
    extract::{Multipart, State},
    response::Json,
};
use std::sync::Arc;
use tokio::time::Instant;

use crate::models::ClassificationResult;
use crate::services::{extract_upload, DocumentError};
use crate::utils::logging::*;
use crate::utils::{AppError, AppResult};
use crate::AppState;

/// Nome do campo multipart que carrega o arquivo
pub const UPLOAD_FIELD: &str = "file";

/// `POST /upload`: extrai o texto de um .txt/.pdf e passa pelo mesmo pipeline de `/classificar`
pub async fn upload_email(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> AppResult<Json<ClassificationResult>> {
    let start_time = Instant::now();
    log_request_received("/upload", "POST");

    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await?;
        upload = Some((filename, bytes.to_vec()));
        break;
    }

    let (filename, bytes) = upload.ok_or_else(|| {
        log_validation_error(UPLOAD_FIELD, "campo ausente");
        AppError::from(DocumentError::MissingFile)
    })?;

    log_upload_received(&filename, bytes.len());

    let text = extract_upload(&filename, &bytes, state.settings.limits.max_upload_bytes).map_err(|e| {
        log_validation_error(UPLOAD_FIELD, &e.to_string());
        AppError::from(e)
    })?;

    let result = state.classifier.classify(&text).await?;

    log_request_processed("/upload", 200, start_time.elapsed().as_millis() as u64);

    Ok(Json(result))
}
