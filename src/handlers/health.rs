use axum::{extract::State, response::Json};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::utils::logging::*;
use crate::AppState;

pub const SERVICE_NAME: &str = "email-classifier";

pub async fn health_check() -> Json<Value> {
    log_health_check();

    Json(json!({
        "status": "healthy",
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// `GET /`: metadados estáticos do serviço
pub async fn service_info(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "name": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Classificação de emails em Produtivo/Improdutivo com sugestão de resposta automática",
        "provider": state.classifier.provider_name(),
        "model": state.classifier.model(),
        "limits": {
            "max_text_chars": state.settings.limits.max_text_chars,
            "max_upload_bytes": state.settings.limits.max_upload_bytes,
            "upload_extensions": [".txt", ".pdf"]
        },
        "endpoints": [
            { "method": "POST", "path": "/classificar", "description": "Classifica o texto enviado em JSON {\"texto\": ...}" },
            { "method": "POST", "path": "/upload", "description": "Classifica um arquivo .txt ou .pdf (campo multipart 'file')" },
            { "method": "GET", "path": "/health", "description": "Liveness probe" },
            { "method": "GET", "path": "/", "description": "Informações do serviço" }
        ]
    }))
}
