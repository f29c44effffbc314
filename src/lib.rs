// Biblioteca do classificador de emails
// Expõe módulos para uso em testes e no binário

pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod utils;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::{CorsSettings, Settings};
use crate::services::EmailClassifier;
use crate::utils::logging::*;

/// Folga para cabeçalhos multipart acima do limite do arquivo
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

// AppState é definido aqui para ser compartilhado
#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub classifier: EmailClassifier,
}

pub fn build_router(state: Arc<AppState>) -> Router {
    let body_limit = state
        .settings
        .limits
        .max_upload_bytes
        .saturating_add(MULTIPART_OVERHEAD_BYTES);
    let cors = cors_layer(&state.settings.cors);

    Router::new()
        .route("/", get(handlers::service_info))
        .route("/health", get(handlers::health_check))
        .route("/classificar", post(handlers::classify_email))
        .route("/upload", post(handlers::upload_email))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Allow-list com credenciais, ou qualquer origem sem credenciais.
/// Uma entrada `*` na lista equivale a `allow_any_origin = true`.
pub fn cors_layer(settings: &CorsSettings) -> CorsLayer {
    if settings.allows_any_origin() {
        log_warning("⚠️ CORS liberado para qualquer origem (sem credenciais)");
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = settings
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                log_warning(&format!("⚠️ Origem CORS inválida ignorada: {}", origin));
                None
            }
        })
        .collect();

    log_info(&format!("🌐 CORS habilitado para {} origem(ns)", origins.len()));

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION])
}
