use tracing::{debug, error, info, warn};

pub fn log_request_received(endpoint: &str, method: &str) {
    info!("Request received: {} {}", method, endpoint);
}

pub fn log_request_processed(endpoint: &str, status: u16, duration_ms: u64) {
    info!("Request processed: {} - Status: {} - Duration: {}ms",
          endpoint, status, duration_ms);
}

pub fn log_classification_result(classification: &str, reply_chars: usize) {
    info!("📬 Email classificado: {} - Resposta sugerida: {} chars", classification, reply_chars);
}

pub fn log_provider_error(provider: &str, error: &str) {
    error!("Provider error: {} - Error: {}", provider, error);
}

pub fn log_parse_fallback(reason: &str, raw_preview: &str) {
    warn!("⚠️ Resposta do provedor não é JSON válido ({}), usando fallback. Resposta: {}", reason, raw_preview);
}

pub fn log_unexpected_label(label: &str) {
    warn!("⚠️ Classificação fora do vocabulário esperado: {:?}", label);
}

pub fn log_upload_received(filename: &str, size: usize) {
    info!("📎 Arquivo recebido: {} ({} bytes)", filename, size);
}

pub fn log_config_loaded(env: &str) {
    info!("Configuration loaded successfully for environment: {}", env);
}

pub fn log_server_startup(port: u16) {
    info!("🚀 Email classifier server starting on port {}", port);
}

pub fn log_server_ready(host: &str, port: u16) {
    info!("✅ Server ready and listening on http://{}:{}", host, port);
}

pub fn log_health_check() {
    debug!("Health check requested");
}

pub fn log_validation_error(field: &str, message: &str) {
    warn!("Validation error: {} - {}", field, message);
}

pub fn log_info(message: &str) {
    info!("{}", message);
}

pub fn log_error(message: &str) {
    error!("{}", message);
}

pub fn log_warning(message: &str) {
    warn!("{}", message);
}

/// Prévia de texto para log, cortada em `max_chars` caracteres (nunca no meio de um char)
pub fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}... ({} chars)", &text[..cut], text.chars().count()),
        None => text.to_string(),
    }
}
