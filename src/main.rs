/// Email Classifier: classificação de emails com IA generativa
///
/// Fluxo por requisição:
/// - `/classificar` recebe texto, `/upload` extrai texto de .txt/.pdf
/// - O texto é validado e inserido no template de prompt
/// - Gemini (temperatura 0) devolve JSON com classificação e resposta sugerida
/// - Resposta malformada vira fallback "Erro"; falha do provedor vira 500
///
/// Sem estado entre requisições: só o template e o cliente do provedor,
/// criados uma vez no startup.

use anyhow::Context;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use email_classifier::config::Settings;
use email_classifier::services::{EmailClassifier, PromptTemplate};
use email_classifier::utils::logging::*;
use email_classifier::{build_router, AppState};
use ia_service::{GeminiClient, GeminiConfig, TextGenerator};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 🔧 Carregar variáveis de ambiente do arquivo .env (se existir)
    let dotenv_loaded = dotenvy::dotenv().is_ok();

    // Inicializar tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if dotenv_loaded {
        log_info("✅ Arquivo .env carregado com sucesso");
    } else {
        tracing::debug!("Arquivo .env não encontrado - usando variáveis de ambiente do sistema");
    }

    // Carregar configurações (falha aqui se GEMINI_API_KEY estiver ausente)
    let settings = Settings::new().context("Failed to load settings")?;

    log_config_loaded(&std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string()));

    // Cliente do provedor: instância única injetada no classificador
    let gemini_config = GeminiConfig::new(settings.gemini.api_key.clone())
        .with_base_url(settings.gemini.base_url.clone())
        .with_timeout_secs(settings.gemini.timeout_seconds);
    let provider: Arc<dyn TextGenerator> =
        Arc::new(GeminiClient::new(gemini_config).context("Failed to create Gemini client")?);

    let classifier = EmailClassifier::new(
        provider,
        PromptTemplate::default(),
        settings.limits.max_text_chars,
    );
    log_info(&format!(
        "✅ Classificador pronto: provedor={}, modelo={}, limite={} caracteres",
        classifier.provider_name(),
        classifier.model(),
        classifier.max_text_chars()
    ));

    let app_state = Arc::new(AppState {
        settings: settings.clone(),
        classifier,
    });

    let app = build_router(app_state);

    // No Cloud Run, usar a variável de ambiente PORT
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(settings.server.port);
    let host = settings.server.host.clone();

    log_server_startup(port);

    let listener = TcpListener::bind(format!("{}:{}", host, port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", host, port))?;

    log_server_ready(&host, port);

    // Graceful shutdown com signal handling
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    log_info("🛑 Server shut down gracefully");
    Ok(())
}

/// Signal handler para graceful shutdown
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log_error(&format!("Failed to install Ctrl+C handler: {}", e));
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                log_error(&format!("Failed to install SIGTERM handler: {}", e));
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            log_info("🛑 Received Ctrl+C, shutting down gracefully...");
        },
        _ = terminate => {
            log_info("🛑 Received SIGTERM, shutting down gracefully...");
        }
    }
}
