use thiserror::Error;

/// Erros do serviço de IA
#[derive(Debug, Error)]
pub enum IaServiceError {
    /// Falha de transporte (conexão recusada, timeout, TLS...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// O provedor respondeu com status diferente de 2xx
    #[error("Provider API error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("Provider returned no text")]
    EmptyResponse,

    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("PDF error: {0}")]
    Pdf(String),

    #[error("PDF não contém texto extraível (pode ser PDF escaneado/imagem)")]
    NoText,
}

pub type IaResult<T> = Result<T, IaServiceError>;
