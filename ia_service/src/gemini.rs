//! Cliente da API REST do Gemini (`models/{model}:generateContent`)

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{IaResult, IaServiceError};
use crate::provider::TextGenerator;

/// Modelo fixo usado para classificação
pub const GEMINI_MODEL: &str = "gemini-2.5-flash";

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Configuração do cliente Gemini
#[derive(Clone)]
pub struct GeminiConfig {
    /// API key do Google AI Studio
    pub api_key: String,
    /// URL base da API (padrão: generativelanguage v1beta)
    pub base_url: String,
    /// Modelo (padrão: gemini-2.5-flash)
    pub model: String,
    /// Timeout total por requisição em segundos (padrão: 30)
    pub timeout_secs: u64,
    /// Timeout de conexão em segundos (padrão: 5)
    pub connect_timeout_secs: u64,
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout_secs", &self.timeout_secs)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .finish()
    }
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            model: GEMINI_MODEL.to_string(),
            timeout_secs: 30,
            connect_timeout_secs: 5,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    role: &'static str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatena o texto de todas as partes do primeiro candidato
    fn into_text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content
            .parts
            .into_iter()
            .filter_map(|part| part.text)
            .collect();

        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

/// Cliente Gemini compartilhado pela aplicação
#[derive(Clone)]
pub struct GeminiClient {
    http_client: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> IaResult<Self> {
        if config.api_key.trim().is_empty() {
            return Err(IaServiceError::Config("Gemini API key is empty".to_string()));
        }

        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(|e| IaServiceError::Config(format!("Failed to create HTTP client: {}", e)))?;

        tracing::info!(
            "✅ GeminiClient inicializado com modelo: {} (timeout {}s)",
            config.model,
            config.timeout_secs
        );

        Ok(Self { http_client, config })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    fn name(&self) -> &'static str {
        "gemini"
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    async fn generate(&self, prompt: &str, temperature: f32) -> IaResult<String> {
        tracing::debug!("📤 Enviando prompt ao Gemini: {} chars", prompt.chars().count());

        let body = GenerateContentRequest {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: GenerationConfig { temperature },
        };

        let response = self
            .http_client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("❌ Gemini API error: Status {} - {}", status, error_text);
            return Err(IaServiceError::Api {
                status: status.as_u16(),
                body: error_text,
            });
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| IaServiceError::InvalidResponse(e.to_string()))?;

        let text = parsed.into_text().ok_or(IaServiceError::EmptyResponse)?;

        tracing::debug!("📥 Resposta do Gemini: {} chars", text.chars().count());

        Ok(text)
    }
}
