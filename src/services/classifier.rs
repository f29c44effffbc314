//! Pipeline de classificação de emails
//!
//! validar → montar prompt → chamar provedor → limpar e interpretar resposta.
//! Resposta malformada do modelo é um resultado esperado (`ModelReply::Unstructured`)
//! e vira o resultado de fallback; só erros do provedor sobem como erro.

use ia_service::{IaServiceError, TextGenerator};
use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;

use crate::models::{Classification, ClassificationResult};
use crate::services::prompts::PromptTemplate;
use crate::utils::logging::*;

/// Temperatura fixa: saída o mais determinística possível
pub const CLASSIFICATION_TEMPERATURE: f32 = 0.0;

const LOG_PREVIEW_CHARS: usize = 500;

#[derive(Debug, Error)]
pub enum ClassificationError {
    #[error("O texto do email não pode ser vazio")]
    EmptyText,

    #[error("O texto do email excede o limite de {max} caracteres ({chars} recebidos)")]
    TextTooLong { chars: usize, max: usize },

    #[error("Falha ao consultar o provedor de IA: {0}")]
    Provider(#[from] IaServiceError),
}

/// Formato esperado do JSON devolvido pelo modelo
#[derive(Debug, Deserialize)]
struct StructuredReply {
    classificacao: String,
    texto: String,
}

/// Resposta do modelo já interpretada
#[derive(Debug, Clone, PartialEq)]
pub enum ModelReply {
    Structured(ClassificationResult),
    Unstructured { raw: String, reason: String },
}

impl ModelReply {
    pub fn parse(raw: &str) -> Self {
        let cleaned = strip_code_fences(raw);
        let unstructured = |reason: String| ModelReply::Unstructured {
            raw: raw.to_string(),
            reason,
        };

        // Só objeto JSON conta; serde aceitaria um array posicional
        let value = match serde_json::from_str::<serde_json::Value>(cleaned) {
            Ok(value) if value.is_object() => value,
            Ok(_) => return unstructured("resposta JSON não é um objeto".to_string()),
            Err(e) => return unstructured(e.to_string()),
        };

        match serde_json::from_value::<StructuredReply>(value) {
            Ok(reply) => ModelReply::Structured(ClassificationResult::new(reply.classificacao, reply.texto)),
            Err(e) => unstructured(e.to_string()),
        }
    }

    pub fn into_result(self) -> ClassificationResult {
        match self {
            ModelReply::Structured(result) => result,
            ModelReply::Unstructured { raw, .. } => ClassificationResult::fallback(raw),
        }
    }
}

/// Remove cercas de código markdown (```json ... ``` ou ``` ... ```)
pub fn strip_code_fences(s: &str) -> &str {
    let mut trimmed = s.trim();

    if let Some(rest) = trimmed.strip_prefix("```json") {
        trimmed = rest;
    } else if let Some(rest) = trimmed.strip_prefix("```JSON") {
        trimmed = rest;
    } else if let Some(rest) = trimmed.strip_prefix("```") {
        trimmed = rest;
    }

    if let Some(rest) = trimmed.strip_suffix("```") {
        trimmed = rest;
    }

    trimmed.trim()
}

/// Classificador compartilhado entre as requisições (provedor + template imutáveis)
#[derive(Clone)]
pub struct EmailClassifier {
    provider: Arc<dyn TextGenerator>,
    template: Arc<PromptTemplate>,
    max_text_chars: usize,
}

impl EmailClassifier {
    pub fn new(provider: Arc<dyn TextGenerator>, template: PromptTemplate, max_text_chars: usize) -> Self {
        Self {
            provider,
            template: Arc::new(template),
            max_text_chars,
        }
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    pub fn model(&self) -> &str {
        self.provider.model()
    }

    pub fn max_text_chars(&self) -> usize {
        self.max_text_chars
    }

    /// Rejeita texto vazio ou longo demais antes de qualquer chamada externa
    pub fn validate(&self, text: &str) -> Result<(), ClassificationError> {
        if text.trim().is_empty() {
            return Err(ClassificationError::EmptyText);
        }

        let chars = text.chars().count();
        if chars > self.max_text_chars {
            return Err(ClassificationError::TextTooLong {
                chars,
                max: self.max_text_chars,
            });
        }

        Ok(())
    }

    pub async fn classify(&self, text: &str) -> Result<ClassificationResult, ClassificationError> {
        if let Err(e) = self.validate(text) {
            log_validation_error("texto", &e.to_string());
            return Err(e);
        }

        let prompt = self.template.render(text);

        let raw = self
            .provider
            .generate(&prompt, CLASSIFICATION_TEMPERATURE)
            .await
            .map_err(|e| {
                log_provider_error(self.provider.name(), &e.to_string());
                ClassificationError::Provider(e)
            })?;

        tracing::debug!("📋 Resposta bruta do provedor: {}", raw);
        log_info(&format!(
            "🤖 Resposta do {}: {}",
            self.provider.name(),
            preview(&raw, LOG_PREVIEW_CHARS)
        ));

        let reply = ModelReply::parse(&raw);
        if let ModelReply::Unstructured { reason, .. } = &reply {
            log_parse_fallback(reason, &preview(&raw, LOG_PREVIEW_CHARS));
        }

        let result = reply.into_result();
        if Classification::from_label(&result.classificacao).is_none() {
            log_unexpected_label(&result.classificacao);
        }

        log_classification_result(&result.classificacao, result.texto.chars().count());

        Ok(result)
    }
}
