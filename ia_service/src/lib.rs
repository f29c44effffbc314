//! Serviço de IA generativa para classificação de emails
//!
//! Este crate fornece:
//! - `TextGenerator`: abstração de um provedor de texto (prompt in, texto out)
//! - `GeminiClient`: implementação sobre a API REST `generateContent` do Gemini
//! - `extract_pdf_text`: extração local de texto de PDFs com lopdf
//!
//! Não conhece HTTP de entrada nem o formato das respostas de classificação;
//! isso fica na aplicação.

pub mod error;
pub mod gemini;
pub mod pdf;
pub mod provider;

pub use error::{IaResult, IaServiceError};
pub use gemini::{GeminiClient, GeminiConfig, DEFAULT_GEMINI_BASE_URL, GEMINI_MODEL};
pub use pdf::extract_pdf_text;
pub use provider::TextGenerator;
