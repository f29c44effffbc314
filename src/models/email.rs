use serde::{Deserialize, Serialize};

/// Corpo de `POST /classificar`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationRequest {
    pub texto: String,
}

/// Veredito devolvido ao cliente.
///
/// `classificacao` guarda o rótulo exatamente como veio do modelo; use
/// [`Classification::from_label`] para interpretar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub classificacao: String,
    pub texto: String,
}

impl ClassificationResult {
    pub fn new(classificacao: impl Into<String>, texto: impl Into<String>) -> Self {
        Self {
            classificacao: classificacao.into(),
            texto: texto.into(),
        }
    }

    /// Resultado sentinela para respostas do provedor que não puderam ser
    /// interpretadas; o texto bruto vai como resposta sugerida.
    pub fn fallback(raw_reply: impl Into<String>) -> Self {
        Self::new(Classification::Erro.label(), raw_reply)
    }

    pub fn label(&self) -> Option<Classification> {
        Classification::from_label(&self.classificacao)
    }
}

/// Vocabulário conhecido de rótulos
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Produtivo,
    Improdutivo,
    Erro,
    Desconhecido,
}

impl Classification {
    pub const ALL: [Classification; 4] = [
        Classification::Produtivo,
        Classification::Improdutivo,
        Classification::Erro,
        Classification::Desconhecido,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Classification::Produtivo => "Produtivo",
            Classification::Improdutivo => "Improdutivo",
            Classification::Erro => "Erro",
            Classification::Desconhecido => "Desconhecido",
        }
    }

    /// Reconhece o rótulo ignorando caixa e espaços nas pontas
    pub fn from_label(label: &str) -> Option<Self> {
        let normalized = label.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(normalized))
    }
}
