use async_trait::async_trait;

use crate::error::IaResult;

/// Provedor de geração de texto: recebe um prompt e devolve texto livre.
///
/// A aplicação mantém uma única instância (`Arc<dyn TextGenerator>`) criada
/// no startup; implementações não devem guardar estado mutável entre chamadas.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Nome do provedor para logs
    fn name(&self) -> &'static str;

    /// Identificador do modelo usado
    fn model(&self) -> &str;

    /// Gera texto para o prompt com a temperatura informada.
    ///
    /// Erros de rede ou do provedor são retornados como estão, sem retry.
    async fn generate(&self, prompt: &str, temperature: f32) -> IaResult<String>;
}
