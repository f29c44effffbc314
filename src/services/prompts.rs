//! Template de prompt para classificação de emails
//!
//! O template é montado uma única vez no startup e compartilhado entre as
//! requisições; o único ponto variável é o texto do email.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PromptTemplate {
    pub system_role: String,
    pub language_rules: Vec<String>,
    pub categories: Vec<CategoryDefinition>,
    pub reply_guidelines: Vec<String>,
    pub response_format: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CategoryDefinition {
    pub name: String,
    pub description: String,
    pub examples: Vec<String>,
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self {
            system_role: "Você é um assistente que classifica emails recebidos por uma empresa \
                          e sugere uma resposta automática para cada um."
                .to_string(),
            language_rules: vec![
                "Detecte o idioma do email e escreva o campo \"texto\" nesse mesmo idioma".to_string(),
                "O campo \"classificacao\" deve ser SEMPRE \"Produtivo\" ou \"Improdutivo\", em português, \
                 independente do idioma do email"
                    .to_string(),
            ],
            categories: vec![
                CategoryDefinition {
                    name: "Produtivo".to_string(),
                    description: "Emails que requerem uma ação ou resposta específica".to_string(),
                    examples: vec![
                        "Solicitação de suporte técnico".to_string(),
                        "Pedido de atualização sobre um caso em aberto".to_string(),
                        "Dúvida sobre o sistema ou sobre um produto".to_string(),
                        "Envio de documento que precisa ser analisado".to_string(),
                    ],
                },
                CategoryDefinition {
                    name: "Improdutivo".to_string(),
                    description: "Emails que não necessitam de uma ação imediata".to_string(),
                    examples: vec![
                        "Mensagem de felicitações (ex.: Feliz Natal!)".to_string(),
                        "Agradecimentos".to_string(),
                        "Mensagens sociais ou informativas sem pedido".to_string(),
                    ],
                },
            ],
            reply_guidelines: vec![
                "Tom cordial e profissional".to_string(),
                "Resposta curta (no máximo 5 frases)".to_string(),
                "Para emails produtivos, confirme o recebimento e indique o próximo passo".to_string(),
                "Para emails improdutivos, agradeça a mensagem sem prometer ações".to_string(),
                "Não invente números de protocolo, prazos ou dados que não estejam no email".to_string(),
            ],
            response_format: r#"Responda APENAS com JSON válido, sem texto antes ou depois, no formato:
{
  "classificacao": "Produtivo ou Improdutivo",
  "texto": "Sugestão de resposta automática para o email"
}"#
            .to_string(),
        }
    }
}

impl PromptTemplate {
    /// Renderiza o prompt completo; o email entra sem nenhuma alteração
    pub fn render(&self, email_text: &str) -> String {
        let mut prompt = String::new();

        prompt.push_str(&self.system_role);
        prompt.push_str("\n\n");

        prompt.push_str("IDIOMA:\n");
        for rule in &self.language_rules {
            prompt.push_str(&format!("- {}\n", rule));
        }
        prompt.push('\n');

        prompt.push_str("CATEGORIAS:\n");
        for category in &self.categories {
            prompt.push_str(&format!("{}: {}.\n", category.name, category.description));
            prompt.push_str(&format!("  Exemplos: {}\n", category.examples.join("; ")));
        }
        prompt.push('\n');

        prompt.push_str("DIRETRIZES PARA A RESPOSTA SUGERIDA:\n");
        for guideline in &self.reply_guidelines {
            prompt.push_str(&format!("- {}\n", guideline));
        }
        prompt.push('\n');

        prompt.push_str(&self.response_format);
        prompt.push_str("\n\n");

        prompt.push_str("Email:\n");
        prompt.push_str(email_text);

        prompt
    }
}
