use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub gemini: GeminiSettings,
    #[serde(default)]
    pub cors: CorsSettings,
    #[serde(default)]
    pub limits: LimitsSettings,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

#[derive(Serialize, Deserialize, Clone)]
pub struct GeminiSettings {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_gemini_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl std::fmt::Debug for GeminiSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiSettings")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

fn default_gemini_base_url() -> String {
    ia_service::DEFAULT_GEMINI_BASE_URL.to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_gemini_base_url(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CorsSettings {
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
    /// Libera qualquer origem (sem credenciais)
    #[serde(default)]
    pub allow_any_origin: bool,
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:5173".to_string()]
}

impl CorsSettings {
    /// `allow_any_origin` ligado ou `*` presente na lista
    pub fn allows_any_origin(&self) -> bool {
        self.allow_any_origin || self.allowed_origins.iter().any(|o| o.trim() == "*")
    }
}

impl Default for CorsSettings {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
            allow_any_origin: false,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LimitsSettings {
    #[serde(default = "default_max_text_chars")]
    pub max_text_chars: usize,
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

fn default_max_text_chars() -> usize {
    50_000
}

fn default_max_upload_bytes() -> usize {
    10 * 1024 * 1024
}

impl Default for LimitsSettings {
    fn default() -> Self {
        Self {
            max_text_chars: default_max_text_chars(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let mut builder = Config::builder()
            // Arquivo de configuração base
            .add_source(File::with_name("config/default").required(false))
            // Arquivo específico do ambiente
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(Environment::with_prefix("EMAIL_CLASSIFIER").separator("__"));

        // Variáveis de ambiente "curtas" têm prioridade sobre os arquivos
        if let Ok(api_key) = std::env::var("GEMINI_API_KEY") {
            builder = builder.set_override("gemini.api_key", api_key)?;
        }
        if let Ok(origins) = std::env::var("CORS_ALLOWED_ORIGINS") {
            let origins: Vec<String> = origins
                .split(',')
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect();
            builder = builder.set_override("cors.allowed_origins", origins)?;
        }

        Self::from_builder(builder)
    }

    /// Desserializa e valida; a API key do provedor é obrigatória
    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gemini.api_key.trim().is_empty() {
            return Err(ConfigError::Message(
                "GEMINI_API_KEY não configurada (gemini.api_key)".to_string(),
            ));
        }
        if self.gemini.timeout_seconds == 0 {
            return Err(ConfigError::Message(
                "gemini.timeout_seconds deve ser maior que zero".to_string(),
            ));
        }
        if self.limits.max_text_chars == 0 {
            return Err(ConfigError::Message(
                "limits.max_text_chars deve ser maior que zero".to_string(),
            ));
        }
        if self.limits.max_upload_bytes == 0 {
            return Err(ConfigError::Message(
                "limits.max_upload_bytes deve ser maior que zero".to_string(),
            ));
        }
        Ok(())
    }
}
