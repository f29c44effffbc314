pub mod settings;

pub use settings::{CorsSettings, GeminiSettings, LimitsSettings, ServerSettings, Settings};
