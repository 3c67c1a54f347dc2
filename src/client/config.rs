use std::env;

/// Client-side settings, loaded from the environment (a `.env` file is honored
/// when present).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub server_url: String,
    pub log_level: String,
}

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

impl ClientConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self {
            server_url: env::var("TRIAGEM_SERVER_URL")
                .unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string()),
            log_level: env::var("TRIAGEM_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            log_level: "info".to_string(),
        }
    }
}
