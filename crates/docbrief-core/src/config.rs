use std::time::Duration;

use docbrief_llm::client::{DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT};

/// Runtime configuration, read from the environment once at startup and
/// passed explicitly into constructors.
#[derive(Clone)]
pub struct Config {
    /// Credential for the chat-completion API. Absence surfaces on the first
    /// summarization call, not at startup.
    pub api_key: Option<String>,
    pub model: String,
    pub llm_base_url: String,
    pub llm_timeout: Duration,
    /// When false, the service runs unauthenticated: no auth routes, and
    /// `/summarize` takes no token.
    pub auth_enabled: bool,
    pub token_secret: String,
    pub token_ttl_secs: i64,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("DOCBRIEF_API_KEY")
                .or_else(|_| std::env::var("GROQ_API_KEY"))
                .ok(),
            model: env_or("DOCBRIEF_MODEL", DEFAULT_MODEL),
            llm_base_url: env_or("DOCBRIEF_LLM_BASE_URL", DEFAULT_BASE_URL),
            llm_timeout: std::env::var("DOCBRIEF_LLM_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(DEFAULT_TIMEOUT),
            auth_enabled: env_or("DOCBRIEF_AUTH", "on") != "off",
            // Placeholder secret; override in any real deployment.
            token_secret: env_or("DOCBRIEF_TOKEN_SECRET", "your-secret-key"),
            token_ttl_secs: std::env::var("DOCBRIEF_TOKEN_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(24 * 60 * 60),
            port: std::env::var("DOCBRIEF_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8000),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("model", &self.model)
            .field("llm_base_url", &self.llm_base_url)
            .field("llm_timeout", &self.llm_timeout)
            .field("auth_enabled", &self.auth_enabled)
            .field("token_secret", &"***")
            .field("token_ttl_secs", &self.token_ttl_secs)
            .field("port", &self.port)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_masks_secrets() {
        let config = Config {
            api_key: Some("sk-very-secret".into()),
            model: DEFAULT_MODEL.into(),
            llm_base_url: DEFAULT_BASE_URL.into(),
            llm_timeout: DEFAULT_TIMEOUT,
            auth_enabled: true,
            token_secret: "real-secret".into(),
            token_ttl_secs: 3600,
            port: 8000,
        };

        let printed = format!("{config:?}");
        assert!(!printed.contains("sk-very-secret"));
        assert!(!printed.contains("real-secret"));
    }
}
