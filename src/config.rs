use tracing::warn;

/// Process configuration, read once at startup and injected into the
/// handlers instead of being pulled from the environment per request.
pub struct AppConfig {
    pub api_key: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        // A missing key is not fatal: the upstream rejects the call itself
        // and that rejection flows back through the normal error path.
        let api_key = match std::env::var("OPENROUTER_API_KEY") {
            Ok(key) if !key.is_empty() => key,
            _ => {
                warn!("OPENROUTER_API_KEY is not set; OpenRouter will reject every request");
                String::new()
            }
        };

        Self { api_key }
    }
}
