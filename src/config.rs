use tracing::warn;

pub const DEFAULT_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "deepseek-r1-distill-llama-70b";
pub const DEFAULT_PORT: u16 = 5001;

/// Process configuration, gathered once at startup and passed into the
/// service by reference. Credentials are never embedded as literals.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Chat-completions endpoint of the text-generation provider.
    pub provider_api_url: String,
    /// Bearer token for the provider. `None` is not a startup failure:
    /// generation requests fail with a configuration error until it is set.
    pub provider_api_key: Option<String>,
    pub model: String,
    pub port: u16,
    /// Mounts the feedback endpoints when true.
    pub feedback_enabled: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let provider_api_key = std::env::var("GROQ_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());
        if provider_api_key.is_none() {
            warn!("GROQ_API_KEY is not set; blog generation will fail until it is configured");
        }

        Self {
            provider_api_url: std::env::var("GROQ_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            provider_api_key,
            model: std::env::var("GROQ_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            feedback_enabled: std::env::var("FEEDBACK_ENABLED")
                .map(|v| parse_flag(&v))
                .unwrap_or(true),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(value.trim().to_ascii_lowercase().as_str(), "false" | "0" | "off" | "no")
}

#[cfg(test)]
mod tests {
    use super::parse_flag;

    #[test]
    fn flag_parsing() {
        assert!(parse_flag("true"));
        assert!(parse_flag("1"));
        assert!(parse_flag("anything-else"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag("FALSE"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("off"));
        assert!(!parse_flag("no"));
    }
}
