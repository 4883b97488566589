use anyhow::{Result, anyhow};
use platform_provider::DEFAULT_ENDPOINT;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub provider_url: String,
    pub cors_allowed_origins: Vec<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let provider_url = lookup("DIRECTORY_PROVIDER_URL")
            .map(|url| url.trim().to_string())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.into());
        if !provider_url.starts_with("http://") && !provider_url.starts_with("https://") {
            return Err(anyhow!(
                "DIRECTORY_PROVIDER_URL must be an http(s) URL, got {provider_url:?}"
            ));
        }

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .filter_map(|s| {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            })
            .collect::<Vec<_>>();

        Ok(Self {
            provider_url,
            cors_allowed_origins,
        })
    }
}
