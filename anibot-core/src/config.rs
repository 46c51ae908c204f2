use anyhow::Context as _;

use anibot_mal::DEFAULT_BASE_URL;

/// Settings read from the environment (and `.env`, when present).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub discord_token: String,
    pub mal_client_id: String,
    pub mal_base_url: String,
}

impl Config {
    /// Load from process environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .with_context(|| format!("missing required environment variable {key}"))
        };

        Ok(Self {
            discord_token: required("DISCORD_TOKEN")?,
            mal_client_id: required("MAL_CLIENT_ID")?,
            mal_base_url: lookup("MAL_API_BASE_URL")
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
        })
    }
}
