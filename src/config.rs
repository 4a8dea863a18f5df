use std::env;

#[derive(Clone)]
pub struct Config {
    /// Base URL of the legacy proxy. Set: proxy mode. Unset or blank:
    /// fallback mode with the seeded in-memory store.
    pub proxy_base_url: Option<String>,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            proxy_base_url: env::var("PROXY_BASE_URL")
                .ok()
                .filter(|url| !url.trim().is_empty()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(7003),
        }
    }
}
