//! Build-time configuration for the web client.

use store::AppConfig;

/// `recipes.toml` as it was at build time.
const EMBEDDED_CONFIG: &str = include_str!("../recipes.toml");

/// Set at build time to point the client at another backend.
const BASE_URL_OVERRIDE: Option<&str> = option_env!("RECIPES_API_BASE_URL");

/// Resolve the configuration the app runs with.
pub fn load_config() -> AppConfig {
    resolve(EMBEDDED_CONFIG, BASE_URL_OVERRIDE)
}

fn resolve(text: &str, base_url_override: Option<&str>) -> AppConfig {
    let config = match AppConfig::from_toml(text) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Invalid {}, using defaults: {}", AppConfig::filename(), e);
            AppConfig::default()
        }
    };

    match base_url_override.map(str::trim).filter(|url| !url.is_empty()) {
        Some(url) => config.with_base_url(url),
        None => config,
    }
}
