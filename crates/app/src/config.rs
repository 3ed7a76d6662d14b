use shared_types::AppConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Bundled at compile time so the web build needs no filesystem.
const CONFIG_TOML: &str = include_str!("../console.toml");

fn parse(contents: &str) -> AppConfig {
    AppConfig::from_toml_str(contents).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "console.toml is invalid, using defaults");
        AppConfig::default()
    })
}

/// Parse `console.toml` once; later calls return the cached value.
pub fn app_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let config = parse(CONFIG_TOML);
        tracing::info!(features = ?config.features, "console config loaded");
        config
    })
}
