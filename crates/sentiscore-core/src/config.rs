use crate::app_config::{Aggregation, AppConfig};
use crate::ConfigError;

/// Load configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it with a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    // Blank paths mean "use the bundled resource".
    let optional_path = |var: &str| -> Option<PathBuf> {
        lookup(var)
            .ok()
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .map(PathBuf::from)
    };

    let log_level = or_default("SENTISCORE_LOG_LEVEL", "warn");
    let lexicon_path = optional_path("SENTISCORE_LEXICON_PATH");
    let stopwords_path = optional_path("SENTISCORE_STOPWORDS_PATH");
    let aggregation = parse_aggregation(&or_default("SENTISCORE_AGGREGATION", "mean"))?;

    Ok(AppConfig {
        log_level,
        lexicon_path,
        stopwords_path,
        aggregation,
    })
}

/// Parse a string into an [`Aggregation`] variant (case-insensitive).
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` for anything other than `mean` or `sum`.
fn parse_aggregation(s: &str) -> Result<Aggregation, ConfigError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "mean" => Ok(Aggregation::Mean),
        "sum" => Ok(Aggregation::Sum),
        other => Err(ConfigError::InvalidEnvVar {
            var: "SENTISCORE_AGGREGATION".to_string(),
            reason: format!("expected 'mean' or 'sum', got '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
