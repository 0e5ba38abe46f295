use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Default Bing News search endpoint queried by the feed source.
pub const DEFAULT_FEED_URL: &str = "https://www.bing.com/news/search";

/// Bing serves an empty feed to unrecognised agents, so the default mimics a desktop browser.
pub const DEFAULT_FEED_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64)";

/// Load application configuration from environment variables.
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

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it from a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        or_default(var, default)
            .parse::<usize>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let env = parse_environment(&or_default("NEWSLENS_ENV", "development"))?;

    let bind_addr = or_default("NEWSLENS_BIND_ADDR", "0.0.0.0:8000")
        .parse::<SocketAddr>()
        .map_err(|e| invalid("NEWSLENS_BIND_ADDR", e.to_string()))?;
    let log_level = or_default("NEWSLENS_LOG_LEVEL", "info");
    let taxonomy_path = PathBuf::from(or_default(
        "NEWSLENS_TAXONOMY_PATH",
        "./config/taxonomy.yaml",
    ));

    let feed_url = or_default("NEWSLENS_FEED_URL", DEFAULT_FEED_URL);
    if !(feed_url.starts_with("http://") || feed_url.starts_with("https://")) {
        return Err(invalid(
            "NEWSLENS_FEED_URL",
            format!("expected an http(s) URL, got '{feed_url}'"),
        ));
    }
    let feed_timeout_secs = parse_u64("NEWSLENS_FEED_TIMEOUT_SECS", "30")?;
    let feed_user_agent = or_default("NEWSLENS_FEED_USER_AGENT", DEFAULT_FEED_USER_AGENT);

    let max_articles = parse_usize("NEWSLENS_MAX_ARTICLES", "10")?;
    if max_articles == 0 {
        return Err(invalid(
            "NEWSLENS_MAX_ARTICLES",
            "must be at least 1".to_string(),
        ));
    }
    let summary_max_chars = parse_usize("NEWSLENS_SUMMARY_MAX_CHARS", "200")?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        taxonomy_path,
        feed_url,
        feed_timeout_secs,
        feed_user_agent,
        max_articles,
        summary_max_chars,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "NEWSLENS_ENV".to_string(),
            reason: format!("expected development, test, or production; got '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
