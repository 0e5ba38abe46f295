use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

fn is_invalid_var(result: &Result<AppConfig, ConfigError>, name: &str) -> bool {
    matches!(result, Err(ConfigError::InvalidEnvVar { var, .. }) if var == name)
}

#[test]
fn parse_environment_development() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
}

#[test]
fn parse_environment_production() {
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("staging").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "NEWSLENS_ENV"));
}

#[test]
fn build_app_config_uses_defaults_for_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).expect("defaults are valid");
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:8000");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(
        cfg.taxonomy_path,
        std::path::PathBuf::from("./config/taxonomy.yaml")
    );
    assert_eq!(cfg.feed_url, DEFAULT_FEED_URL);
    assert_eq!(cfg.feed_timeout_secs, 30);
    assert_eq!(cfg.feed_user_agent, DEFAULT_FEED_USER_AGENT);
    assert_eq!(cfg.max_articles, 10);
    assert_eq!(cfg.summary_max_chars, 200);
}

#[test]
fn build_app_config_fails_with_invalid_bind_addr() {
    let mut map = HashMap::new();
    map.insert("NEWSLENS_BIND_ADDR", "not-a-socket-addr");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        is_invalid_var(&result, "NEWSLENS_BIND_ADDR"),
        "expected InvalidEnvVar(NEWSLENS_BIND_ADDR), got: {result:?}"
    );
}

#[test]
fn build_app_config_fails_on_misspelled_env() {
    let mut map = HashMap::new();
    map.insert("NEWSLENS_ENV", "producton");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        is_invalid_var(&result, "NEWSLENS_ENV"),
        "expected InvalidEnvVar(NEWSLENS_ENV), got: {result:?}"
    );
}

#[test]
fn feed_timeout_override() {
    let mut map = HashMap::new();
    map.insert("NEWSLENS_FEED_TIMEOUT_SECS", "5");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.feed_timeout_secs, 5);
}

#[test]
fn feed_timeout_invalid() {
    let mut map = HashMap::new();
    map.insert("NEWSLENS_FEED_TIMEOUT_SECS", "soon");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        is_invalid_var(&result, "NEWSLENS_FEED_TIMEOUT_SECS"),
        "expected InvalidEnvVar(NEWSLENS_FEED_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn feed_url_must_be_http() {
    let mut map = HashMap::new();
    map.insert("NEWSLENS_FEED_URL", "ftp://news.example.com");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        is_invalid_var(&result, "NEWSLENS_FEED_URL"),
        "expected InvalidEnvVar(NEWSLENS_FEED_URL), got: {result:?}"
    );
}

#[test]
fn max_articles_zero_is_rejected() {
    let mut map = HashMap::new();
    map.insert("NEWSLENS_MAX_ARTICLES", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        is_invalid_var(&result, "NEWSLENS_MAX_ARTICLES"),
        "expected InvalidEnvVar(NEWSLENS_MAX_ARTICLES), got: {result:?}"
    );
}

#[test]
fn summary_limit_override() {
    let mut map = HashMap::new();
    map.insert("NEWSLENS_SUMMARY_MAX_CHARS", "120");
    map.insert("NEWSLENS_LOG_LEVEL", "debug");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.summary_max_chars, 120);
    assert_eq!(cfg.log_level, "debug");
}
