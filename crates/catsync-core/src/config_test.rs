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

/// Returns a map with all required env vars populated with valid defaults.
fn full_env<'a>() -> HashMap<&'a str, &'a str> {
    let mut m = HashMap::new();
    m.insert(
        "CATSYNC_STORE_URL",
        "https://example.myshopify.com/admin/api/2023-01",
    );
    m
}

#[test]
fn parse_environment_known_values() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("staging").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "CATSYNC_ENV"));
}

#[test]
fn build_app_config_fails_without_store_url() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "CATSYNC_STORE_URL"),
        "expected MissingEnvVar(CATSYNC_STORE_URL), got: {result:?}"
    );
}

#[test]
fn build_app_config_treats_blank_store_url_as_missing() {
    let mut map = HashMap::new();
    map.insert("CATSYNC_STORE_URL", "   ");
    let result = build_app_config(lookup_from_map(&map));
    assert!(matches!(result, Err(ConfigError::MissingEnvVar(_))));
}

#[test]
fn build_app_config_succeeds_with_defaults() {
    let map = full_env();
    let cfg = build_app_config(lookup_from_map(&map)).expect("expected valid config");
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.log_level, "info");
    assert_eq!(
        cfg.store_url,
        "https://example.myshopify.com/admin/api/2023-01"
    );
    assert!(cfg.store_access_token.is_none());
    assert_eq!(cfg.request_timeout_secs, 30);
    assert_eq!(cfg.user_agent, "catsync/0.1 (catalog-reconciler)");
    assert_eq!(
        cfg.size_chart_path.to_string_lossy(),
        "./config/size_chart.json"
    );
    assert_eq!(cfg.cache_path.to_string_lossy(), "./data/catalog_cache.json");
    assert!(!cfg.apply_barcode_updates);
    assert!(!cfg.dedupe_image_variant_ids);
}

#[test]
fn build_app_config_reads_policy_toggles() {
    let mut map = full_env();
    map.insert("CATSYNC_APPLY_BARCODE_UPDATES", "true");
    map.insert("CATSYNC_DEDUPE_IMAGE_VARIANT_IDS", "1");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.apply_barcode_updates);
    assert!(cfg.dedupe_image_variant_ids);
}

#[test]
fn build_app_config_rejects_garbage_toggle() {
    let mut map = full_env();
    map.insert("CATSYNC_APPLY_BARCODE_UPDATES", "maybe");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "CATSYNC_APPLY_BARCODE_UPDATES"),
        "expected InvalidEnvVar(CATSYNC_APPLY_BARCODE_UPDATES), got: {result:?}"
    );
}

#[test]
fn build_app_config_request_timeout_override() {
    let mut map = full_env();
    map.insert("CATSYNC_REQUEST_TIMEOUT_SECS", "90");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.request_timeout_secs, 90);
}

#[test]
fn build_app_config_request_timeout_invalid() {
    let mut map = full_env();
    map.insert("CATSYNC_REQUEST_TIMEOUT_SECS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "CATSYNC_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(CATSYNC_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn build_app_config_ignores_empty_access_token() {
    let mut map = full_env();
    map.insert("CATSYNC_STORE_ACCESS_TOKEN", "");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.store_access_token.is_none());
}

#[test]
fn debug_output_redacts_access_token() {
    let mut map = full_env();
    map.insert("CATSYNC_STORE_ACCESS_TOKEN", "shpat_secret");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("shpat_secret"));
    assert!(rendered.contains("[redacted]"));
}
