use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let api_url = require("TREADQUOTE_API_URL")?;
    let api_key = require("TREADQUOTE_API_KEY")?;
    let log_level = or_default("TREADQUOTE_LOG_LEVEL", "info");
    let http_timeout_secs = parse_u64("TREADQUOTE_HTTP_TIMEOUT_SECS", "30")?;

    Ok(AppConfig {
        api_url,
        api_key,
        log_level,
        http_timeout_secs,
    })
}

#[cfg(test)]
mod tests {
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
        m.insert("TREADQUOTE_API_URL", "https://example.supabase.co");
        m.insert("TREADQUOTE_API_KEY", "test-anon-key");
        m
    }

    #[test]
    fn build_app_config_fails_without_api_url() {
        let map: HashMap<&str, &str> = HashMap::new();
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "TREADQUOTE_API_URL"),
            "expected MissingEnvVar(TREADQUOTE_API_URL), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_fails_without_api_key() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("TREADQUOTE_API_URL", "https://example.supabase.co");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "TREADQUOTE_API_KEY"),
            "expected MissingEnvVar(TREADQUOTE_API_KEY), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_succeeds_with_required_vars() {
        let map = full_env();
        let cfg = build_app_config(lookup_from_map(&map)).expect("config should load");
        assert_eq!(cfg.api_url, "https://example.supabase.co");
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.http_timeout_secs, 30);
    }

    #[test]
    fn http_timeout_secs_override() {
        let mut map = full_env();
        map.insert("TREADQUOTE_HTTP_TIMEOUT_SECS", "60");
        let cfg = build_app_config(lookup_from_map(&map)).expect("config should load");
        assert_eq!(cfg.http_timeout_secs, 60);
    }

    #[test]
    fn http_timeout_secs_invalid() {
        let mut map = full_env();
        map.insert("TREADQUOTE_HTTP_TIMEOUT_SECS", "not-a-number");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TREADQUOTE_HTTP_TIMEOUT_SECS"),
            "expected InvalidEnvVar(TREADQUOTE_HTTP_TIMEOUT_SECS), got: {result:?}"
        );
    }

    #[test]
    fn debug_redacts_api_key() {
        let map = full_env();
        let cfg = build_app_config(lookup_from_map(&map)).expect("config should load");
        let rendered = format!("{cfg:?}");
        assert!(!rendered.contains("test-anon-key"), "api_key leaked: {rendered}");
        assert!(rendered.contains("[redacted]"));
    }
}
