use crate::app_config::AppConfig;
use crate::{ConfigError, DEFAULT_QUEUE_NAME};

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup — no
/// `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let guardian_api_key = lookup("GUARDIAN_API_KEY").ok();
    let guardian_base_url = or_default(
        "NEWSQ_GUARDIAN_BASE_URL",
        "https://content.guardianapis.com/search",
    );
    let sqs_endpoint = or_default("NEWSQ_SQS_ENDPOINT", "http://localhost:4566");
    let default_queue_name = or_default("NEWSQ_DEFAULT_QUEUE", DEFAULT_QUEUE_NAME);

    // The Guardian API can take well over a minute to answer under load, so
    // the default request timeout is generous.
    let page_size = parse_u32("NEWSQ_PAGE_SIZE", "10")?;
    let request_timeout_secs = parse_u64("NEWSQ_REQUEST_TIMEOUT_SECS", "120")?;

    let artifact_dir = PathBuf::from(or_default("NEWSQ_ARTIFACT_DIR", "."));
    let bind_addr = parse_addr("NEWSQ_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("NEWSQ_LOG_LEVEL", "info");

    Ok(AppConfig {
        guardian_api_key,
        guardian_base_url,
        sqs_endpoint,
        default_queue_name,
        page_size,
        request_timeout_secs,
        artifact_dir,
        bind_addr,
        log_level,
    })
}
