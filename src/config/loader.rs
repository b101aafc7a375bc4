//! Configuration loading from disk and the process environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load configuration from an optional TOML file, apply environment
/// overrides, then validate.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut config = match path {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            toml::from_str(&content)?
        }
        None => AppConfig::default(),
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok());

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Overlay the storefront environment variables onto `config`.
///
/// Empty values are ignored so an exported-but-empty variable does not wipe a
/// value from the file. Whitespace-only values count as set.
pub fn apply_env_overrides<F>(config: &mut AppConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

    if let Some(company) = get("COMPANY_NAME") {
        config.footer.company_name = company;
    }
    if let Some(site) = get("SITE_NAME") {
        config.footer.site_name = site;
    }
    if let Some(domain) = get("SHOPIFY_STORE_DOMAIN") {
        config.commerce.store_domain = if domain.starts_with("http://") || domain.starts_with("https://") {
            domain
        } else {
            format!("https://{}", domain)
        };
    }
    if let Some(token) = get("SHOPIFY_STOREFRONT_ACCESS_TOKEN") {
        config.commerce.storefront_access_token = token;
    }
}
