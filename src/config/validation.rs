//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, years sane)
//! - Check the commerce endpoint forms a usable URL
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::AppConfig;

/// A single semantic problem with a loaded configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("listener.bind_address '{0}' is not a socket address")]
    BindAddress(String),

    #[error("listener.request_timeout_secs must be greater than 0")]
    RequestTimeout,

    #[error("footer.fetch_timeout_ms {fetch_ms} must be below the {request_ms} ms request timeout")]
    FetchTimeout { fetch_ms: u64, request_ms: u64 },

    #[error("footer.menu_handle must not be empty")]
    MenuHandle,

    #[error("footer.start_year {0} is out of range")]
    StartYear(i32),

    #[error("commerce endpoint '{0}' is not a valid http(s) URL")]
    Endpoint(String),

    #[error("observability.metrics_address '{0}' is not a socket address")]
    MetricsAddress(String),
}

pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(config.listener.bind_address.clone()));
    }
    if config.listener.request_timeout_secs == 0 {
        errors.push(ValidationError::RequestTimeout);
    }

    // The menu deadline has to fire before the request timeout, or a hanging
    // backend turns into a 408 instead of an empty menu.
    let request_ms = config.listener.request_timeout_secs.saturating_mul(1000);
    if config.listener.request_timeout_secs > 0 && config.footer.fetch_timeout_ms >= request_ms {
        errors.push(ValidationError::FetchTimeout {
            fetch_ms: config.footer.fetch_timeout_ms,
            request_ms,
        });
    }

    if config.footer.menu_handle.trim().is_empty() {
        errors.push(ValidationError::MenuHandle);
    }
    if !(1970..=9999).contains(&config.footer.start_year) {
        errors.push(ValidationError::StartYear(config.footer.start_year));
    }

    let endpoint = config.commerce.endpoint();
    match url::Url::parse(&endpoint) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.host().is_some() => {}
        _ => errors.push(ValidationError::Endpoint(endpoint)),
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::MetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
