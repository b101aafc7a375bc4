//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the footer service.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Menu handle requested from the commerce backend.
pub const DEFAULT_MENU_HANDLE: &str = "next-js-frontend-footer-menu";

/// First year shown in the copyright range.
pub const DEFAULT_START_YEAR: i32 = 2023;

/// Deadline for the menu fetch in milliseconds.
pub const DEFAULT_FETCH_TIMEOUT_MS: u64 = 5000;

/// Root configuration for the footer service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Listener configuration (bind address, request timeout).
    pub listener: ListenerConfig,

    /// Footer content and menu fetch settings.
    pub footer: FooterConfig,

    /// Commerce backend connection settings.
    pub commerce: CommerceConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:3000").
    pub bind_address: String,

    /// Request timeout for the HTTP surface in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
            request_timeout_secs: 10,
        }
    }
}

/// Footer branding and menu settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FooterConfig {
    /// Storefront name shown next to the logo.
    pub site_name: String,

    /// Legal entity named in the copyright line.
    pub company_name: String,

    /// Menu handle requested from the commerce backend.
    pub menu_handle: String,

    /// Menu fetch deadline in milliseconds. Zero disables the menu.
    pub fetch_timeout_ms: u64,

    /// First year of the copyright range.
    pub start_year: i32,

    /// Static links rendered after the copyright line.
    pub links: Vec<LinkConfig>,
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            site_name: String::new(),
            company_name: String::new(),
            menu_handle: DEFAULT_MENU_HANDLE.to_string(),
            fetch_timeout_ms: DEFAULT_FETCH_TIMEOUT_MS,
            start_year: DEFAULT_START_YEAR,
            links: default_links(),
        }
    }
}

/// A static footer link.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LinkConfig {
    pub label: String,
    pub href: String,
}

fn default_links() -> Vec<LinkConfig> {
    vec![
        LinkConfig {
            label: "View the source".to_string(),
            href: "https://github.com/vercel/commerce".to_string(),
        },
        LinkConfig {
            label: "Created by ▲ Vercel".to_string(),
            href: "https://vercel.com".to_string(),
        },
    ]
}

/// Commerce backend (Shopify Storefront API) configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CommerceConfig {
    /// Store origin, e.g. "https://example.myshopify.com".
    pub store_domain: String,

    /// GraphQL endpoint path appended to the store domain.
    pub api_path: String,

    /// Storefront API access token.
    pub storefront_access_token: String,
}

impl Default for CommerceConfig {
    fn default() -> Self {
        Self {
            store_domain: "https://example.myshopify.com".to_string(),
            api_path: "/api/2023-01/graphql.json".to_string(),
            storefront_access_token: String::new(),
        }
    }
}

impl CommerceConfig {
    /// Full GraphQL endpoint URL.
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.store_domain.trim_end_matches('/'), self.api_path)
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
