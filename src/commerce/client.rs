//! Shopify Storefront API menu client.
//!
//! # Responsibilities
//! - Query a menu by handle over GraphQL
//! - Decode the payload into [`MenuEntry`] values, rejecting malformed shapes
//! - Rewrite storefront URLs into site-relative paths
//!
//! No timeout is applied here; callers bound latency with
//! [`crate::resilience::with_deadline`].

use std::future::Future;

use serde_json::{json, Value};

use crate::commerce::types::{MenuEntry, MenuError, MenuResult};
use crate::config::CommerceConfig;

const GET_MENU_QUERY: &str =
    "query getMenu($handle: String!) { menu(handle: $handle) { items { title url } } }";

const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Storefront-Access-Token";

/// Capability to fetch a menu by its handle.
pub trait MenuSource: Send + Sync {
    fn fetch_menu(&self, handle: &str) -> impl Future<Output = MenuResult<Vec<MenuEntry>>> + Send;
}

/// Menu source backed by the Shopify Storefront GraphQL API.
#[derive(Clone)]
pub struct ShopifyMenuSource {
    client: reqwest::Client,
    endpoint: String,
    store_domain: String,
    access_token: String,
}

impl ShopifyMenuSource {
    pub fn new(config: &CommerceConfig) -> Self {
        Self::with_client(config, reqwest::Client::new())
    }

    /// Build a source around an existing HTTP client.
    pub fn with_client(config: &CommerceConfig, client: reqwest::Client) -> Self {
        Self {
            client,
            endpoint: config.endpoint(),
            store_domain: config.store_domain.trim_end_matches('/').to_string(),
            access_token: config.storefront_access_token.clone(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl MenuSource for ShopifyMenuSource {
    async fn fetch_menu(&self, handle: &str) -> MenuResult<Vec<MenuEntry>> {
        let body = json!({
            "query": GET_MENU_QUERY,
            "variables": { "handle": handle },
        });

        let response = self
            .client
            .post(&self.endpoint)
            .header(ACCESS_TOKEN_HEADER, &self.access_token)
            .json(&body)
            .send()
            .await
            .map_err(|e| MenuError::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(MenuError::Fetch(format!("commerce backend returned {}", status)));
        }

        let text = response
            .text()
            .await
            .map_err(|e| MenuError::Fetch(e.to_string()))?;
        let payload: Value = serde_json::from_str(&text)
            .map_err(|e| MenuError::MalformedResponse(format!("body is not JSON: {}", e)))?;

        tracing::debug!(handle = %handle, endpoint = %self.endpoint, "Menu response received");

        parse_menu(&payload, &self.store_domain)
    }
}

/// Decode a Storefront `getMenu` response.
///
/// A missing menu decodes to an empty list; a present menu whose items are
/// not a list of `{title, url}` strings is malformed.
pub fn parse_menu(payload: &Value, store_domain: &str) -> MenuResult<Vec<MenuEntry>> {
    if let Some(errors) = payload.get("errors").and_then(Value::as_array) {
        let messages: Vec<&str> = errors
            .iter()
            .filter_map(|e| e.get("message").and_then(Value::as_str))
            .collect();
        return Err(MenuError::Fetch(format!("GraphQL errors: {}", messages.join("; "))));
    }

    let menu = match payload.get("data").and_then(|d| d.get("menu")) {
        Some(Value::Null) | None => return Ok(Vec::new()),
        Some(menu) => menu,
    };

    let items = menu
        .get("items")
        .and_then(Value::as_array)
        .ok_or_else(|| MenuError::MalformedResponse("menu.items is not an array".to_string()))?;

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let title = item.get("title").and_then(Value::as_str);
            let url = item.get("url").and_then(Value::as_str);
            match (title, url) {
                (Some(title), Some(url)) => Ok(MenuEntry::new(title, storefront_path(url, store_domain))),
                _ => Err(MenuError::MalformedResponse(format!(
                    "menu item {} lacks a string title and url",
                    i
                ))),
            }
        })
        .collect()
}

/// Turn an absolute storefront URL into a site-relative path.
pub fn storefront_path(url: &str, store_domain: &str) -> String {
    let path = if store_domain.is_empty() {
        url
    } else {
        url.strip_prefix(store_domain).unwrap_or(url)
    };
    path.replacen("/collections", "/search", 1).replacen("/pages", "", 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOMAIN: &str = "https://acme.myshopify.com";

    #[test]
    fn test_parse_menu_items() {
        let payload = json!({
            "data": { "menu": { "items": [
                { "title": "About", "url": "https://acme.myshopify.com/pages/about" },
                { "title": "Shirts", "url": "https://acme.myshopify.com/collections/shirts" },
                { "title": "Blog", "url": "https://blog.example.com/" },
                { "title": "Sale", "url": "https://acme.myshopify.com/collections/collections-sale" },
                { "title": "FAQ", "url": "https://acme.myshopify.com/pages/pages-faq" },
            ]}}
        });

        let menu = parse_menu(&payload, DOMAIN).unwrap();
        assert_eq!(
            menu,
            vec![
                MenuEntry::new("About", "/about"),
                MenuEntry::new("Shirts", "/search/shirts"),
                MenuEntry::new("Blog", "https://blog.example.com/"),
                MenuEntry::new("Sale", "/search/collections-sale"),
                MenuEntry::new("FAQ", "/pages-faq"),
            ]
        );
    }

    #[test]
    fn test_missing_menu_is_empty() {
        let payload = json!({ "data": { "menu": null } });
        assert_eq!(parse_menu(&payload, DOMAIN), Ok(Vec::new()));
    }

    #[test]
    fn test_items_not_a_list_is_malformed() {
        let payload = json!({ "data": { "menu": { "items": { "title": "About" } } } });
        let err = parse_menu(&payload, DOMAIN).unwrap_err();
        assert_eq!(err.kind(), "malformed_response");
    }

    #[test]
    fn test_item_without_url_is_malformed() {
        let payload = json!({ "data": { "menu": { "items": [ { "title": "About" } ] } } });
        assert!(matches!(
            parse_menu(&payload, DOMAIN),
            Err(MenuError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_graphql_errors_are_fetch_errors() {
        let payload = json!({ "errors": [ { "message": "Access denied" } ] });
        assert_eq!(
            parse_menu(&payload, DOMAIN),
            Err(MenuError::Fetch("GraphQL errors: Access denied".to_string()))
        );
    }

    #[test]
    fn test_storefront_path_without_domain() {
        assert_eq!(storefront_path("/pages/contact", ""), "/contact");
    }
}
