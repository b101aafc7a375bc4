//! Footer render model and the pure helpers that assemble it.

use serde::Serialize;

use crate::commerce::MenuEntry;
use crate::config::{FooterConfig, LinkConfig};

/// Copyright holder used when neither company nor site name is configured.
pub const DEFAULT_DISPLAY_NAME: &str = "Your Company Name";

/// Brand label used when no site name is configured.
pub const DEFAULT_SITE_LABEL: &str = "Site Name";

/// Skeleton blocks shown while the menu is loading.
pub const PLACEHOLDER_BLOCKS: usize = 6;

/// Everything the footer markup needs for one render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderModel {
    pub copyright_range: String,
    pub display_name: String,
    pub site_label: String,
    pub copyright_notice: String,
    pub menu: Vec<MenuEntry>,
    pub links: Vec<FooterLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FooterLink {
    pub label: String,
    pub href: String,
}

impl From<&LinkConfig> for FooterLink {
    fn from(link: &LinkConfig) -> Self {
        Self {
            label: link.label.clone(),
            href: link.href.clone(),
        }
    }
}

/// Pending-state skeleton for the menu column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FooterPlaceholder {
    pub blocks: usize,
}

impl Default for FooterPlaceholder {
    fn default() -> Self {
        Self {
            blocks: PLACEHOLDER_BLOCKS,
        }
    }
}

impl RenderModel {
    /// Assemble a model for `current_year` around an already-resolved menu.
    pub fn assemble(config: &FooterConfig, current_year: i32, menu: Vec<MenuEntry>) -> Self {
        let copyright_range = copyright_range(config.start_year, current_year);
        let display_name = display_name(&config.company_name, &config.site_name).to_string();
        let copyright_notice = copyright_notice(&copyright_range, &display_name);

        Self {
            site_label: site_label(&config.site_name).to_string(),
            copyright_range,
            display_name,
            copyright_notice,
            menu,
            links: config.links.iter().map(FooterLink::from).collect(),
        }
    }
}

/// "2023" in the start year, "2023-2025" afterwards.
pub fn copyright_range(start_year: i32, current_year: i32) -> String {
    if current_year > start_year {
        format!("{}-{}", start_year, current_year)
    } else {
        start_year.to_string()
    }
}

/// First non-empty of company name and site name.
pub fn display_name<'a>(company_name: &'a str, site_name: &'a str) -> &'a str {
    [company_name, site_name]
        .into_iter()
        .find(|name| !name.is_empty())
        .unwrap_or(DEFAULT_DISPLAY_NAME)
}

pub fn site_label(site_name: &str) -> &str {
    if site_name.is_empty() {
        DEFAULT_SITE_LABEL
    } else {
        site_name
    }
}

/// The full copyright sentence, without doubling a trailing period.
pub fn copyright_notice(range: &str, name: &str) -> String {
    let period = if !name.is_empty() && !name.ends_with('.') { "." } else { "" };
    format!("© {} {}{} All rights reserved.", range, name, period)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_range() {
        assert_eq!(copyright_range(2023, 2023), "2023");
        assert_eq!(copyright_range(2023, 2024), "2023-2024");
        assert_eq!(copyright_range(2023, 2031), "2023-2031");
        // A clock behind the start year still shows the start year alone.
        assert_eq!(copyright_range(2023, 2019), "2023");
    }

    #[test]
    fn test_display_name_resolution_order() {
        assert_eq!(display_name("Acme", "Shop"), "Acme");
        assert_eq!(display_name("", "Shop"), "Shop");
        assert_eq!(display_name("", ""), DEFAULT_DISPLAY_NAME);
    }

    #[test]
    fn test_site_label() {
        assert_eq!(site_label("Acme Store"), "Acme Store");
        assert_eq!(site_label(""), "Site Name");
    }

    #[test]
    fn test_copyright_notice_punctuation() {
        assert_eq!(
            copyright_notice("2023-2025", "Acme Store"),
            "© 2023-2025 Acme Store. All rights reserved."
        );
        assert_eq!(
            copyright_notice("2023", "Acme Inc."),
            "© 2023 Acme Inc. All rights reserved."
        );
    }

    #[test]
    fn test_assemble_serializes_camel_case() {
        let config = FooterConfig {
            site_name: "Acme Store".to_string(),
            links: Vec::new(),
            ..FooterConfig::default()
        };
        let model = RenderModel::assemble(&config, 2025, vec![MenuEntry::new("About", "/about")]);

        let json = serde_json::to_value(&model).unwrap();
        assert_eq!(json["copyrightRange"], "2023-2025");
        assert_eq!(json["displayName"], "Acme Store");
        assert_eq!(json["siteLabel"], "Acme Store");
        assert_eq!(json["menu"][0]["path"], "/about");
    }

    #[test]
    fn test_placeholder_has_six_blocks() {
        assert_eq!(FooterPlaceholder::default().blocks, 6);
    }
}
