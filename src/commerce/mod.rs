//! Commerce backend integration.
//!
//! # Data Flow
//! ```text
//! FooterRenderer
//!     → MenuSource::fetch_menu(handle)
//!     → client.rs (GraphQL POST to the Storefront API)
//!     → parse_menu (payload → Vec<MenuEntry> or MenuError)
//! ```
//!
//! # Design Decisions
//! - The menu source is a trait so renders can be tested against stubs
//! - Payload validation lives next to the wire format, not in the renderer

pub mod client;
pub mod types;

pub use client::{parse_menu, MenuSource, ShopifyMenuSource};
pub use types::{MenuEntry, MenuError, MenuResult};
