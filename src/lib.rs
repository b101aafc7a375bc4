//! Storefront footer service library.

pub mod commerce;
pub mod config;
pub mod footer;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod resilience;

pub use config::schema::AppConfig;
pub use footer::{FooterRenderer, RenderModel};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
