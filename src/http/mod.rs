//! HTTP surface.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum router, trace + timeout layers)
//!     → GET /footer → FooterRenderer::render → JSON RenderModel
//!     → GET /footer/placeholder → JSON FooterPlaceholder
//! ```

pub mod server;

pub use server::HttpServer;
