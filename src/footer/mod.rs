//! Footer rendering subsystem.
//!
//! # Data Flow
//! ```text
//! FooterConfig + MenuSource
//!     → renderer.rs (bounded menu fetch, failure → empty menu)
//!     → model.rs (copyright range, display name, notice, links)
//!     → RenderModel (serialized by the HTTP layer or the CLI)
//! ```

pub mod model;
pub mod renderer;

pub use model::{FooterLink, FooterPlaceholder, RenderModel};
pub use renderer::FooterRenderer;
