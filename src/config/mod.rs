//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize, overlay environment)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → handed to the renderer and server at startup
//! ```
//!
//! # Design Decisions
//! - Environment is read once at startup, never at render time
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{apply_env_overrides, load_config, ConfigError};
pub use validation::{validate_config, ValidationError};
pub use schema::AppConfig;
pub use schema::CommerceConfig;
pub use schema::FooterConfig;
pub use schema::LinkConfig;
pub use schema::ListenerConfig;
pub use schema::ObservabilityConfig;
