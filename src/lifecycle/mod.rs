//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Validate → Build renderer → Start listener
//!
//! Shutdown (shutdown.rs):
//!     Ctrl+C → broadcast → server stops accepting → in-flight renders finish
//! ```

pub mod shutdown;

pub use shutdown::Shutdown;
