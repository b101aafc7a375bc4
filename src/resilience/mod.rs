//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Call to the commerce backend:
//!     → timeouts.rs (race the call against its deadline)
//!     → caller maps Elapsed/Failed into its own error taxonomy
//! ```
//!
//! # Design Decisions
//! - Timeouts are non-negotiable; every external call has a deadline
//! - No retries: a failed call degrades that render, the next render tries again

pub mod timeouts;

pub use timeouts::{with_deadline, DeadlineError};
