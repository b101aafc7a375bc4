//! Menu types and error definitions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single navigation link in the footer menu.
///
/// Entries keep the order the commerce backend returned them in; duplicate
/// paths are passed through as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub title: String,
    pub path: String,
}

impl MenuEntry {
    pub fn new(title: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            path: path.into(),
        }
    }
}

/// Errors that can occur while fetching a menu.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MenuError {
    /// The fetch did not complete within its deadline.
    #[error("menu request timed out after {0} ms")]
    Timeout(u64),

    /// The fetch completed but the backend or transport rejected it.
    #[error("menu fetch failed: {0}")]
    Fetch(String),

    /// The fetch completed but the payload was not a list of menu entries.
    #[error("malformed menu response: {0}")]
    MalformedResponse(String),
}

impl MenuError {
    /// Short label used in log fields and metric labels.
    pub fn kind(&self) -> &'static str {
        match self {
            MenuError::Timeout(_) => "timeout",
            MenuError::Fetch(_) => "fetch",
            MenuError::MalformedResponse(_) => "malformed_response",
        }
    }
}

pub type MenuResult<T> = Result<T, MenuError>;
