//! Footer renderer.
//!
//! # Responsibilities
//! - Fetch the footer menu under a hard deadline
//! - Absorb every fetch failure into an empty menu, logging why
//! - Assemble a [`RenderModel`] that is always well-formed
//!
//! # State Transitions
//! ```text
//! FETCHING → RESOLVED (menu)
//! FETCHING → RESOLVED (empty fallback)
//! ```
//! No retries and no state carried between renders.

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{Datelike, Utc};

use crate::commerce::{MenuEntry, MenuError, MenuResult, MenuSource};
use crate::config::FooterConfig;
use crate::footer::model::RenderModel;
use crate::observability::metrics;
use crate::resilience::{with_deadline, DeadlineError};

/// Renders the footer from static config and a menu source.
pub struct FooterRenderer<S> {
    config: FooterConfig,
    source: Arc<S>,
}

impl<S> Clone for FooterRenderer<S> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            source: self.source.clone(),
        }
    }
}

impl<S: MenuSource> FooterRenderer<S> {
    pub fn new(config: FooterConfig, source: S) -> Self {
        Self {
            config,
            source: Arc::new(source),
        }
    }

    pub fn config(&self) -> &FooterConfig {
        &self.config
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.config.fetch_timeout_ms)
    }

    /// Fetch the configured menu under the deadline, surfacing any failure.
    pub async fn load_menu(&self) -> MenuResult<Vec<MenuEntry>> {
        let start = Instant::now();
        let result = with_deadline(
            self.fetch_timeout(),
            self.source.fetch_menu(&self.config.menu_handle),
        )
        .await
        .map_err(|e| match e {
            DeadlineError::Elapsed(after) => MenuError::Timeout(after.as_millis() as u64),
            DeadlineError::Failed(inner) => inner,
        });

        let outcome = match &result {
            Ok(_) => "ok",
            Err(e) => e.kind(),
        };
        metrics::record_menu_fetch(outcome, start);

        result
    }

    /// Fetch the menu, substituting an empty one on any failure.
    pub async fn menu_or_empty(&self) -> Vec<MenuEntry> {
        match self.load_menu().await {
            Ok(menu) => menu,
            Err(e) => {
                tracing::warn!(
                    kind = e.kind(),
                    error = %e,
                    handle = %self.config.menu_handle,
                    "Failed to fetch footer menu, rendering without it"
                );
                Vec::new()
            }
        }
    }

    /// Render for an explicit year.
    pub async fn render_for_year(&self, current_year: i32) -> RenderModel {
        let menu = self.menu_or_empty().await;
        let model = RenderModel::assemble(&self.config, current_year, menu);

        tracing::debug!(
            menu_items = model.menu.len(),
            copyright_range = %model.copyright_range,
            "Footer rendered"
        );
        metrics::record_render();

        model
    }

    /// Render against the wall clock.
    pub async fn render(&self) -> RenderModel {
        self.render_for_year(Utc::now().year()).await
    }
}
