//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::api::BoxOfficeClient;
use crate::config::SiteConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like the session-store pool and the box-office client.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: SiteConfig,
    pool: PgPool,
    box_office: BoxOfficeClient,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: SiteConfig, pool: PgPool) -> Self {
        let box_office = BoxOfficeClient::new(&config.box_office);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                box_office,
            }),
        }
    }

    /// Get a reference to the site configuration.
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.inner.config
    }

    /// Get a reference to the session-store connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Get a reference to the box-office API client.
    #[must_use]
    pub fn box_office(&self) -> &BoxOfficeClient {
        &self.inner.box_office
    }
}
