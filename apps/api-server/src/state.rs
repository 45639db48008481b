//! Application state - shared across all handlers.

use std::sync::Arc;

use rutracker_core::ports::{Notifier, PostRepository};

use crate::config::AppConfig;

#[cfg(feature = "postgres")]
use rutracker_infra::{DatabasePool, PostgresPostRepository};

#[cfg(not(feature = "postgres"))]
use rutracker_infra::InMemoryPostRepository;

#[cfg(feature = "telegram")]
use rutracker_infra::TelegramNotifier;

#[cfg(not(feature = "telegram"))]
use rutracker_infra::DisabledNotifier;

/// Shared application state. Holds no per-request data.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub notifier: Arc<dyn Notifier>,
}

/// Resources that must be released explicitly at shutdown.
pub struct Resources {
    #[cfg(feature = "postgres")]
    pool: DatabasePool,
}

impl Resources {
    /// Teardown hook, run after the HTTP server has stopped.
    pub async fn shutdown(self) {
        #[cfg(feature = "postgres")]
        self.pool.close().await;

        tracing::info!("Resources released");
    }
}

impl AppState {
    pub fn new(posts: Arc<dyn PostRepository>, notifier: Arc<dyn Notifier>) -> Self {
        Self { posts, notifier }
    }

    /// Build the application state with appropriate implementations.
    pub async fn init(config: &AppConfig) -> anyhow::Result<(Self, Resources)> {
        #[cfg(feature = "postgres")]
        let (posts, resources): (Arc<dyn PostRepository>, Resources) = {
            let pool = DatabasePool::init(&config.database).await?;
            let repo = Arc::new(PostgresPostRepository::new(pool.conn()));
            (repo, Resources { pool })
        };

        #[cfg(not(feature = "postgres"))]
        let (posts, resources): (Arc<dyn PostRepository>, Resources) = {
            tracing::warn!("Running without postgres feature - posts are kept in memory");
            (Arc::new(InMemoryPostRepository::new()), Resources {})
        };

        #[cfg(feature = "telegram")]
        let notifier: Arc<dyn Notifier> = {
            if config.telegram.bot_token.is_empty() {
                tracing::warn!("TELEGRAM_BOT_TOKEN not set. /send-post will report errors.");
            }
            Arc::new(TelegramNotifier::new(config.telegram.clone())?)
        };

        #[cfg(not(feature = "telegram"))]
        let notifier: Arc<dyn Notifier> = Arc::new(DisabledNotifier);

        tracing::info!("Application state initialized");

        Ok((Self::new(posts, notifier), resources))
    }
}
