//! Application state - shared across all handlers.

use std::sync::Arc;

use postboard_core::ports::PostRepository;
use postboard_infra::{DatabaseConfig, InMemoryPostRepository};

#[cfg(feature = "postgres")]
use postboard_infra::{DatabaseHandle, PostgresPostRepository};

/// Shared application state.
///
/// Holds no per-request data; every handler only reads the repository handle.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    #[cfg(feature = "postgres")]
    pub db: Option<Arc<DatabaseHandle>>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "postgres")]
        let state = match db_config {
            Some(config) => match DatabaseHandle::init(config).await {
                Ok(handle) => Self {
                    posts: Arc::new(PostgresPostRepository::shared(handle.conn())),
                    db: Some(Arc::new(handle)),
                },
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                    Self::in_memory()
                }
            },
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Self::in_memory()
            }
        };

        #[cfg(not(feature = "postgres"))]
        let state = {
            if db_config.is_some() {
                tracing::warn!("DATABASE_URL ignored - built without postgres feature");
            }
            tracing::info!("Running without postgres feature - using in-memory repository");
            Self::in_memory()
        };

        tracing::info!(storage = state.storage(), "Application state initialized");
        state
    }

    /// State backed by the given repository and no database handle.
    pub fn with_repository(posts: Arc<dyn PostRepository>) -> Self {
        Self {
            posts,
            #[cfg(feature = "postgres")]
            db: None,
        }
    }

    fn in_memory() -> Self {
        Self::with_repository(Arc::new(InMemoryPostRepository::new()))
    }

    /// Name of the storage backend in use.
    pub fn storage(&self) -> &'static str {
        #[cfg(feature = "postgres")]
        if self.db.is_some() {
            return "postgres";
        }
        "memory"
    }

    /// Check the backing store. Always succeeds without a database.
    pub async fn ping(&self) -> Result<(), String> {
        #[cfg(feature = "postgres")]
        if let Some(db) = &self.db {
            return db.ping().await.map_err(|e| e.to_string());
        }
        Ok(())
    }

    /// Release the database connection, if any.
    ///
    /// The repository goes first so the handle can own the pool again.
    pub async fn shutdown(self) {
        drop(self.posts);

        #[cfg(feature = "postgres")]
        if let Some(db) = self.db {
            match Arc::try_unwrap(db) {
                Ok(handle) => {
                    if let Err(e) = handle.close().await {
                        tracing::error!("Failed to close database connection: {}", e);
                    }
                }
                Err(_) => tracing::warn!("Application state still shared; skipping database close"),
            }
        }
    }
}
