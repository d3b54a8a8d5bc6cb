use std::time::Duration;

#[cfg(feature = "postgres")]
use std::sync::Arc;

#[cfg(feature = "postgres")]
use sea_orm::{ConnectOptions, Database, DbConn, DbErr};

/// Configuration for the post database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 100,
            min_connections: 10,
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Process-wide database handle.
///
/// Created once at startup with [`DatabaseHandle::init`], shared with every
/// repository through an `Arc` of the pooled connection, and released with
/// [`DatabaseHandle::close`] on shutdown.
///
/// # Example
/// ```ignore
/// let handle = DatabaseHandle::init(&config).await?;
/// let repo = PostgresPostRepository::shared(handle.conn());
/// // ... serve requests ...
/// handle.close().await?;
/// ```
#[cfg(feature = "postgres")]
pub struct DatabaseHandle {
    conn: Arc<DbConn>,
}

#[cfg(feature = "postgres")]
impl DatabaseHandle {
    /// Open the connection pool described by `config`.
    pub async fn init(config: &DatabaseConfig) -> Result<Self, DbErr> {
        tracing::info!("Initializing database connection...");

        let opts = ConnectOptions::new(&config.url)
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(config.connect_timeout)
            .idle_timeout(Duration::from_secs(300))
            .sqlx_logging(true)
            .to_owned();

        let conn = Database::connect(opts).await?;
        tracing::info!(pool = config.max_connections, "Database connected");

        Ok(Self {
            conn: Arc::new(conn),
        })
    }

    /// The shared connection, for building repositories.
    pub fn conn(&self) -> Arc<DbConn> {
        Arc::clone(&self.conn)
    }

    /// Check that the database answers.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.conn.ping().await
    }

    /// Close the pool.
    ///
    /// Only closes once every repository holding the connection is gone;
    /// otherwise the pool is released when the last holder drops it.
    pub async fn close(self) -> Result<(), DbErr> {
        match Arc::try_unwrap(self.conn) {
            Ok(conn) => {
                tracing::info!("Closing database connection");
                conn.close().await
            }
            Err(_) => {
                tracing::warn!("Database connection still shared; leaving pool to drop");
                Ok(())
            }
        }
    }
}
