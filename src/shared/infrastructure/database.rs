use crate::log_info;
use crate::shared::errors::AppError;
use crate::shared::utils::logger::LogContext;
use diesel::connection::SimpleConnection;
use diesel::r2d2::{self, ConnectionManager, CustomizeConnection, Pool};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use std::time::Duration;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = r2d2::PooledConnection<ConnectionManager<SqliteConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

const IN_MEMORY: &str = ":memory:";

/// Per-connection SQLite settings applied when the pool opens a connection
#[derive(Debug, Clone, Copy)]
struct ConnectionOptions {
    busy_timeout: Duration,
}

impl CustomizeConnection<SqliteConnection, r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), r2d2::Error> {
        conn.batch_execute(&format!(
            "PRAGMA busy_timeout = {}; PRAGMA synchronous = NORMAL;",
            self.busy_timeout.as_millis()
        ))
        .map_err(r2d2::Error::QueryError)
    }
}

/// Local favorites database (SQLite file on the device)
#[derive(Debug)]
pub struct Database {
    pool: DbPool,
}

impl Database {
    /// Open (or create) the database at `database_url` and apply pending migrations
    pub fn new(database_url: &str) -> Result<Self, AppError> {
        let database_url = Self::validate_database_url(database_url)?;
        let in_memory = database_url == IN_MEMORY;

        let manager = ConnectionManager::<SqliteConnection>::new(database_url.as_str());

        // An in-memory database lives only as long as its single connection,
        // so the pool must never open a second one or recycle the first.
        let mut builder = r2d2::Pool::builder()
            .connection_timeout(Duration::from_secs(10))
            .connection_customizer(Box::new(ConnectionOptions {
                busy_timeout: Duration::from_secs(5),
            }));

        builder = if in_memory {
            builder
                .max_size(1)
                .min_idle(Some(1))
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            // SQLite serialises writers; a handful of readers is plenty on a phone
            builder
                .max_size(4)
                .min_idle(Some(1))
                .idle_timeout(Some(Duration::from_secs(300)))
        };

        let pool = builder.build(manager).map_err(|e| {
            AppError::DatabaseError(format!("Failed to create connection pool: {}", e))
        })?;

        let database = Self { pool };
        database.run_migrations()?;

        log_info!(
            "Database initialized at '{}' (pool max_size: {})",
            database_url,
            database.pool.max_size()
        );

        Ok(database)
    }

    /// Open a private in-memory database (handy for tests and previews)
    pub fn in_memory() -> Result<Self, AppError> {
        Self::new(IN_MEMORY)
    }

    fn validate_database_url(database_url: &str) -> Result<String, AppError> {
        let trimmed = database_url.trim();
        let path = trimmed.strip_prefix("sqlite://").unwrap_or(trimmed);

        if path.is_empty() {
            return Err(AppError::DatabaseError(
                "Database path must not be empty".to_string(),
            ));
        }

        if path.starts_with("postgres://") || path.starts_with("mysql://") {
            return Err(AppError::DatabaseError(format!(
                "Unsupported database URL '{}': only SQLite paths are accepted",
                path
            )));
        }

        Ok(path.to_string())
    }

    fn run_migrations(&self) -> Result<(), AppError> {
        let mut conn = self.get_connection()?;
        let applied = conn.run_pending_migrations(MIGRATIONS).map_err(|e| {
            AppError::DatabaseError(format!("Failed to run database migrations: {}", e))
        })?;

        if !applied.is_empty() {
            log_info!("Applied {} database migration(s)", applied.len());
        }

        Ok(())
    }

    pub fn get_connection(&self) -> Result<DbConnection, AppError> {
        self.pool.get().map_err(|e| {
            LogContext::pool_checkout_failed(&e);
            AppError::from(e)
        })
    }
}
