// Shared kernel used by every bounded context (search, favorites, detail)

pub mod application; // Paging primitives
pub mod config; // Environment-driven configuration
pub mod errors; // Shared error types
pub mod infrastructure; // Database pool and migrations
pub mod utils; // Logging helpers

// Re-exports for convenience
pub use config::AppConfig;
pub use errors::{AppError, AppResult};
pub use infrastructure::database::Database;
