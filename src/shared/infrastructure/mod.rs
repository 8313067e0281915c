/// Shared infrastructure concerns
///
/// Infrastructure implementations shared across the bounded contexts.
pub mod database;

pub use database::{Database, DbConnection, DbPool};
