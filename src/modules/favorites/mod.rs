pub mod application;
pub mod commands;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types
pub use application::FavoritesService;
pub use domain::{FavoriteIds, FavoriteRecord, MediaRecordRepository};
pub use infrastructure::MediaRecordRepositoryImpl;
