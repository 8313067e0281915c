pub mod application;
pub mod commands;
pub mod domain;

// Re-export commonly used types
pub use application::{DetailService, FavoriteFlag};
pub use domain::{DetailContent, DetailSource};
