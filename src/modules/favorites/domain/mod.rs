pub mod entities;
pub mod repositories;

pub use entities::{FavoriteIds, FavoriteRecord};
pub use repositories::MediaRecordRepository;
