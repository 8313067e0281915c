pub mod favorite_ids;
pub mod favorite_record;

pub use favorite_ids::FavoriteIds;
pub use favorite_record::FavoriteRecord;
