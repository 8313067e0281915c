pub mod favorite_flag;
pub mod service;

pub use favorite_flag::FavoriteFlag;
pub use service::DetailService;
