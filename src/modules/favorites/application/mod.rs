pub mod service;

pub use service::FavoritesService;
