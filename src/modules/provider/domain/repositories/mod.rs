pub mod media_provider_repo;

pub use media_provider_repo::{MediaProviderRepository, SearchPage};
