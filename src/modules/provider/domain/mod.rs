pub mod repositories;

pub use repositories::{MediaProviderRepository, SearchPage};
