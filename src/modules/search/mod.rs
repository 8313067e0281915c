pub mod application;
pub mod commands;
pub mod domain;

// Re-export commonly used types
pub use application::{
    ImagePagingSource, LoadOutcome, Pager, SearchHit, SearchOutcome, SearchService,
    SearchSession, SearchSnapshot,
};
pub use domain::PagingSource;
