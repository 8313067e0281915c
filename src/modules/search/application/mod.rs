pub mod image_paging_source;
pub mod pager;
pub mod service;
pub mod session;

pub use image_paging_source::ImagePagingSource;
pub use pager::{LoadOutcome, Pager};
pub use service::{SearchHit, SearchOutcome, SearchService, SearchSnapshot};
pub use session::SearchSession;
