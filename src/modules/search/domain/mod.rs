pub mod paging_source;

pub use paging_source::PagingSource;
