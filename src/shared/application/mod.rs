/// Shared application layer patterns
///
/// Paging primitives used by the search context.
pub mod pagination;

pub use pagination::*;
