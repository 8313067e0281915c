pub mod content_type;
pub mod media_key;

pub use content_type::ContentType;
pub use media_key::{MediaId, MediaKey};
