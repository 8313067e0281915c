pub mod domain;

// Re-export commonly used types
pub use domain::{ContentType, Identified, ImageItem, MediaId, MediaItem, MediaKey, VideoItem};
