pub mod entities;
pub mod value_objects;

pub use entities::{Identified, ImageItem, MediaItem, VideoItem};
pub use value_objects::{ContentType, MediaId, MediaKey};
