pub mod image_item;
pub mod media_item;
pub mod video_item;

pub use image_item::ImageItem;
pub use media_item::{Identified, MediaItem};
pub use video_item::VideoItem;
