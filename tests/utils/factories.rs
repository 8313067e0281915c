/// Test data factories using builder pattern
///
/// Provides convenient methods to create media items with sensible defaults
use edicon_lib::modules::media::{ImageItem, MediaId, VideoItem};
use edicon_lib::modules::provider::SearchPage;

pub struct ImageFactory {
    id: MediaId,
    tags: String,
    user: String,
    likes: i64,
}

impl ImageFactory {
    pub fn new(id: MediaId) -> Self {
        Self {
            id,
            tags: "nature, flower".to_string(),
            user: "tester".to_string(),
            likes: 0,
        }
    }

    pub fn tags(mut self, tags: &str) -> Self {
        self.tags = tags.to_string();
        self
    }

    pub fn likes(mut self, likes: i64) -> Self {
        self.likes = likes;
        self
    }

    pub fn build(self) -> ImageItem {
        ImageItem::new(self.id, self.tags, self.user)
            .with_urls(
                Some(format!("https://cdn.pixabay.com/photo/{}_150.jpg", self.id)),
                Some(format!("https://pixabay.com/get/{}_640.jpg", self.id)),
                Some(format!("https://pixabay.com/get/{}_1280.jpg", self.id)),
            )
            .with_stats(100, 10, self.likes)
            .with_kind("photo")
    }
}

pub struct VideoFactory {
    id: MediaId,
    tags: String,
    duration: i64,
}

impl VideoFactory {
    pub fn new(id: MediaId) -> Self {
        Self {
            id,
            tags: "ocean, waves".to_string(),
            duration: 30,
        }
    }

    pub fn duration(mut self, seconds: i64) -> Self {
        self.duration = seconds;
        self
    }

    pub fn build(self) -> VideoItem {
        VideoItem::new(
            self.id,
            self.tags,
            "tester",
            format!("https://cdn.pixabay.com/video/{}_large.mp4", self.id),
            format!("https://i.vimeocdn.com/video/{}_640x360.jpg", self.id),
        )
        .with_page_url(format!("https://pixabay.com/videos/id-{}/", self.id))
        .with_duration(self.duration)
        .with_kind("film")
    }
}

pub fn image(id: MediaId) -> ImageItem {
    ImageFactory::new(id).build()
}

pub fn video(id: MediaId) -> VideoItem {
    VideoFactory::new(id).build()
}

/// A result page containing images with the given ids
pub fn image_page(
    ids: impl IntoIterator<Item = MediaId>,
    total_hits: u64,
) -> SearchPage<ImageItem> {
    let hits: Vec<ImageItem> = ids.into_iter().map(image).collect();
    SearchPage::new(total_hits, total_hits, hits)
}
