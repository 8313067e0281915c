use super::models::{ImageHit, VideoHit};
use crate::modules::media::{ImageItem, VideoItem};
use crate::shared::errors::AppError;

/// Converts provider wire models into domain media items
pub trait MediaMapper<T> {
    type Item;

    /// Map one provider record
    fn map_item(&self, source: T) -> Result<Self::Item, AppError>;

    /// Map a page of records, dropping (and logging) the ones that cannot be shown
    fn map_list(&self, sources: Vec<T>) -> Vec<Self::Item> {
        sources
            .into_iter()
            .filter_map(|source| match self.map_item(source) {
                Ok(item) => Some(item),
                Err(e) => {
                    log::warn!("Pixabay: skipping unusable hit: {}", e);
                    None
                }
            })
            .collect()
    }
}

/// Pixabay specific mapper implementation
#[derive(Debug, Default, Clone, Copy)]
pub struct PixabayMapper;

impl PixabayMapper {
    pub fn new() -> Self {
        Self
    }

    /// Treat empty strings from the API as missing
    fn non_empty(value: Option<String>) -> Option<String> {
        value.filter(|v| !v.trim().is_empty())
    }
}

impl MediaMapper<ImageHit> for PixabayMapper {
    type Item = ImageItem;

    fn map_item(&self, hit: ImageHit) -> Result<ImageItem, AppError> {
        let preview_url = Self::non_empty(hit.preview_url);
        let web_format_url = Self::non_empty(hit.webformat_url);
        // imageURL needs full API access; largeImageURL is the public fallback
        let full_url = Self::non_empty(hit.image_url).or(Self::non_empty(hit.large_image_url));

        if preview_url.is_none() && web_format_url.is_none() && full_url.is_none() {
            return Err(AppError::SerializationError(format!(
                "Image {} has no usable URL",
                hit.id
            )));
        }

        Ok(ImageItem::new(hit.id, hit.tags, hit.user)
            .with_urls(preview_url, web_format_url, full_url)
            .with_stats(hit.views, hit.downloads, hit.likes)
            .with_kind(hit.r#type))
    }
}

impl MediaMapper<VideoHit> for PixabayMapper {
    type Item = VideoItem;

    fn map_item(&self, hit: VideoHit) -> Result<VideoItem, AppError> {
        let rendition = hit.videos.best().ok_or_else(|| {
            AppError::SerializationError(format!("Video {} has no playable rendition", hit.id))
        })?;

        Ok(VideoItem::new(
            hit.id,
            hit.tags.clone(),
            hit.user.clone(),
            rendition.url.clone(),
            rendition.thumbnail.clone(),
        )
        .with_page_url(hit.page_url.clone())
        .with_duration(hit.duration)
        .with_stats(hit.views, hit.downloads, hit.likes)
        .with_kind(hit.r#type.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::super::models::{VideoRendition, VideoRenditions};
    use super::*;

    fn image_hit(id: i64) -> ImageHit {
        ImageHit {
            id,
            r#type: "photo".to_string(),
            tags: "flower, nature".to_string(),
            preview_url: Some("https://cdn.pixabay.com/p_150.jpg".to_string()),
            webformat_url: Some("https://pixabay.com/get/w_640.jpg".to_string()),
            large_image_url: Some("https://pixabay.com/get/l_1280.jpg".to_string()),
            image_url: None,
            views: 10,
            downloads: 5,
            likes: 2,
            user: "ann".to_string(),
        }
    }

    fn rendition(url: &str) -> Option<VideoRendition> {
        Some(VideoRendition {
            url: url.to_string(),
            width: 1920,
            height: 1080,
            size: 1_000,
            thumbnail: format!("{}.jpg", url),
        })
    }

    #[test]
    fn image_falls_back_to_large_image_url() {
        let image = PixabayMapper::new().map_item(image_hit(1)).unwrap();
        assert_eq!(image.full_url.as_deref(), Some("https://pixabay.com/get/l_1280.jpg"));
        assert_eq!(image.kind, "photo");
        assert_eq!(image.likes, 2);
    }

    #[test]
    fn image_prefers_full_access_url() {
        let mut hit = image_hit(1);
        hit.image_url = Some("https://pixabay.com/get/original.jpg".to_string());
        let image = PixabayMapper::new().map_item(hit).unwrap();
        assert_eq!(image.full_url.as_deref(), Some("https://pixabay.com/get/original.jpg"));
    }

    #[test]
    fn image_without_urls_is_rejected() {
        let mut hit = image_hit(1);
        hit.preview_url = Some(String::new());
        hit.webformat_url = None;
        hit.large_image_url = None;
        assert!(PixabayMapper::new().map_item(hit).is_err());
    }

    #[test]
    fn video_uses_largest_available_rendition() {
        let hit = VideoHit {
            id: 7,
            r#type: "film".to_string(),
            tags: "river".to_string(),
            duration: 12,
            page_url: "https://pixabay.com/videos/id-7/".to_string(),
            videos: VideoRenditions {
                large: rendition(""),
                medium: rendition("https://cdn.pixabay.com/medium.mp4"),
                small: rendition("https://cdn.pixabay.com/small.mp4"),
                tiny: None,
            },
            views: 1,
            downloads: 1,
            likes: 1,
            user: "bo".to_string(),
        };

        let video = PixabayMapper::new().map_item(hit).unwrap();
        assert_eq!(video.video_url, "https://cdn.pixabay.com/medium.mp4");
        assert_eq!(video.thumbnail_url, "https://cdn.pixabay.com/medium.mp4.jpg");
        assert_eq!(video.duration, 12);
    }

    #[test]
    fn map_list_skips_bad_hits() {
        let mut bad = image_hit(2);
        bad.preview_url = None;
        bad.webformat_url = None;
        bad.large_image_url = None;

        let items = PixabayMapper::new().map_list(vec![image_hit(1), bad, image_hit(3)]);
        let ids: Vec<i64> = items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }
}
