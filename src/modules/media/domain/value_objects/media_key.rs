use serde::{Deserialize, Serialize};

use super::content_type::ContentType;
use crate::shared::errors::{AppError, AppResult};

/// Remote identifier of a media item. Unique only within one content type.
pub type MediaId = i64;

/// Fully qualified item identity: content type plus per-type id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaKey {
    pub content_type: ContentType,
    pub id: MediaId,
}

impl MediaKey {
    pub fn new(content_type: ContentType, id: MediaId) -> Self {
        Self { content_type, id }
    }

    pub fn image(id: MediaId) -> Self {
        Self::new(ContentType::Image, id)
    }

    pub fn video(id: MediaId) -> Self {
        Self::new(ContentType::Video, id)
    }

    /// Reject ids the API never hands out
    pub fn validate(&self) -> AppResult<()> {
        if self.id <= 0 {
            return Err(AppError::InvalidInput(format!(
                "Invalid {} id: {}",
                self.content_type, self.id
            )));
        }
        Ok(())
    }
}

impl std::fmt::Display for MediaKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.content_type, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_id_different_type_are_distinct() {
        assert_ne!(MediaKey::image(7), MediaKey::video(7));
    }

    #[test]
    fn non_positive_ids_are_invalid() {
        assert!(MediaKey::image(0).validate().is_err());
        assert!(MediaKey::video(-3).validate().is_err());
        assert!(MediaKey::image(1).validate().is_ok());
    }

    #[test]
    fn display_includes_type() {
        assert_eq!(MediaKey::video(12).to_string(), "video:12");
    }
}
