use serde::{Deserialize, Serialize};

/// Image/Video discriminator. Decides the identifier namespace and the
/// storage table an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Image,
    Video,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Image => "image",
            ContentType::Video => "video",
        }
    }

    /// Lenient parse used for navigation arguments: "video" in any case is a
    /// video, everything else (including nothing) is an image.
    pub fn from_str_lenient(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()) {
            Some(v) if v == "video" => ContentType::Video,
            _ => ContentType::Image,
        }
    }

    /// Storage table holding records of this type
    pub fn table_name(&self) -> &'static str {
        match self {
            ContentType::Image => "images",
            ContentType::Video => "videos",
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
