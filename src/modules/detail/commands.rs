use super::domain::DetailContent;
use crate::modules::media::{ContentType, MediaKey};
use crate::shared::errors::command_error;
use crate::AppState;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetContentDetailRequest {
    /// "image" or "video"; anything else is treated as an image
    pub content_type: Option<String>,
    pub id: i64,
}

impl GetContentDetailRequest {
    fn key(&self) -> MediaKey {
        MediaKey::new(
            ContentType::from_str_lenient(self.content_type.as_deref()),
            self.id,
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleDetailFavoriteResponse {
    pub key: MediaKey,
    pub is_favorite: bool,
}

pub async fn get_content_detail(
    state: &AppState,
    request: GetContentDetailRequest,
) -> Result<DetailContent, String> {
    state
        .detail_service
        .get_detail(request.key())
        .await
        .map_err(command_error("get_content_detail"))
}

pub async fn toggle_detail_favorite(
    state: &AppState,
    request: GetContentDetailRequest,
) -> Result<ToggleDetailFavoriteResponse, String> {
    let key = request.key();
    let is_favorite = state
        .detail_service
        .toggle_favorite(key)
        .await
        .map_err(command_error("toggle_detail_favorite"))?;

    Ok(ToggleDetailFavoriteResponse { key, is_favorite })
}
