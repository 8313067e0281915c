use super::domain::{FavoriteIds, FavoriteRecord};
use crate::modules::media::{ContentType, MediaItem, MediaKey};
use crate::shared::errors::command_error;
use crate::AppState;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleFavoriteRequest {
    pub item: MediaItem,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveFavoriteRequest {
    /// "image" or "video"; anything else is treated as an image
    pub content_type: Option<String>,
    pub id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteStateResponse {
    pub key: MediaKey,
    pub is_favorite: bool,
}

pub async fn get_favorite_ids(state: &AppState) -> Result<FavoriteIds, String> {
    Ok(state.favorites_service.favorite_ids())
}

pub async fn list_favorites(state: &AppState) -> Result<Vec<FavoriteRecord>, String> {
    state
        .favorites_service
        .list_favorites()
        .await
        .map_err(command_error("list_favorites"))
}

pub async fn toggle_favorite_item(
    state: &AppState,
    request: ToggleFavoriteRequest,
) -> Result<FavoriteStateResponse, String> {
    let key = request.item.key();
    let is_favorite = state
        .favorites_service
        .toggle_favorite(&request.item)
        .await
        .map_err(command_error("toggle_favorite_item"))?;

    Ok(FavoriteStateResponse { key, is_favorite })
}

pub async fn remove_favorite(
    state: &AppState,
    request: RemoveFavoriteRequest,
) -> Result<FavoriteStateResponse, String> {
    let key = MediaKey::new(
        ContentType::from_str_lenient(request.content_type.as_deref()),
        request.id,
    );

    state
        .favorites_service
        .remove_favorite(key)
        .await
        .map_err(command_error("remove_favorite"))?;

    Ok(FavoriteStateResponse {
        key,
        is_favorite: false,
    })
}

/// Delete cached search results that are not favorites; returns the number removed
pub async fn purge_transient_cache(state: &AppState) -> Result<usize, String> {
    state
        .favorites_service
        .purge_transient()
        .await
        .map_err(command_error("purge_transient_cache"))
}
