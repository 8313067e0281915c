use super::application::{SearchOutcome, SearchSnapshot};
use crate::modules::media::VideoItem;
use crate::shared::errors::command_error;
use crate::AppState;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchImagesRequest {
    pub query: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RefreshImagesRequest {
    /// Position of the first visible item, if the list was scrolled
    pub anchor_position: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchVideosRequest {
    pub query: String,
}

pub async fn search_images(
    state: &AppState,
    request: SearchImagesRequest,
) -> Result<SearchOutcome, String> {
    state
        .search_service
        .search(&request.query)
        .await
        .map_err(command_error("search_images"))
}

pub async fn load_more_images(state: &AppState) -> Result<SearchSnapshot, String> {
    state
        .search_service
        .load_more()
        .await
        .map_err(command_error("load_more_images"))
}

/// Prepend the page above the first loaded one (after an anchored refresh)
pub async fn load_previous_images(state: &AppState) -> Result<SearchSnapshot, String> {
    state
        .search_service
        .load_previous()
        .await
        .map_err(command_error("load_previous_images"))
}

pub async fn refresh_images(
    state: &AppState,
    request: RefreshImagesRequest,
) -> Result<SearchSnapshot, String> {
    state
        .search_service
        .refresh(request.anchor_position)
        .await
        .map_err(command_error("refresh_images"))
}

pub async fn close_search(state: &AppState) -> Result<(), String> {
    state.search_service.close().await;
    Ok(())
}

/// Featured video for the home screen header
pub async fn search_videos(
    state: &AppState,
    request: SearchVideosRequest,
) -> Result<Option<VideoItem>, String> {
    state
        .search_service
        .featured_video(&request.query)
        .await
        .map_err(command_error("search_videos"))
}
