//! Search service tests
//!
//! The mocked provider serves a deterministic catalogue: page `p` of size `n`
//! holds ids `(p - 1) * n + 1 ..= p * n`, capped at the total hit count.
//! Mixing the 40-item first load with 20-item follow-up pages therefore
//! produces the same overlap the real API shows.

mod utils;

use edicon_lib::modules::media::{ImageItem, MediaId, MediaKey};
use edicon_lib::modules::provider::SearchPage;
use edicon_lib::modules::search::commands::{
    self, RefreshImagesRequest, SearchImagesRequest, SearchVideosRequest,
};
use edicon_lib::modules::search::{SearchOutcome, SearchSnapshot};
use edicon_lib::shared::{AppError, AppResult};
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio_test::{assert_err, assert_ok};
use utils::{
    build_test_state, build_test_state_with, image, image_page, test_config, video, MockProvider,
    TestDb,
};

fn catalogue_page(page: u32, per_page: u32, total_hits: u64) -> SearchPage<ImageItem> {
    let first = u64::from(page - 1) * u64::from(per_page) + 1;
    let last = (u64::from(page) * u64::from(per_page)).min(total_hits);
    image_page((first..=last).map(|id| id as MediaId), total_hits)
}

fn catalogue(total_hits: u64) -> MockProvider {
    let mut provider = MockProvider::new();
    provider
        .expect_search_images()
        .returning(move |_, page, per_page| Ok(catalogue_page(page, per_page, total_hits)));
    provider
}

fn results(outcome: SearchOutcome) -> SearchSnapshot {
    match outcome {
        SearchOutcome::Results(snapshot) => snapshot,
        SearchOutcome::Skipped => panic!("expected search results"),
    }
}

fn ids(snapshot: &SearchSnapshot) -> Vec<MediaId> {
    snapshot.items.iter().map(|hit| hit.item.id).collect()
}

#[tokio::test]
async fn test_blank_query_makes_no_request() {
    let test_db = TestDb::new();
    let mut provider = MockProvider::new();
    provider.expect_search_images().times(0);
    let state = build_test_state(&test_db, provider).await;

    let outcome = assert_ok!(state.search_service.search("   ").await);
    assert_eq!(outcome, SearchOutcome::Skipped);
    assert!(state.search_service.snapshot().await.is_none());
}

#[tokio::test]
async fn test_first_load_then_pages_without_duplicates() {
    let test_db = TestDb::new();
    let state = build_test_state(&test_db, catalogue(500)).await;
    let search = &state.search_service;

    let first = results(search.search("cats").await.unwrap());
    assert_eq!(first.items.len(), 40);
    assert!(!first.end_reached);

    // Page 2 at size 20 repeats ids 21..=40 and is skipped in favour of page 3
    let second = search.load_more().await.unwrap();
    assert_eq!(second.items.len(), 60);

    let third = search.load_more().await.unwrap();
    let loaded = ids(&third);
    assert_eq!(loaded.len(), 80);
    assert_eq!(loaded, (1..=80).collect::<Vec<MediaId>>());

    let unique: HashSet<MediaId> = loaded.iter().copied().collect();
    assert_eq!(unique.len(), loaded.len());
}

#[tokio::test]
async fn test_paging_stops_at_total_hits() {
    let test_db = TestDb::new();
    let state = build_test_state(&test_db, catalogue(50)).await;
    let search = &state.search_service;

    search.search("cats").await.unwrap();
    let snapshot = search.load_more().await.unwrap();

    assert_eq!(snapshot.items.len(), 50);
    assert!(snapshot.end_reached);

    // Further loads are no-ops
    let again = search.load_more().await.unwrap();
    assert_eq!(again.items.len(), 50);
}

#[tokio::test]
async fn test_anchored_refresh_keeps_viewport_item() {
    let test_db = TestDb::new();
    let state = build_test_state(&test_db, catalogue(500)).await;
    let search = &state.search_service;

    search.search("cats").await.unwrap();
    search.load_more().await.unwrap();
    let before = search.load_more().await.unwrap();
    assert_eq!(before.items[70].item.id, 71);

    let refreshed = search.refresh(Some(70)).await.unwrap();
    assert_eq!(ids(&refreshed), (61..=80).collect::<Vec<MediaId>>());
    assert!(refreshed.has_previous);

    // Walk back up to the top of the list
    search.load_previous().await.unwrap();
    search.load_previous().await.unwrap();
    let top = search.load_previous().await.unwrap();
    assert_eq!(ids(&top), (1..=80).collect::<Vec<MediaId>>());
    assert!(!top.has_previous);

    let again = search.load_previous().await.unwrap();
    assert_eq!(again.items.len(), 80);
}

#[tokio::test]
async fn test_refresh_from_first_page_reloads_initial_window() {
    let test_db = TestDb::new();
    let state = build_test_state(&test_db, catalogue(500)).await;
    let search = &state.search_service;

    search.search("cats").await.unwrap();
    search.load_more().await.unwrap();

    let refreshed = search.refresh(Some(30)).await.unwrap();
    assert_eq!(ids(&refreshed), (1..=40).collect::<Vec<MediaId>>());
    assert!(!refreshed.has_previous);
}

#[tokio::test]
async fn test_same_query_reuses_session() {
    let test_db = TestDb::new();
    let mut provider = MockProvider::new();
    provider
        .expect_search_images()
        .times(1)
        .returning(|_, page, per_page| Ok(catalogue_page(page, per_page, 500)));
    let state = build_test_state(&test_db, provider).await;

    let first = results(state.search_service.search("cats").await.unwrap());
    let second = results(state.search_service.search(" cats ").await.unwrap());

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_new_query_replaces_session() {
    let test_db = TestDb::new();
    let mut provider = MockProvider::new();
    provider
        .expect_search_images()
        .times(2)
        .returning(|query, _, _| {
            let offset = if query == "dogs" { 1000 } else { 0 };
            Ok(image_page((1..=5).map(|id| id + offset), 5))
        });
    let state = build_test_state(&test_db, provider).await;

    state.search_service.search("cats").await.unwrap();
    let dogs = results(state.search_service.search("dogs").await.unwrap());

    assert_eq!(dogs.query, "dogs");
    assert_eq!(ids(&dogs), vec![1001, 1002, 1003, 1004, 1005]);
    assert!(dogs.end_reached);
}

#[tokio::test]
async fn test_failed_page_keeps_list_and_retries() {
    let test_db = TestDb::new();
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);

    let mut provider = MockProvider::new();
    provider
        .expect_search_images()
        .returning(move |_, page, per_page| -> AppResult<SearchPage<ImageItem>> {
            if counter.fetch_add(1, Ordering::SeqCst) == 1 {
                return Err(AppError::ApiError("connection reset".to_string()));
            }
            Ok(catalogue_page(page, per_page, 500))
        });
    let state = build_test_state(&test_db, provider).await;
    let search = &state.search_service;

    search.search("cats").await.unwrap();

    let err = assert_err!(search.load_more().await);
    assert!(matches!(err, AppError::ApiError(_)));

    let stuck = search.snapshot().await.unwrap();
    assert_eq!(stuck.items.len(), 40);
    assert_eq!(
        stuck.error.as_deref(),
        Some("Search failed. Check your connection and try again.")
    );

    let retried = search.load_more().await.unwrap();
    assert_eq!(retried.items.len(), 60);
    assert!(retried.error.is_none());
}

#[tokio::test]
async fn test_failed_first_page_is_retried_by_same_query() {
    let test_db = TestDb::new();
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);

    let mut provider = MockProvider::new();
    provider
        .expect_search_images()
        .returning(move |_, page, per_page| -> AppResult<SearchPage<ImageItem>> {
            if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                return Err(AppError::RateLimitError("Too many requests".to_string()));
            }
            Ok(catalogue_page(page, per_page, 500))
        });
    let state = build_test_state(&test_db, provider).await;

    assert_err!(state.search_service.search("cats").await);

    let snapshot = results(state.search_service.search("cats").await.unwrap());
    assert_eq!(snapshot.items.len(), 40);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_snapshot_marks_favorites() {
    let test_db = TestDb::new();
    let state = build_test_state(&test_db, catalogue(500)).await;
    state
        .favorites_service
        .set_favorite(&image(5).into(), true)
        .await
        .unwrap();

    let snapshot = results(state.search_service.search("cats").await.unwrap());

    let favorites: Vec<MediaId> = snapshot
        .items
        .iter()
        .filter(|hit| hit.is_favorite)
        .map(|hit| hit.item.id)
        .collect();
    assert_eq!(favorites, vec![5]);
    assert!(snapshot.favorite_ids.contains(&MediaKey::image(5)));
}

#[tokio::test]
async fn test_results_are_not_persisted_by_default() {
    let test_db = TestDb::new();
    let state = build_test_state(&test_db, catalogue(500)).await;

    state.search_service.search("cats").await.unwrap();

    let record = state
        .favorites_service
        .get_record(MediaKey::image(1))
        .await
        .unwrap();
    assert!(record.is_none());
}

#[tokio::test]
async fn test_results_are_cached_when_enabled() {
    let test_db = TestDb::new();
    let mut config = test_config(&test_db);
    config.cache_search_results = true;
    let state = build_test_state_with(&test_db, catalogue(500), config).await;

    state.search_service.search("cats").await.unwrap();

    let record = state
        .favorites_service
        .get_record(MediaKey::image(40))
        .await
        .unwrap()
        .unwrap();
    assert!(record.is_cached);
    assert!(!record.is_favorite);
    assert!(state.favorites_service.favorite_ids().is_empty());
}

#[tokio::test]
async fn test_close_drops_session() {
    let test_db = TestDb::new();
    let state = build_test_state(&test_db, catalogue(500)).await;

    state.search_service.search("cats").await.unwrap();
    state.search_service.close().await;

    assert!(state.search_service.snapshot().await.is_none());
    let err = assert_err!(state.search_service.load_more().await);
    assert!(matches!(err, AppError::InvalidInput(_)));
}

#[tokio::test]
async fn test_featured_video_requests_smallest_page() {
    let test_db = TestDb::new();
    let mut provider = MockProvider::new();
    provider
        .expect_search_videos()
        .times(1)
        .returning(|_, page, per_page| {
            assert_eq!((page, per_page), (1, 3));
            Ok(SearchPage::new(2, 2, vec![video(7), video(8)]))
        });
    let state = build_test_state(&test_db, provider).await;

    let featured = state.search_service.featured_video("sea").await.unwrap();
    assert_eq!(featured.map(|video| video.id), Some(7));

    let blank = state.search_service.featured_video("").await.unwrap();
    assert!(blank.is_none());
}

#[tokio::test]
async fn test_search_commands() {
    let test_db = TestDb::new();
    let mut provider = catalogue(500);
    provider
        .expect_search_videos()
        .returning(|_, _, _| Ok(SearchPage::empty()));
    let state = build_test_state(&test_db, provider).await;

    let skipped = commands::search_images(
        &state,
        SearchImagesRequest {
            query: String::new(),
        },
    )
    .await
    .unwrap();
    assert_eq!(skipped, SearchOutcome::Skipped);

    let first = results(
        commands::search_images(
            &state,
            SearchImagesRequest {
                query: "cats".to_string(),
            },
        )
        .await
        .unwrap(),
    );
    assert_eq!(first.items.len(), 40);

    let more = commands::load_more_images(&state).await.unwrap();
    assert_eq!(more.items.len(), 60);

    let anchored = commands::refresh_images(
        &state,
        RefreshImagesRequest {
            anchor_position: Some(50),
        },
    )
    .await
    .unwrap();
    assert_eq!(ids(&anchored), (41..=60).collect::<Vec<MediaId>>());

    let restored = commands::load_previous_images(&state).await.unwrap();
    assert_eq!(ids(&restored), (21..=60).collect::<Vec<MediaId>>());

    let refreshed = commands::refresh_images(&state, RefreshImagesRequest::default())
        .await
        .unwrap();
    assert_eq!(ids(&refreshed), (1..=40).collect::<Vec<MediaId>>());

    let featured = commands::search_videos(
        &state,
        SearchVideosRequest {
            query: "sea".to_string(),
        },
    )
    .await
    .unwrap();
    assert!(featured.is_none());

    commands::close_search(&state).await.unwrap();
    let err = commands::load_more_images(&state).await.unwrap_err();
    assert_eq!(err, "No active search");
}
