#![allow(dead_code)]

pub mod factories;
pub mod helpers;
pub mod test_db;

pub use factories::{image, image_page, video, ImageFactory, VideoFactory};
pub use helpers::{build_test_state, build_test_state_with, test_config, MockProvider};
pub use test_db::TestDb;
