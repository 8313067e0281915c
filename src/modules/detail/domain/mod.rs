pub mod detail_content;

pub use detail_content::{DetailContent, DetailSource};
