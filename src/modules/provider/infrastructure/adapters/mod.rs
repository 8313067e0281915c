pub mod pixabay;

pub use pixabay::PixabayAdapter;
