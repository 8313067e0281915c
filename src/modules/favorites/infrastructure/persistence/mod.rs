pub mod media_record_repository_impl;

pub use media_record_repository_impl::MediaRecordRepositoryImpl;
