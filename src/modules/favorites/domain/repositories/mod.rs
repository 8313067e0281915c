pub mod media_record_repository;

pub use media_record_repository::MediaRecordRepository;
