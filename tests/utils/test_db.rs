/// Isolated test database utility that creates and cleans up temporary databases
/// Each test gets its own SQLite file that is deleted when the test completes
use edicon_lib::shared::Database;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

static TEST_DB_COUNTER: AtomicU32 = AtomicU32::new(0);

/// Isolated test database that automatically cleans up on drop
///
/// # Example
/// ```rust
/// #[tokio::test]
/// async fn test_something() {
///     let test_db = TestDb::new();
///     let repo = MediaRecordRepositoryImpl::new(test_db.database());
///     // Test...
///     // Database file removed when test_db goes out of scope
/// }
/// ```
pub struct TestDb {
    path: PathBuf,
    database: Arc<Database>,
}

impl TestDb {
    /// Creates a new isolated test database with a unique file name
    ///
    /// File name format: edicon_test_{process_id}_{counter}.db
    /// This ensures multiple test processes can run in parallel
    pub fn new() -> Self {
        let name = format!(
            "edicon_test_{}_{}.db",
            std::process::id(),
            TEST_DB_COUNTER.fetch_add(1, Ordering::SeqCst)
        );
        let path = std::env::temp_dir().join(name);
        let _ = std::fs::remove_file(&path);

        let url = path.to_string_lossy().to_string();
        let database = Database::new(&url)
            .unwrap_or_else(|e| panic!("Failed to create test database {}: {}", url, e));

        Self {
            path,
            database: Arc::new(database),
        }
    }

    pub fn database(&self) -> Arc<Database> {
        Arc::clone(&self.database)
    }

    pub fn url(&self) -> String {
        self.path.to_string_lossy().to_string()
    }
}

impl Drop for TestDb {
    fn drop(&mut self) {
        for suffix in ["", "-journal", "-wal", "-shm"] {
            let mut file = self.path.clone().into_os_string();
            file.push(suffix);
            let _ = std::fs::remove_file(file);
        }
    }
}
