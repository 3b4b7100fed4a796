/// Database test utilities with singleton pattern
///
/// Provides thread-safe access to the test database with proper isolation.
/// Every test using it is `#[ignore]`d: run them with
/// `TEST_DATABASE_URL=postgres://... cargo test -- --ignored`.
use catalog_admin::shared::Database;
use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

static DATABASE: OnceLock<Arc<Database>> = OnceLock::new();

/// Get or create the shared test database, migrated once
pub fn test_database() -> Arc<Database> {
    DATABASE
        .get_or_init(|| {
            dotenvy::dotenv().ok();
            let test_db_url = std::env::var("TEST_DATABASE_URL")
                .expect("TEST_DATABASE_URL must be set in .env for tests");

            let manager = ConnectionManager::<PgConnection>::new(test_db_url);
            let pool = r2d2::Pool::builder()
                .max_size(5)
                .build(manager)
                .expect("Failed to create test database pool");

            let database = Database::from_pool(pool);
            database
                .run_migrations()
                .expect("Failed to migrate test database");
            Arc::new(database)
        })
        .clone()
}

/// Clean all catalog tables - use at the start of each test
pub fn clean_test_db() {
    let database = test_database();
    let mut conn = database
        .get_connection()
        .expect("Failed to get DB connection");

    diesel::sql_query("TRUNCATE TABLE genres_categories, genres, categories CASCADE")
        .execute(&mut conn)
        .expect("Failed to clean catalog tables");
}

/// Global test mutex for serialization
static TEST_LOCK: Mutex<()> = Mutex::new(());

/// Acquire test lock to ensure database tests run serially
pub fn acquire_test_lock() -> MutexGuard<'static, ()> {
    // Handle poisoned mutex by recovering from panic
    match TEST_LOCK.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}
