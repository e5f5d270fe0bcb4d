use mangam_api::db::init_db;

const TEST_DB: &str = "target/test-data/mangam-db-tests.db";

#[tokio::test]
async fn init_db_creates_schema() {
    let db_path = std::path::Path::new(TEST_DB);
    if db_path.exists() {
        std::fs::remove_file(db_path).unwrap();
    }

    let pool = init_db(&format!("sqlite:{TEST_DB}")).await.unwrap();

    assert!(db_path.exists());

    for table in ["manga", "chapters", "pages", "users", "favorites", "ratings"] {
        let exists = sqlx::query_scalar::<_, i64>(
            "SELECT 1 FROM sqlite_master WHERE type='table' AND name = ?",
        )
        .bind(table)
        .fetch_optional(&pool)
        .await
        .unwrap()
        .is_some();
        assert!(exists, "table {table} is missing");
    }

    // Migration bookkeeping is in place as well.
    let migrations = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM _sqlx_migrations",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert!(migrations >= 1);

    // Running the migrations a second time is a no-op.
    let reopened = init_db(&format!("sqlite:{TEST_DB}")).await;
    assert!(reopened.is_ok());
}
