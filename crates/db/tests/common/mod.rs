use armory_db::DbPool;
use tempfile::TempDir;

/// A file-backed database in a fresh temp directory.
///
/// The returned [`TempDir`] must be kept alive for as long as the pool is
/// used; dropping it deletes the database file.
pub async fn temp_pool() -> (TempDir, DbPool) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let url = format!("sqlite://{}", dir.path().join("catalog.db").display());
    let pool = armory_db::create_pool(&url, 5)
        .await
        .expect("open temp database");
    (dir, pool)
}

/// A migrated, empty database.
#[allow(dead_code)]
pub async fn migrated_pool() -> (TempDir, DbPool) {
    let (dir, pool) = temp_pool().await;
    armory_db::run_migrations(&pool)
        .await
        .expect("apply migrations");
    (dir, pool)
}

/// A migrated database holding the reference catalog.
#[allow(dead_code)]
pub async fn seeded_pool() -> (TempDir, DbPool) {
    let (dir, pool) = migrated_pool().await;
    armory_db::seed::seed_reference_firearms(&pool)
        .await
        .expect("seed reference firearms");
    (dir, pool)
}
