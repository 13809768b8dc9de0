/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the pool is reference counted, and every request shares
/// the same underlying SQLite handle.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: armory_db::DbPool,
}
