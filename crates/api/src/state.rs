/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cloning is cheap: the pool is reference-counted.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool. Every repository call receives it explicitly.
    pub pool: paintsite_db::DbPool,
}
