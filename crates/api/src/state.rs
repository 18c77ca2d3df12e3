/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cloned into every request; the pool itself is reference counted.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool. Handlers pass it to the repositories.
    pub pool: campus_db::DbPool,
}
