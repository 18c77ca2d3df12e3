pub mod department;
pub mod docs;
pub mod health;
pub mod teacher;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /department            list, create, update
/// /department/{id}       get, delete
/// /teacher               list, create, update
/// /teacher/{id}          get, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/department", department::router())
        .nest("/teacher", teacher::router())
}
