//! Route definitions for the `/teacher` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::teacher;
use crate::state::AppState;

/// Routes mounted at `/teacher`.
///
/// ```text
/// GET    /                  -> list
/// POST   /                  -> create
/// PATCH  /?teacherId={id}   -> update (body carries the full entity)
/// GET    /{id}              -> get_by_id
/// DELETE /{id}              -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(teacher::list).post(teacher::create).patch(teacher::update),
        )
        .route("/{id}", get(teacher::get_by_id).delete(teacher::delete))
}
