//! Route definitions for the `/department` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::department;
use crate::state::AppState;

/// Routes mounted at `/department`.
///
/// ```text
/// GET    /                     -> list
/// POST   /                     -> create
/// PATCH  /?departmentId={id}   -> update (body carries the full entity)
/// GET    /{id}                 -> get_by_id
/// DELETE /{id}                 -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(department::list)
                .post(department::create)
                .patch(department::update),
        )
        .route(
            "/{id}",
            get(department::get_by_id).delete(department::delete),
        )
}
