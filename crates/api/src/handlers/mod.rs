//! Request handlers, one module per resource.

pub mod department;
pub mod teacher;

use campus_core::types::DbId;

use crate::error::{AppError, AppResult};

/// `Location` value for a newly created resource.
pub(crate) fn location(resource: &str, id: DbId) -> String {
    format!("/api/{resource}/{id}")
}

/// When the caller names the target id outside the body, it must agree
/// with the body's `id`.
pub(crate) fn ensure_matching_id(requested: Option<DbId>, body_id: DbId) -> AppResult<()> {
    match requested {
        Some(id) if id != body_id => Err(AppError::BadRequest(format!(
            "Requested id {id} does not match body id {body_id}"
        ))),
        _ => Ok(()),
    }
}
