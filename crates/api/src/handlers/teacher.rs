//! Handlers for the `/api/teacher` resource.

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::Json;
use campus_core::error::CoreError;
use campus_core::types::DbId;
use campus_db::models::teacher::{CreateTeacher, Teacher};
use campus_db::repositories::TeacherRepo;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::error::{AppError, AppResult, ErrorBody};
use crate::extract::{AppPath, AppQuery, ValidatedJson};
use crate::handlers::{ensure_matching_id, location};
use crate::state::AppState;

/// Optional target id for `PATCH /api/teacher`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct UpdateTeacherParams {
    /// Must equal the `id` in the body when given.
    pub teacher_id: Option<DbId>,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Teacher",
        id,
    })
}

/// GET /api/teacher
#[utoipa::path(
    get,
    path = "/api/teacher",
    tag = "Teacher",
    responses(
        (status = 200, description = "All teachers ordered by name", body = [Teacher]),
    )
)]
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Teacher>>> {
    let teachers = TeacherRepo::list(&state.pool).await?;
    Ok(Json(teachers))
}

/// GET /api/teacher/{id}
#[utoipa::path(
    get,
    path = "/api/teacher/{id}",
    tag = "Teacher",
    params(("id" = i64, Path, description = "Teacher id")),
    responses(
        (status = 200, description = "The teacher", body = Teacher),
        (status = 400, description = "Malformed id", body = ErrorBody),
        (status = 404, description = "No teacher with that id", body = ErrorBody),
    )
)]
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Teacher>> {
    let teacher = TeacherRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(teacher))
}

/// POST /api/teacher
#[utoipa::path(
    post,
    path = "/api/teacher",
    tag = "Teacher",
    request_body = CreateTeacher,
    responses(
        (status = 201, description = "Teacher created", body = Teacher,
            headers(("Location" = String, description = "URL of the new teacher"))),
        (status = 400, description = "Missing or invalid fields", body = ErrorBody),
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateTeacher>,
) -> AppResult<(StatusCode, [(header::HeaderName, String); 1], Json<Teacher>)> {
    let teacher = TeacherRepo::create(&state.pool, input).await?;
    tracing::info!(teacher_id = teacher.id, "Teacher created");
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location("teacher", teacher.id))],
        Json(teacher),
    ))
}

/// PATCH /api/teacher
#[utoipa::path(
    patch,
    path = "/api/teacher",
    tag = "Teacher",
    params(UpdateTeacherParams),
    request_body = Teacher,
    responses(
        (status = 204, description = "Teacher replaced"),
        (status = 400, description = "Invalid body or mismatched id", body = ErrorBody),
        (status = 404, description = "No teacher with that id", body = ErrorBody),
    )
)]
pub async fn update(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<UpdateTeacherParams>,
    ValidatedJson(teacher): ValidatedJson<Teacher>,
) -> AppResult<StatusCode> {
    ensure_matching_id(params.teacher_id, teacher.id)?;

    if !TeacherRepo::update(&state.pool, &teacher).await? {
        return Err(not_found(teacher.id));
    }
    tracing::info!(teacher_id = teacher.id, "Teacher updated");
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/teacher/{id}
#[utoipa::path(
    delete,
    path = "/api/teacher/{id}",
    tag = "Teacher",
    params(("id" = i64, Path, description = "Teacher id")),
    responses(
        (status = 204, description = "Teacher deleted"),
        (status = 404, description = "No teacher with that id", body = ErrorBody),
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    if TeacherRepo::delete(&state.pool, id).await? {
        tracing::info!(teacher_id = id, "Teacher deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
