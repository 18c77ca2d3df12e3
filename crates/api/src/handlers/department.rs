//! Handlers for the `/api/department` resource.

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::Json;
use campus_core::error::CoreError;
use campus_core::naming;
use campus_core::types::DbId;
use campus_db::models::department::{CreateDepartment, Department};
use campus_db::repositories::{DepartmentRepo, WriteOutcome};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::error::{AppError, AppResult, ErrorBody};
use crate::extract::{AppPath, AppQuery, ValidatedJson};
use crate::handlers::{ensure_matching_id, location};
use crate::state::AppState;

const ENTITY: &str = "Department";

/// Optional target id for `PATCH /api/department`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct UpdateDepartmentParams {
    /// Must equal the `id` in the body when given.
    pub department_id: Option<DbId>,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: ENTITY, id })
}

fn duplicate(name: &str) -> AppError {
    AppError::Core(CoreError::Conflict(format!(
        "Department '{}' already exists",
        naming::trimmed(name)
    )))
}

/// GET /api/department
#[utoipa::path(
    get,
    path = "/api/department",
    tag = "Department",
    responses(
        (status = 200, description = "All departments ordered by name", body = [Department]),
    )
)]
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Department>>> {
    let departments = DepartmentRepo::list(&state.pool).await?;
    Ok(Json(departments))
}

/// GET /api/department/{id}
#[utoipa::path(
    get,
    path = "/api/department/{id}",
    tag = "Department",
    params(("id" = i64, Path, description = "Department id")),
    responses(
        (status = 200, description = "The department", body = Department),
        (status = 400, description = "Malformed id", body = ErrorBody),
        (status = 404, description = "No department with that id", body = ErrorBody),
    )
)]
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Department>> {
    let department = DepartmentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(department))
}

/// POST /api/department
#[utoipa::path(
    post,
    path = "/api/department",
    tag = "Department",
    request_body = CreateDepartment,
    responses(
        (status = 201, description = "Department created", body = Department,
            headers(("Location" = String, description = "URL of the new department"))),
        (status = 400, description = "Missing or invalid fields", body = ErrorBody),
        (status = 409, description = "A department with that name already exists", body = ErrorBody),
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateDepartment>,
) -> AppResult<(StatusCode, [(header::HeaderName, String); 1], Json<Department>)> {
    let name = input.name.clone();
    let Some(department) = DepartmentRepo::create(&state.pool, input).await? else {
        tracing::warn!(name = %name, "Rejected duplicate department");
        return Err(duplicate(&name));
    };

    tracing::info!(department_id = department.id, "Department created");
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location("department", department.id))],
        Json(department),
    ))
}

/// PATCH /api/department
#[utoipa::path(
    patch,
    path = "/api/department",
    tag = "Department",
    params(UpdateDepartmentParams),
    request_body = Department,
    responses(
        (status = 204, description = "Department replaced"),
        (status = 400, description = "Invalid body or mismatched id", body = ErrorBody),
        (status = 404, description = "No department with that id", body = ErrorBody),
        (status = 409, description = "Another department already has that name", body = ErrorBody),
    )
)]
pub async fn update(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<UpdateDepartmentParams>,
    ValidatedJson(department): ValidatedJson<Department>,
) -> AppResult<StatusCode> {
    ensure_matching_id(params.department_id, department.id)?;

    match DepartmentRepo::update(&state.pool, &department).await? {
        WriteOutcome::Written => {
            tracing::info!(department_id = department.id, "Department updated");
            Ok(StatusCode::NO_CONTENT)
        }
        WriteOutcome::NotFound => Err(not_found(department.id)),
        WriteOutcome::DuplicateName => {
            tracing::warn!(department_id = department.id, name = %department.name, "Rejected duplicate department");
            Err(duplicate(&department.name))
        }
    }
}

/// DELETE /api/department/{id}
#[utoipa::path(
    delete,
    path = "/api/department/{id}",
    tag = "Department",
    params(("id" = i64, Path, description = "Department id")),
    responses(
        (status = 204, description = "Department deleted"),
        (status = 404, description = "No department with that id", body = ErrorBody),
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    if DepartmentRepo::delete(&state.pool, id).await? {
        tracing::info!(department_id = id, "Department deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
