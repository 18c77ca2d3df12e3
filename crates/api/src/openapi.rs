//! OpenAPI documents, one per resource family.
//!
//! Generated from the `#[utoipa::path]` annotations on the handlers and
//! served as JSON by [`crate::routes::docs`].

use campus_db::models::department::{CreateDepartment, Department};
use campus_db::models::teacher::{CreateTeacher, Teacher};
use utoipa::OpenApi;

use crate::error::ErrorBody;
use crate::handlers;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Department Management",
        description = "Create, list, update and delete departments.",
    ),
    paths(
        handlers::department::list,
        handlers::department::get_by_id,
        handlers::department::create,
        handlers::department::update,
        handlers::department::delete,
    ),
    components(schemas(Department, CreateDepartment, ErrorBody)),
    tags((name = "Department", description = "Department records"))
)]
pub struct DepartmentApiDoc;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Teacher Management",
        description = "Create, list, update and delete teachers.",
    ),
    paths(
        handlers::teacher::list,
        handlers::teacher::get_by_id,
        handlers::teacher::create,
        handlers::teacher::update,
        handlers::teacher::delete,
    ),
    components(schemas(Teacher, CreateTeacher, ErrorBody)),
    tags((name = "Teacher", description = "Teacher records"))
)]
pub struct TeacherApiDoc;

/// A published document: display name, URL slug, and generator.
pub struct DocEntry {
    pub name: &'static str,
    pub slug: &'static str,
    pub build: fn() -> utoipa::openapi::OpenApi,
}

/// Every document served under `/api-docs/{slug}/openapi.json`.
pub const DOCUMENTS: &[DocEntry] = &[
    DocEntry {
        name: "Department",
        slug: "department",
        build: DepartmentApiDoc::openapi,
    },
    DocEntry {
        name: "Teacher",
        slug: "teacher",
        build: TeacherApiDoc::openapi,
    },
];

/// Look up a document by slug.
pub fn document(slug: &str) -> Option<utoipa::openapi::OpenApi> {
    DOCUMENTS
        .iter()
        .find(|entry| entry.slug == slug)
        .map(|entry| (entry.build)())
}
