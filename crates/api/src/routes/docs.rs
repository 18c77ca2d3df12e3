//! API documentation routes.
//!
//! ```text
//! GET /                                index of available documents
//! GET /api-docs/{slug}/openapi.json    one OpenAPI document
//! ```

use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::AppPath;
use crate::openapi::{self, DOCUMENTS};
use crate::state::AppState;

#[derive(Serialize)]
pub struct DocLink {
    pub name: &'static str,
    pub url: String,
}

#[derive(Serialize)]
pub struct DocIndex {
    pub documents: Vec<DocLink>,
}

fn document_url(slug: &str) -> String {
    format!("/api-docs/{slug}/openapi.json")
}

async fn index() -> Json<DocIndex> {
    let documents = DOCUMENTS
        .iter()
        .map(|entry| DocLink {
            name: entry.name,
            url: document_url(entry.slug),
        })
        .collect();
    Json(DocIndex { documents })
}

async fn document(AppPath(slug): AppPath<String>) -> AppResult<Json<utoipa::openapi::OpenApi>> {
    openapi::document(&slug)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Unknown API document '{slug}'")))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/api-docs/{slug}/openapi.json", get(document))
}
