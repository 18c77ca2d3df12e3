//! HTTP-level integration tests for `/api/department`.

mod common;

use axum::http::{header, StatusCode};
use common::{body_json, build_test_app, delete, get, patch_json, post_json, post_raw};
use serde_json::json;
use sqlx::PgPool;

async fn create_department(pool: &PgPool, name: &str) -> i64 {
    let response = post_json(build_test_app(pool.clone()), "/api/department", json!({ "name": name })).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_returns_201_with_location(pool: PgPool) {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/department",
        json!({ "name": "Mathematics" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    let json = body_json(response).await;
    let id = json["id"].as_i64().unwrap();
    assert_eq!(location, format!("/api/department/{id}"));
    assert_eq!(json["name"], "Mathematics");

    let response = get(build_test_app(pool), &location).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "id": id, "name": "Mathematics" }));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_unknown_id_returns_404(pool: PgPool) {
    let response = get(build_test_app(pool), "/api/department/999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Department with id 999 not found");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_non_integer_id_returns_400(pool: PgPool) {
    let response = get(build_test_app(pool), "/api/department/abc").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_name_returns_409(pool: PgPool) {
    create_department(&pool, "Math").await;

    let response = post_json(
        build_test_app(pool.clone()),
        "/api/department",
        json!({ "name": " math " }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
    assert_eq!(json["error"], "Department 'math' already exists");

    let list = body_json(get(build_test_app(pool), "/api/department").await).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn non_ascii_case_pair_returns_409(pool: PgPool) {
    create_department(&pool, "École").await;

    let response = post_json(
        build_test_app(pool.clone()),
        "/api/department",
        json!({ "name": "école" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let list = body_json(get(build_test_app(pool), "/api/department").await).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["name"], "École");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn blank_unicode_name_returns_400(pool: PgPool) {
    let response = post_json(
        build_test_app(pool),
        "/api/department",
        json!({ "name": "\u{3000}" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_is_sorted_by_name(pool: PgPool) {
    for name in ["Physics", "Art", "Mathematics"] {
        create_department(&pool, name).await;
    }

    let response = get(build_test_app(pool), "/api/department").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Art", "Mathematics", "Physics"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_with_no_rows_is_empty_array(pool: PgPool) {
    let response = get(build_test_app(pool), "/api/department").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_with_missing_name_returns_400(pool: PgPool) {
    let response = post_json(build_test_app(pool), "/api/department", json!({})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_with_blank_name_returns_400(pool: PgPool) {
    let response = post_json(build_test_app(pool), "/api/department", json!({ "name": "   " })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "name: must not be blank");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn malformed_json_returns_400(pool: PgPool) {
    let response = post_raw(build_test_app(pool), "/api/department", "{\"name\": ").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_then_get_returns_new_name(pool: PgPool) {
    let id = create_department(&pool, "Math").await;

    let response = patch_json(
        build_test_app(pool.clone()),
        &format!("/api/department?departmentId={id}"),
        json!({ "id": id, "name": "Applied Mathematics" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(build_test_app(pool), &format!("/api/department/{id}")).await;
    assert_eq!(body_json(response).await["name"], "Applied Mathematics");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_without_query_id_uses_body_id(pool: PgPool) {
    let id = create_department(&pool, "Math").await;

    let response = patch_json(
        build_test_app(pool),
        "/api/department",
        json!({ "id": id, "name": "Maths" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_with_mismatched_id_returns_400(pool: PgPool) {
    let id = create_department(&pool, "Math").await;

    let response = patch_json(
        build_test_app(pool.clone()),
        &format!("/api/department?departmentId={}", id + 1),
        json!({ "id": id, "name": "Renamed" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = get(build_test_app(pool), &format!("/api/department/{id}")).await;
    assert_eq!(body_json(response).await["name"], "Math");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_unknown_id_returns_404(pool: PgPool) {
    let response = patch_json(
        build_test_app(pool),
        "/api/department?departmentId=999",
        json!({ "id": 999, "name": "Ghost" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_to_other_departments_name_returns_409(pool: PgPool) {
    create_department(&pool, "Math").await;
    let physics = create_department(&pool, "Physics").await;

    let response = patch_json(
        build_test_app(pool),
        "/api/department",
        json!({ "id": physics, "name": "MATH" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_then_get_returns_404(pool: PgPool) {
    let id = create_department(&pool, "Chemistry").await;
    let uri = format!("/api/department/{id}");

    let response = delete(build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(build_test_app(pool), &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_unknown_id_returns_404(pool: PgPool) {
    let response = delete(build_test_app(pool), "/api/department/12345").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}
