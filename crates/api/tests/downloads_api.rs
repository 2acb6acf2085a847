//! HTTP-level integration tests for the downloads catalog and its
//! category registry.

mod common;

use axum::http::StatusCode;
use common::{admin_json, admin_send, body_json, get};
use sqlx::PgPool;

async fn add_category(app: axum::Router, name: &str) -> serde_json::Value {
    let response = admin_json(
        app,
        "POST",
        "/api/v1/download-categories",
        serde_json::json!({"name": name}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

fn download_payload(title: &str, category: &str) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "description": "Spec sheet",
        "category": category,
        "file_url": "/files/spec.pdf",
    })
}

// ---------------------------------------------------------------------------
// Downloads
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_create_requires_existing_category(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let response = admin_json(
        app.clone(),
        "POST",
        "/api/v1/downloads",
        download_payload("Orphan", "Nowhere"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");

    add_category(app.clone(), "Manuals").await;
    let response = admin_json(
        app,
        "POST",
        "/api/v1/downloads",
        download_payload("Manual", "Manuals"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[sqlx::test]
async fn test_update_requires_existing_category(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    add_category(app.clone(), "Manuals").await;
    let created = body_json(
        admin_json(
            app.clone(),
            "POST",
            "/api/v1/downloads",
            download_payload("Manual", "Manuals"),
        )
        .await,
    )
    .await;
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let response = admin_json(
        app,
        "PUT",
        &format!("/api/v1/downloads/{id}"),
        download_payload("Manual", "Gone"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test]
async fn test_delete_download_then_404(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    add_category(app.clone(), "Manuals").await;
    let created = body_json(
        admin_json(
            app.clone(),
            "POST",
            "/api/v1/downloads",
            download_payload("Manual", "Manuals"),
        )
        .await,
    )
    .await;
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let response = admin_send(app.clone(), "DELETE", &format!("/api/v1/downloads/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app, &format!("/api/v1/downloads/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_duplicate_category_name_returns_409(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    add_category(app.clone(), "Manuals").await;

    let response = admin_json(
        app.clone(),
        "POST",
        "/api/v1/download-categories",
        serde_json::json!({"name": "Manuals"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // The registry is unchanged.
    let json = body_json(get(app, "/api/v1/download-categories").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

#[sqlx::test]
async fn test_category_names_compare_case_sensitively(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    add_category(app.clone(), "Manuals").await;
    add_category(app.clone(), "manuals").await;

    let json = body_json(get(app, "/api/v1/download-categories").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
}

#[sqlx::test]
async fn test_blank_category_name_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let response = admin_json(
        app,
        "POST",
        "/api/v1/download-categories",
        serde_json::json!({"name": "   "}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test]
async fn test_rename_keeps_id_and_frees_old_name(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let created = add_category(app.clone(), "Brochures").await;
    let id = created["data"]["id"].as_i64().unwrap();

    let response = admin_json(
        app.clone(),
        "PUT",
        &format!("/api/v1/download-categories/{id}"),
        serde_json::json!({"name": "Catalogues"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["id"].as_i64().unwrap(), id);
    assert_eq!(json["data"]["name"], "Catalogues");

    // The old name is reusable again.
    add_category(app, "Brochures").await;
}

#[sqlx::test]
async fn test_rename_to_taken_name_returns_409(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    add_category(app.clone(), "Manuals").await;
    let created = add_category(app.clone(), "Brochures").await;
    let id = created["data"]["id"].as_i64().unwrap();

    let response = admin_json(
        app,
        "PUT",
        &format!("/api/v1/download-categories/{id}"),
        serde_json::json!({"name": "Manuals"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test]
async fn test_delete_referenced_category_refused(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let created = add_category(app.clone(), "Manuals").await;
    let id = created["data"]["id"].as_i64().unwrap();

    admin_json(
        app.clone(),
        "POST",
        "/api/v1/downloads",
        download_payload("Manual", "Manuals"),
    )
    .await;

    let response = admin_send(
        app.clone(),
        "DELETE",
        &format!("/api/v1/download-categories/{id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");

    // Zero rows deleted.
    let json = body_json(get(app, "/api/v1/download-categories").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

#[sqlx::test]
async fn test_delete_unreferenced_category_succeeds(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let created = add_category(app.clone(), "Manuals").await;
    let id = created["data"]["id"].as_i64().unwrap();

    let response = admin_send(
        app.clone(),
        "DELETE",
        &format!("/api/v1/download-categories/{id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let json = body_json(get(app, "/api/v1/download-categories").await).await;
    assert_eq!(json["data"], serde_json::json!([]));
}
