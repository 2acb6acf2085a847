//! HTTP-level integration tests for the page-section registry.

mod common;

use axum::http::StatusCode;
use common::{admin_json, body_json, get, send_json};
use sqlx::PgPool;

#[sqlx::test]
async fn test_put_then_get_returns_exact_fields(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let response = admin_json(
        app.clone(),
        "PUT",
        "/api/v1/page-sections/about",
        serde_json::json!({
            "title": "T1",
            "subtitle": "S1",
            "background_image": "/x.jpg",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(app, "/api/v1/page-sections/about").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["page"], "about");
    assert_eq!(json["data"]["title"], "T1");
    assert_eq!(json["data"]["subtitle"], "S1");
    assert_eq!(json["data"]["background_image"], "/x.jpg");
}

#[sqlx::test]
async fn test_get_unknown_page_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let response = get(app, "/api/v1/page-sections/products").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test]
async fn test_second_put_replaces_all_fields(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    admin_json(
        app.clone(),
        "PUT",
        "/api/v1/page-sections/downloads",
        serde_json::json!({
            "title": "Downloads",
            "subtitle": "All our files",
            "background_image": "/hero.jpg",
        }),
    )
    .await;

    // Resending without a subtitle drops it; there is no field merge.
    let response = admin_json(
        app.clone(),
        "PUT",
        "/api/v1/page-sections/downloads",
        serde_json::json!({
            "title": "Files",
            "background_image": "/hero2.jpg",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(get(app, "/api/v1/page-sections/downloads").await).await;
    assert_eq!(json["data"]["title"], "Files");
    assert!(json["data"]["subtitle"].is_null());
    assert_eq!(json["data"]["background_image"], "/hero2.jpg");
}

#[sqlx::test]
async fn test_put_without_admin_cookie_returns_401(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let response = send_json(
        app.clone(),
        "PUT",
        "/api/v1/page-sections/about",
        serde_json::json!({"title": "T", "background_image": ""}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Nothing was stored.
    let response = get(app, "/api/v1/page-sections/about").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
