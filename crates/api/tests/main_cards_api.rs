//! HTTP-level integration tests for the main-page card strip.

mod common;

use axum::http::StatusCode;
use common::{admin_json, admin_send, body_json, get, send_json};
use sqlx::PgPool;

#[sqlx::test]
async fn test_put_non_array_payload_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let response = admin_json(
        app,
        "PUT",
        "/api/v1/main-cards",
        serde_json::json!({"title": "not a list"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[sqlx::test]
async fn test_put_replaces_whole_strip(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    admin_json(
        app.clone(),
        "PUT",
        "/api/v1/main-cards",
        serde_json::json!([
            {"title": "Products", "description": "d", "link": "/products", "icon": "📦"},
            {"title": "FAQ", "description": "d", "link": "/faq", "icon": "❓"},
        ]),
    )
    .await;

    let response = admin_json(
        app.clone(),
        "PUT",
        "/api/v1/main-cards",
        serde_json::json!([
            {"title": "Careers", "description": "d", "link": "/recruit", "icon": "💙"},
        ]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(get(app, "/api/v1/main-cards").await).await;
    let cards = json["data"].as_array().unwrap();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0]["title"], "Careers");
}

#[sqlx::test]
async fn test_reset_restores_default_strip(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let response = admin_send(app.clone(), "POST", "/api/v1/main-cards/reset").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(get(app, "/api/v1/main-cards").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 4);
}

#[sqlx::test]
async fn test_put_without_admin_cookie_returns_401(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let response = send_json(app, "PUT", "/api/v1/main-cards", serde_json::json!([])).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
