//! Handlers for the portfolio catalog.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use sitekit_core::error::CoreError;
use sitekit_db::models::portfolio::UpsertPortfolioItem;
use sitekit_db::repositories::PortfolioRepo;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::middleware::admin::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/portfolio
///
/// List all portfolio items with their content fields decoded.
pub async fn list_items(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = PortfolioRepo::list(&state.pool).await?;

    Ok(Json(DataResponse { data: items }))
}

/// GET /api/v1/portfolio/{id}
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let item = PortfolioRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "PortfolioItem",
                id: id.to_string(),
            })
        })?;

    Ok(Json(DataResponse { data: item }))
}

/// POST /api/v1/portfolio
///
/// Create a new portfolio item under a generated ID.
pub async fn create_item(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<UpsertPortfolioItem>,
) -> AppResult<impl IntoResponse> {
    let item = PortfolioRepo::create(&state.pool, &input).await?;

    tracing::info!(id = %item.id, title = %item.title, "Portfolio item created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: item })))
}

/// PUT /api/v1/portfolio/{id}
///
/// Replace all mutable fields of a portfolio item.
pub async fn update_item(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpsertPortfolioItem>,
) -> AppResult<impl IntoResponse> {
    let item = PortfolioRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "PortfolioItem",
                id: id.to_string(),
            })
        })?;

    tracing::info!(id = %item.id, "Portfolio item updated");

    Ok(Json(DataResponse { data: item }))
}

/// DELETE /api/v1/portfolio/{id}
pub async fn delete_item(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let deleted = PortfolioRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "PortfolioItem",
            id: id.to_string(),
        }));
    }

    tracing::info!(%id, "Portfolio item deleted");

    Ok(StatusCode::NO_CONTENT)
}
