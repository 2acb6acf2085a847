//! Handlers for the downloads catalog.
//!
//! Download items reference a category by name. The schema does not
//! carry the foreign key, so the reference is checked here on every
//! write.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use sitekit_core::error::CoreError;
use sitekit_db::models::download::UpsertDownloadItem;
use sitekit_db::repositories::{CategoryRepo, DownloadRepo};
use sitekit_db::DbPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::middleware::admin::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/downloads
///
/// List all download items, newest first.
pub async fn list_items(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = DownloadRepo::list(&state.pool).await?;

    Ok(Json(DataResponse { data: items }))
}

/// GET /api/v1/downloads/{id}
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let item = DownloadRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "DownloadItem",
                id: id.to_string(),
            })
        })?;

    Ok(Json(DataResponse { data: item }))
}

/// POST /api/v1/downloads
///
/// Create a new download item. The referenced category must exist.
pub async fn create_item(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<UpsertDownloadItem>,
) -> AppResult<impl IntoResponse> {
    ensure_category_exists(&state.pool, &input.category).await?;

    let item = DownloadRepo::create(&state.pool, &input).await?;

    tracing::info!(id = %item.id, title = %item.title, "Download item created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: item })))
}

/// PUT /api/v1/downloads/{id}
///
/// Replace all mutable fields of a download item. The referenced
/// category must exist.
pub async fn update_item(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpsertDownloadItem>,
) -> AppResult<impl IntoResponse> {
    ensure_category_exists(&state.pool, &input.category).await?;

    let item = DownloadRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "DownloadItem",
                id: id.to_string(),
            })
        })?;

    tracing::info!(id = %item.id, "Download item updated");

    Ok(Json(DataResponse { data: item }))
}

/// DELETE /api/v1/downloads/{id}
pub async fn delete_item(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let deleted = DownloadRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "DownloadItem",
            id: id.to_string(),
        }));
    }

    tracing::info!(%id, "Download item deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Reject writes referencing a category that is not in the registry.
async fn ensure_category_exists(pool: &DbPool, category: &str) -> AppResult<()> {
    if CategoryRepo::find_by_name(pool, category).await?.is_none() {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Unknown download category: {category}"
        ))));
    }
    Ok(())
}
