//! Handlers for the download category registry.
//!
//! The repository is unconditional; the rules live here: names are
//! non-blank and unique (case-sensitive), and a category that download
//! items still reference cannot be deleted.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use sitekit_core::error::CoreError;
use sitekit_core::types::DbId;
use sitekit_db::models::category::UpsertCategory;
use sitekit_db::repositories::{CategoryRepo, DownloadRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::admin::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/download-categories
///
/// List all categories, ordered by name.
pub async fn list_categories(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let categories = CategoryRepo::list(&state.pool).await?;

    Ok(Json(DataResponse { data: categories }))
}

/// POST /api/v1/download-categories
///
/// Add a category. 409 when the name already exists.
pub async fn add_category(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<UpsertCategory>,
) -> AppResult<impl IntoResponse> {
    let name = normalized_name(&input)?;
    if CategoryRepo::find_by_name(&state.pool, name).await?.is_some() {
        return Err(conflict(name));
    }

    let category = CategoryRepo::create(&state.pool, name).await?;

    tracing::info!(id = category.id, name = %category.name, "Download category added");

    Ok((StatusCode::CREATED, Json(DataResponse { data: category })))
}

/// PUT /api/v1/download-categories/{id}
///
/// Rename a category in place. The id is stable across the rename.
pub async fn rename_category(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpsertCategory>,
) -> AppResult<impl IntoResponse> {
    let name = normalized_name(&input)?;
    // A rename to the category's own current name is a no-op, not a
    // collision.
    if let Some(existing) = CategoryRepo::find_by_name(&state.pool, name).await? {
        if existing.id != id {
            return Err(conflict(name));
        }
    }

    let category = CategoryRepo::rename(&state.pool, id, name)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Category",
                id: id.to_string(),
            })
        })?;

    tracing::info!(id = category.id, name = %category.name, "Download category renamed");

    Ok(Json(DataResponse { data: category }))
}

/// DELETE /api/v1/download-categories/{id}
///
/// Delete a category. 409 while any download item references its name.
pub async fn delete_category(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let category = CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Category",
                id: id.to_string(),
            })
        })?;

    let referencing = DownloadRepo::count_by_category(&state.pool, &category.name).await?;
    if referencing > 0 {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Category \"{}\" is referenced by {referencing} download item(s)",
            category.name
        ))));
    }

    CategoryRepo::delete(&state.pool, id).await?;

    tracing::info!(id, name = %category.name, "Download category deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Trim the requested name, rejecting blank ones.
fn normalized_name(input: &UpsertCategory) -> AppResult<&str> {
    let name = input.name.trim();
    if name.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Category name must not be blank".into(),
        )));
    }
    Ok(name)
}

fn conflict(name: &str) -> AppError {
    AppError::Core(CoreError::Conflict(format!(
        "Category \"{name}\" already exists"
    )))
}
