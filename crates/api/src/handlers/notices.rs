//! Handlers for the notice board.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use sitekit_core::error::CoreError;
use sitekit_core::types::DbId;
use sitekit_db::models::notice::UpsertNotice;
use sitekit_db::repositories::NoticeRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::admin::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/notices
///
/// List all notices, newest first. Leaves view counters untouched.
pub async fn list_notices(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let notices = NoticeRepo::list(&state.pool).await?;

    Ok(Json(DataResponse { data: notices }))
}

/// GET /api/v1/notices/{id}
///
/// Fetch one notice, counting the read: its view counter goes up by
/// exactly one.
pub async fn get_notice(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let notice = NoticeRepo::view(&state.pool, id).await?.ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "Notice",
            id: id.to_string(),
        })
    })?;

    Ok(Json(DataResponse { data: notice }))
}

/// POST /api/v1/notices
pub async fn create_notice(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<UpsertNotice>,
) -> AppResult<impl IntoResponse> {
    let notice = NoticeRepo::create(&state.pool, &input).await?;

    tracing::info!(id = notice.id, title = %notice.title, "Notice created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: notice })))
}

/// PUT /api/v1/notices/{id}
///
/// Replace title, content and author; date and views stay.
pub async fn update_notice(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpsertNotice>,
) -> AppResult<impl IntoResponse> {
    let notice = NoticeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Notice",
                id: id.to_string(),
            })
        })?;

    tracing::info!(id = notice.id, "Notice updated");

    Ok(Json(DataResponse { data: notice }))
}

/// DELETE /api/v1/notices/{id}
pub async fn delete_notice(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = NoticeRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Notice",
            id: id.to_string(),
        }));
    }

    tracing::info!(id, "Notice deleted");

    Ok(StatusCode::NO_CONTENT)
}
