//! Handlers for the about-page document.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use sitekit_core::error::CoreError;
use sitekit_db::models::about::UpsertAboutContent;
use sitekit_db::repositories::AboutRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::admin::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/about
///
/// Returns 404 until the document has been saved once.
pub async fn get_about(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let about = AboutRepo::get(&state.pool).await?.ok_or(AppError::Core(
        CoreError::NotFound {
            entity: "AboutContent",
            id: "about".to_string(),
        },
    ))?;

    Ok(Json(DataResponse { data: about }))
}

/// PUT /api/v1/about
///
/// Replace the whole about document.
pub async fn put_about(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<UpsertAboutContent>,
) -> AppResult<impl IntoResponse> {
    let about = AboutRepo::set(&state.pool, &input).await?;

    tracing::info!("About document saved");

    Ok(Json(DataResponse { data: about }))
}
