//! Handlers for the editable page headers.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use sitekit_core::error::CoreError;
use sitekit_db::models::page_section::UpsertPageSection;
use sitekit_db::repositories::PageSectionRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::admin::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/page-sections/{page}
///
/// Returns 404 for a page with no saved section; hardcoded defaults are
/// the presentation layer's business.
pub async fn get_section(
    State(state): State<AppState>,
    Path(page): Path<String>,
) -> AppResult<impl IntoResponse> {
    let section = PageSectionRepo::find_by_page(&state.pool, &page)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "PageSection",
                id: page,
            })
        })?;

    Ok(Json(DataResponse { data: section }))
}

/// PUT /api/v1/page-sections/{page}
///
/// Insert or fully replace the header for a page.
pub async fn put_section(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(page): Path<String>,
    Json(input): Json<UpsertPageSection>,
) -> AppResult<impl IntoResponse> {
    let section = PageSectionRepo::upsert(&state.pool, &page, &input).await?;

    tracing::info!(page = %section.page, "Page section saved");

    Ok(Json(DataResponse { data: section }))
}
