//! Handlers for the main-page card strip.
//!
//! The strip is edited as a whole: the admin UI sends the full card
//! list, and a reset endpoint restores the built-in set.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use sitekit_db::models::main_card::CreateMainCard;
use sitekit_db::repositories::MainCardRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::admin::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/main-cards
///
/// List all cards in display order.
pub async fn list_cards(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let cards = MainCardRepo::list(&state.pool).await?;

    Ok(Json(DataResponse { data: cards }))
}

/// PUT /api/v1/main-cards
///
/// Replace the whole card strip. The payload must be an array of cards;
/// anything else is a 400.
pub async fn replace_cards(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Json(payload): Json<serde_json::Value>,
) -> AppResult<impl IntoResponse> {
    if !payload.is_array() {
        return Err(AppError::BadRequest(
            "Expected an array of cards".to_string(),
        ));
    }
    let cards: Vec<CreateMainCard> = serde_json::from_value(payload)
        .map_err(|err| AppError::BadRequest(format!("Invalid card payload: {err}")))?;

    let cards = MainCardRepo::replace_all(&state.pool, &cards).await?;

    tracing::info!(count = cards.len(), "Main cards replaced");

    Ok(Json(DataResponse { data: cards }))
}

/// POST /api/v1/main-cards/reset
///
/// Restore the built-in default card strip.
pub async fn reset_cards(
    _admin: RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let cards = MainCardRepo::replace_all(&state.pool, &default_cards()).await?;

    tracing::info!(count = cards.len(), "Main cards reset to defaults");

    Ok(Json(DataResponse { data: cards }))
}

/// The card strip shipped with a fresh site.
fn default_cards() -> Vec<CreateMainCard> {
    [
        ("Products", "Browse our latest products.", "/products", "📦"),
        ("FAQ", "Answers to the questions we hear most.", "/faq", "❓"),
        ("Gallery", "Our work and news, in pictures.", "/gallery", "📷"),
        ("Careers", "We are looking for creative, driven people.", "/recruit", "💙"),
    ]
    .into_iter()
    .map(|(title, description, link, icon)| CreateMainCard {
        title: title.to_string(),
        description: description.to_string(),
        link: link.to_string(),
        icon: icon.to_string(),
    })
    .collect()
}
