//! Route definitions for the main-page card strip, mounted at
//! `/main-cards`.
//!
//! ```text
//! GET  /      -> list_cards
//! PUT  /      -> replace_cards (bulk)
//! POST /reset -> reset_cards
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::main_cards;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(main_cards::list_cards).put(main_cards::replace_cards),
        )
        .route("/reset", post(main_cards::reset_cards))
}
