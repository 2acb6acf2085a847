//! Route definitions for the download category registry, mounted at
//! `/download-categories`.
//!
//! ```text
//! GET    /     -> list_categories
//! POST   /     -> add_category
//! PUT    /{id} -> rename_category
//! DELETE /{id} -> delete_category
//! ```

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::categories;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(categories::list_categories).post(categories::add_category),
        )
        .route(
            "/{id}",
            put(categories::rename_category).delete(categories::delete_category),
        )
}
