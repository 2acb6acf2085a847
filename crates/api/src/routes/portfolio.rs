//! Route definitions for the portfolio catalog, mounted at `/portfolio`.
//!
//! ```text
//! GET    /     -> list_items
//! POST   /     -> create_item
//! GET    /{id} -> get_item
//! PUT    /{id} -> update_item
//! DELETE /{id} -> delete_item
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::portfolio;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(portfolio::list_items).post(portfolio::create_item))
        .route(
            "/{id}",
            get(portfolio::get_item)
                .put(portfolio::update_item)
                .delete(portfolio::delete_item),
        )
}
