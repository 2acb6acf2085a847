//! Route definitions for the downloads catalog, mounted at `/downloads`.
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

use crate::handlers::downloads;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(downloads::list_items).post(downloads::create_item))
        .route(
            "/{id}",
            get(downloads::get_item)
                .put(downloads::update_item)
                .delete(downloads::delete_item),
        )
}
