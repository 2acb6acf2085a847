//! Route definitions for the notice board, mounted at `/notices`.
//!
//! ```text
//! GET    /     -> list_notices
//! POST   /     -> create_notice
//! GET    /{id} -> get_notice (counts a view)
//! PUT    /{id} -> update_notice
//! DELETE /{id} -> delete_notice
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::notices;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(notices::list_notices).post(notices::create_notice))
        .route(
            "/{id}",
            get(notices::get_notice)
                .put(notices::update_notice)
                .delete(notices::delete_notice),
        )
}
