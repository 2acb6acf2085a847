//! Route definitions for the about-page document, mounted at `/about`.
//!
//! ```text
//! GET / -> get_about
//! PUT / -> put_about
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::about;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(about::get_about).put(about::put_about))
}
