//! Route definitions for editable page headers, mounted at
//! `/page-sections`.
//!
//! ```text
//! GET /{page} -> get_section
//! PUT /{page} -> put_section
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::page_sections;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{page}",
        get(page_sections::get_section).put(page_sections::put_section),
    )
}
