pub mod about;
pub mod categories;
pub mod downloads;
pub mod health;
pub mod main_cards;
pub mod notices;
pub mod page_sections;
pub mod portfolio;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /page-sections/{page}        GET, PUT (admin)
///
/// /about                       GET, PUT (admin)
///
/// /portfolio                   GET, POST (admin)
/// /portfolio/{id}              GET, PUT, DELETE (admin)
///
/// /downloads                   GET, POST (admin)
/// /downloads/{id}              GET, PUT, DELETE (admin)
///
/// /download-categories         GET, POST (admin)
/// /download-categories/{id}    PUT, DELETE (admin)
///
/// /notices                     GET, POST (admin)
/// /notices/{id}                GET (counts a view), PUT, DELETE (admin)
///
/// /main-cards                  GET, PUT (admin, bulk replace)
/// /main-cards/reset            POST (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/page-sections", page_sections::router())
        .nest("/about", about::router())
        .nest("/portfolio", portfolio::router())
        .nest("/downloads", downloads::router())
        .nest("/download-categories", categories::router())
        .nest("/notices", notices::router())
        .nest("/main-cards", main_cards::router())
}
