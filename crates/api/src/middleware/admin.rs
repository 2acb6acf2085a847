//! Admin authorization extractor.
//!
//! The site has a single admin/non-admin boolean, carried as an
//! `admin_auth=1` cookie set by the login flow (out of scope here).
//! The predicate is derived once per request by this extractor and
//! consumed by write handlers; no handler inspects cookies itself.

use axum::extract::FromRequestParts;
use axum::http::header::COOKIE;
use axum::http::request::Parts;
use sitekit_core::error::CoreError;

use crate::error::AppError;
use crate::state::AppState;

/// The admin marker cookie, as a `name=` prefix to match against.
const ADMIN_COOKIE_PREFIX: &str = "admin_auth=";

/// Requires the admin cookie. Rejects with 401 Unauthorized otherwise.
///
/// ```ignore
/// async fn admin_only(_admin: RequireAdmin) -> AppResult<Json<()>> {
///     // request carried admin_auth=1
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin;

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if is_admin_request(parts) {
            Ok(RequireAdmin)
        } else {
            Err(AppError::Core(CoreError::Unauthorized(
                "Admin authorization required".into(),
            )))
        }
    }
}

/// True when any `Cookie` header carries `admin_auth=1`.
fn is_admin_request(parts: &Parts) -> bool {
    parts
        .headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|header| header.split(';'))
        .any(|cookie| {
            cookie
                .trim()
                .strip_prefix(ADMIN_COOKIE_PREFIX)
                .is_some_and(|value| value == "1")
        })
}
