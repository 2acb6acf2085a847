//! Domain error taxonomy shared by the persistence and API layers.

/// Domain-level errors surfaced by services.
///
/// The API layer maps each variant onto an HTTP status; see
/// `sitekit-api`'s `AppError`.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// An entity lookup by key found nothing.
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    /// The request payload was malformed or violated a service rule.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The operation collides with existing state (duplicate name,
    /// still-referenced category).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The caller is not authorized for this operation.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Anything that should never happen under normal operation.
    #[error("Internal error: {0}")]
    Internal(String),
}
