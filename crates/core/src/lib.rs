//! Shared domain types for the sitekit content backend.
//!
//! Holds the pieces both the persistence layer and the API server need:
//! primitive type aliases, the domain error taxonomy, and the text-column
//! codec for structured content fields.

pub mod content;
pub mod error;
pub mod types;
