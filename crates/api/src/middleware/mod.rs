//! Request extractors applied across route modules.

pub mod admin;
